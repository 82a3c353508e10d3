/// Keys into the translation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LanguagePrompt,
    LanguageOptions,
    InvalidOption,
    PinSetupPrompt,
    InvalidPin,
    PinConfirmPrompt,
    PinMismatch,
    PinSuccess,
    LoginPrompt,
    WrongPin,
    AttemptsLeft,
    AccountLocked,
    UserNotFound,
    Goodbye,
    GenericError,

    MainMenuGreeting,
    MainMenuOptions,
    BackOption,
    RootOption,

    LoansMenuTitle,
    LoansMenuOptions,
    AccountMenuTitle,
    AccountMenuOptions,

    LoanBalanceTitle,
    LoanBalanceIntro,
    PaymentBreakdownTitle,
    TotalLabel,
    PaidLabel,
    BalanceLabel,
    RecentPaymentsTitle,
    NoRecentPayments,
    NextPaymentTitle,
    DateLabel,
    LoanInformationTitle,
    StatusLabel,
    NextPaymentLabel,
    MonthlyLabel,

    MiniStatementTitle,
    NoRecentTransactions,
    RegisteredNumberTitle,
    InstallmentDueTitle,
    AmountLabel,
    RecentTransactionsTitle,
    AccountLabel,
    CurrentBalanceLabel,
    RecentActivityLabel,
    AccountDetailsTitle,
    AccountNumberLabel,
    AccountTypeLabel,
    TransactionSummaryLabel,
    TotalTransactionsLabel,
    LastTransactionLabel,
}
