use crate::domain::language::Language;
use crate::domain::message::MessageKey;
use crate::domain::ports::Translator;

/// Compiled-in message tables for English, Kiswahili and Somali.
///
/// English is complete. The other two cover onboarding, login and the menu
/// headings; report labels fall back through the default language to English.
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog {
    default_language: Language,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StaticCatalog {
    pub fn new(default_language: Language) -> Self {
        Self { default_language }
    }
}

impl Translator for StaticCatalog {
    fn lookup(&self, key: MessageKey, language: Language) -> Option<&str> {
        match language {
            Language::English => english(key),
            Language::Kiswahili => kiswahili(key),
            Language::Somali => somali(key),
        }
    }

    fn default_language(&self) -> Language {
        self.default_language
    }
}

const LANGUAGE_OPTIONS: &str = "1. Kiswahili\n2. English\n3. Somali";

fn english(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    Some(match key {
        LanguagePrompt => "Please select your language:",
        LanguageOptions => LANGUAGE_OPTIONS,
        InvalidOption => "Invalid option. Please try again.",
        PinSetupPrompt => "Please set your 4-digit PIN:",
        InvalidPin => "PIN must be 4 digits. Please try again.",
        PinConfirmPrompt => "Please confirm your PIN:",
        PinMismatch => "PINs do not match. Please try again.",
        PinSuccess => "PIN set successfully!",
        LoginPrompt => "Please enter your PIN:",
        WrongPin => "Wrong PIN. Please try again.",
        AttemptsLeft => "Attempts left: {attempts}",
        AccountLocked => {
            "Your account has been locked due to multiple failed attempts.\nPlease contact customer support."
        }
        UserNotFound => "User not found. Please contact customer support.",
        Goodbye => "Thank you for using our service. Goodbye!",
        GenericError => "An error occurred. Please try again later.",

        MainMenuGreeting => "Welcome, {name}",
        MainMenuOptions => "1. Loans\n2. Account Info\n3. Logout",
        BackOption => "0. Back",
        RootOption => "00. Main Menu",

        LoansMenuTitle => "Loan Menu",
        LoansMenuOptions => {
            "1. Loan Balance\n2. Payment Breakdown\n3. Mini Statement\n4. Next Due Date\n5. Loan Details"
        }
        AccountMenuTitle => "Account Info",
        AccountMenuOptions => {
            "1. Mini Statement\n2. Registered Phone\n3. Next Due Date\n4. Recent Transactions\n5. Account Details"
        }

        LoanBalanceTitle => "Loan Balance",
        LoanBalanceIntro => "Your loan balance is:",
        PaymentBreakdownTitle => "Loan Summary",
        TotalLabel => "Total",
        PaidLabel => "Paid",
        BalanceLabel => "Balance",
        RecentPaymentsTitle => "Recent Payments",
        NoRecentPayments => "No recent payments found",
        NextPaymentTitle => "Next payment due:",
        DateLabel => "Date",
        LoanInformationTitle => "LOAN INFORMATION",
        StatusLabel => "Status",
        NextPaymentLabel => "Next Payment",
        MonthlyLabel => "Monthly",

        MiniStatementTitle => "Mini Statement",
        NoRecentTransactions => "No recent transactions found",
        RegisteredNumberTitle => "Registered number:",
        InstallmentDueTitle => "Your next installment is due:",
        AmountLabel => "Amount",
        RecentTransactionsTitle => "RECENT TRANSACTIONS",
        AccountLabel => "Account",
        CurrentBalanceLabel => "Current Balance",
        RecentActivityLabel => "Recent Activity",
        AccountDetailsTitle => "ACCOUNT DETAILS",
        AccountNumberLabel => "Account Number",
        AccountTypeLabel => "Account Type",
        TransactionSummaryLabel => "Transaction Summary",
        TotalTransactionsLabel => "Total Transactions",
        LastTransactionLabel => "Last Transaction",
    })
}

fn kiswahili(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    Some(match key {
        LanguagePrompt => "Tafadhali chagua lugha yako:",
        LanguageOptions => LANGUAGE_OPTIONS,
        InvalidOption => "Chaguo si sahihi. Tafadhali jaribu tena.",
        PinSetupPrompt => "Tafadhali weka PIN yako ya tarakimu 4:",
        InvalidPin => "PIN lazima iwe na tarakimu 4. Tafadhali jaribu tena.",
        PinConfirmPrompt => "Tafadhali thibitisha PIN yako:",
        PinMismatch => "PIN hazifanani. Tafadhali jaribu tena.",
        PinSuccess => "PIN imewekwa kwa mafanikio!",
        LoginPrompt => "Tafadhali ingiza PIN yako:",
        WrongPin => "PIN si sahihi. Tafadhali jaribu tena.",
        AttemptsLeft => "Majaribio yaliyosalia: {attempts}",
        AccountLocked => {
            "Akaunti yako imefungwa kwa sababu ya majaribio mengi yasiyofaulu.\nTafadhali wasiliana na huduma kwa wateja."
        }
        UserNotFound => "Mtumiaji hajapatikana. Tafadhali wasiliana na huduma kwa wateja.",
        Goodbye => "Asante kwa kutumia huduma zetu. Kwaheri!",
        MainMenuGreeting => "Karibu, {name}",
        MainMenuOptions => "1. Mikopo\n2. Taarifa za Akaunti\n3. Ondoka",
        BackOption => "0. Rudi",
        LoansMenuTitle => "Menyu ya Mikopo",
        AccountMenuTitle => "Taarifa za Akaunti",
        _ => return None,
    })
}

fn somali(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    Some(match key {
        LanguagePrompt => "Fadlan dooro luuqadaada:",
        LanguageOptions => LANGUAGE_OPTIONS,
        InvalidOption => "Doorasho khaldan. Fadlan isku day mar kale.",
        PinSetupPrompt => "Fadlan gali PIN-kaaga 4-dhigaal ah:",
        InvalidPin => "PIN waa inuu ahaadaa 4 dhigaal. Fadlan isku day mar kale.",
        PinConfirmPrompt => "Fadlan xaqiiji PIN-kaaga:",
        PinMismatch => "PIN-yadu iskuma haboona. Fadlan isku day mar kale.",
        PinSuccess => "PIN si guul leh ayaa loo dejiyay!",
        LoginPrompt => "Fadlan gali PIN-kaaga:",
        WrongPin => "PIN khaldan. Fadlan isku day mar kale.",
        AttemptsLeft => "Isku dayo hadhay: {attempts}",
        AccountLocked => {
            "Akoonkaaga waxaa la xidhay kadib isku dayo badan oo aan guuleysan.\nFadlan la xidhiidh adeegga macaamiisha."
        }
        UserNotFound => "Isticmaalaha lama helin. Fadlan la xidhiidh adeegga macaamiisha.",
        Goodbye => "Waad ku mahadsan tahay isticmaalka adeegyadayada. Nabadeey!",
        MainMenuGreeting => "Ku soo dhowow, {name}",
        MainMenuOptions => "1. Amaahda\n2. Macluumaadka Akoonka\n3. Ka bax",
        LoansMenuTitle => "Liiska Amaahda",
        AccountMenuTitle => "Macluumaadka Akoonka",
        _ => return None,
    })
}
