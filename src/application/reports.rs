//! Read-only report screens over a subscriber's loan and account snapshots.

use super::format::{DateStyle, format_date, format_signed};
use super::screens::Texts;
use crate::domain::message::MessageKey;
use crate::domain::session::Report;
use crate::domain::subscriber::{AccountSnapshot, LoanSnapshot, LoanStatus, Subscriber};

const STATEMENT_ROWS: usize = 3;
const ACTIVITY_ROWS: usize = 4;
const UNKNOWN_PHONE: &str = "07XX XXX XXX";

pub fn render(report: Report, texts: &Texts<'_>, subscriber: &Subscriber) -> String {
    let body = match report {
        Report::LoanBalance => loan_balance(texts, &subscriber.loan),
        Report::PaymentBreakdown => payment_breakdown(texts, &subscriber.loan),
        Report::LoanMiniStatement => loan_mini_statement(texts, &subscriber.loan),
        Report::LoanNextDue => loan_next_due(texts, &subscriber.loan),
        Report::LoanDetails => loan_details(texts, &subscriber.loan),
        Report::AccountMiniStatement => account_mini_statement(texts, &subscriber.account),
        Report::RegisteredPhone => registered_phone(texts, &subscriber.account),
        Report::AccountNextDue => account_next_due(texts, &subscriber.account),
        Report::RecentTransactions => recent_transactions(texts, &subscriber.account),
        Report::AccountDetails => account_details(texts, &subscriber.account),
    };
    format!("{}\n\n{}", body, footer(texts, report))
}

fn footer(texts: &Texts<'_>, report: Report) -> String {
    if report.allows_root_shortcut() {
        format!(
            "{}\n{}",
            texts.get(MessageKey::BackOption),
            texts.get(MessageKey::RootOption)
        )
    } else {
        texts.get(MessageKey::BackOption)
    }
}

fn loan_balance(texts: &Texts<'_>, loan: &LoanSnapshot) -> String {
    format!(
        "{}\n{}\n{}",
        texts.get(MessageKey::LoanBalanceTitle),
        texts.get(MessageKey::LoanBalanceIntro),
        texts.money(loan.balance)
    )
}

fn payment_breakdown(texts: &Texts<'_>, loan: &LoanSnapshot) -> String {
    [
        texts.get(MessageKey::PaymentBreakdownTitle),
        texts.field(MessageKey::TotalLabel, texts.money(loan.total_loan)),
        texts.field(MessageKey::PaidLabel, texts.money(loan.paid_amount)),
        texts.field(MessageKey::BalanceLabel, texts.money(loan.balance)),
    ]
    .join("\n")
}

fn loan_mini_statement(texts: &Texts<'_>, loan: &LoanSnapshot) -> String {
    let mut lines = vec![texts.get(MessageKey::RecentPaymentsTitle)];
    if loan.payment_history.is_empty() {
        lines.push(texts.get(MessageKey::NoRecentPayments));
    }
    lines.extend(loan.payment_history.iter().take(STATEMENT_ROWS).map(|payment| {
        format!(
            "{}: {}",
            format_date(Some(payment.date), DateStyle::DayMonth),
            texts.money(payment.amount)
        )
    }));
    lines.join("\n")
}

fn loan_next_due(texts: &Texts<'_>, loan: &LoanSnapshot) -> String {
    [
        texts.get(MessageKey::NextPaymentTitle),
        texts.money(loan.monthly_amount),
        texts.field(
            MessageKey::DateLabel,
            format_date(loan.next_payment_date, DateStyle::Numeric),
        ),
    ]
    .join("\n")
}

fn loan_details(texts: &Texts<'_>, loan: &LoanSnapshot) -> String {
    let mut out = format!(
        "{}\n\n{}\n{}",
        texts.get(MessageKey::LoanInformationTitle),
        texts.field(MessageKey::StatusLabel, loan.status.label()),
        texts.field(MessageKey::BalanceLabel, texts.money(loan.balance))
    );
    if loan.status == LoanStatus::Active {
        out.push('\n');
        out.push_str(&texts.field(
            MessageKey::NextPaymentLabel,
            format_date(loan.next_payment_date, DateStyle::Long),
        ));
        out.push('\n');
        out.push_str(&texts.field(MessageKey::MonthlyLabel, texts.money(loan.monthly_amount)));
    }
    out
}

fn account_mini_statement(texts: &Texts<'_>, account: &AccountSnapshot) -> String {
    let mut lines = vec![texts.get(MessageKey::MiniStatementTitle)];
    if account.transactions.is_empty() {
        lines.push(texts.get(MessageKey::NoRecentTransactions));
    }
    lines.extend(account.transactions.iter().take(STATEMENT_ROWS).map(|txn| {
        format!(
            "{} {}",
            format_date(Some(txn.date), DateStyle::DayMonth),
            texts.money(txn.amount)
        )
    }));
    lines.join("\n")
}

fn registered_phone(texts: &Texts<'_>, account: &AccountSnapshot) -> String {
    format!(
        "{}\n{}",
        texts.get(MessageKey::RegisteredNumberTitle),
        account.phone_number.as_deref().unwrap_or(UNKNOWN_PHONE)
    )
}

fn account_next_due(texts: &Texts<'_>, account: &AccountSnapshot) -> String {
    let amount = account
        .next_installment_amount
        .map(|amount| texts.money(amount))
        .unwrap_or_else(|| "N/A".to_string());
    [
        texts.get(MessageKey::InstallmentDueTitle),
        format_date(account.next_due_date, DateStyle::Numeric),
        texts.field(MessageKey::AmountLabel, amount),
    ]
    .join("\n")
}

fn recent_transactions(texts: &Texts<'_>, account: &AccountSnapshot) -> String {
    let mut out = format!(
        "{}\n\n{}\n{}",
        texts.get(MessageKey::RecentTransactionsTitle),
        texts.field(MessageKey::AccountLabel, &account.account_number),
        texts.field(MessageKey::CurrentBalanceLabel, texts.money(account.balance))
    );
    if !account.transactions.is_empty() {
        out.push_str(&format!("\n\n{}:", texts.get(MessageKey::RecentActivityLabel)));
        for txn in account.transactions.iter().take(ACTIVITY_ROWS) {
            out.push_str(&format!(
                "\n{}: {} {}",
                format_date(Some(txn.date), DateStyle::Short),
                txn.kind,
                format_signed(txn.amount)
            ));
        }
    }
    out
}

fn account_details(texts: &Texts<'_>, account: &AccountSnapshot) -> String {
    let mut out = format!(
        "{}\n\n{}\n{}\n{}",
        texts.get(MessageKey::AccountDetailsTitle),
        texts.field(MessageKey::AccountNumberLabel, &account.account_number),
        texts.field(MessageKey::AccountTypeLabel, &account.account_type),
        texts.field(MessageKey::CurrentBalanceLabel, texts.money(account.balance))
    );
    if let Some(latest) = account.transactions.first() {
        out.push_str(&format!(
            "\n\n{}:\n{}\n{}",
            texts.get(MessageKey::TransactionSummaryLabel),
            texts.field(
                MessageKey::TotalTransactionsLabel,
                account.transactions.len().to_string()
            ),
            texts.field(
                MessageKey::LastTransactionLabel,
                format_date(Some(latest.date), DateStyle::Short)
            )
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::Language;
    use crate::domain::subscriber::{AccountTransaction, Amount, LoanPayment};
    use crate::infrastructure::catalog::StaticCatalog;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn subscriber() -> Subscriber {
        let mut sub = Subscriber::new("1", "Amina");
        sub.loan = LoanSnapshot {
            status: LoanStatus::Active,
            balance: Amount::new(dec!(12500)),
            next_payment_date: Some(date(2025, 2, 15)),
            monthly_amount: Amount::new(dec!(2500)),
            total_loan: Amount::new(dec!(50000)),
            paid_amount: Amount::new(dec!(37500)),
            payment_history: (1..=4)
                .map(|m| LoanPayment {
                    date: date(2025, m, 15),
                    amount: Amount::new(dec!(2500)),
                    status: "Paid".to_string(),
                })
                .collect(),
        };
        sub.account = AccountSnapshot {
            account_number: "ACC-1".to_string(),
            balance: Amount::new(dec!(45750.50)),
            account_type: "Savings".to_string(),
            phone_number: None,
            next_due_date: None,
            next_installment_amount: None,
            transactions: vec![
                AccountTransaction {
                    date: date(2025, 1, 20),
                    kind: "Deposit".to_string(),
                    amount: Amount::new(dec!(10000)),
                    balance: Amount::new(dec!(45750.50)),
                },
                AccountTransaction {
                    date: date(2025, 1, 15),
                    kind: "Withdrawal".to_string(),
                    amount: Amount::new(dec!(-2500)),
                    balance: Amount::new(dec!(35750.50)),
                },
            ],
        };
        sub
    }

    fn english(catalog: &StaticCatalog) -> Texts<'_> {
        Texts::new(catalog, Some(Language::English), "KES")
    }

    #[test]
    fn test_loan_balance() {
        let catalog = StaticCatalog::default();
        assert_eq!(
            render(Report::LoanBalance, &english(&catalog), &subscriber()),
            "Loan Balance\nYour loan balance is:\nKES 12,500\n\n0. Back"
        );
    }

    #[test]
    fn test_payment_breakdown() {
        let catalog = StaticCatalog::default();
        assert_eq!(
            render(Report::PaymentBreakdown, &english(&catalog), &subscriber()),
            "Loan Summary\nTotal: KES 50,000\nPaid: KES 37,500\nBalance: KES 12,500\n\n0. Back"
        );
    }

    #[test]
    fn test_mini_statement_caps_rows() {
        let catalog = StaticCatalog::default();
        let text = render(Report::LoanMiniStatement, &english(&catalog), &subscriber());
        assert_eq!(text.matches("KES 2,500").count(), 3);
        assert!(text.contains("15/01: KES 2,500"));
        assert!(!text.contains("15/04"));
    }

    #[test]
    fn test_empty_histories() {
        let catalog = StaticCatalog::default();
        let sub = Subscriber::new("2", "Deng");
        assert!(
            render(Report::LoanMiniStatement, &english(&catalog), &sub)
                .contains("No recent payments found")
        );
        assert!(
            render(Report::AccountMiniStatement, &english(&catalog), &sub)
                .contains("No recent transactions found")
        );
        let details = render(Report::AccountDetails, &english(&catalog), &sub);
        assert!(!details.contains("Transaction Summary"));
    }

    #[test]
    fn test_next_due_formats_numeric_date() {
        let catalog = StaticCatalog::default();
        assert_eq!(
            render(Report::LoanNextDue, &english(&catalog), &subscriber()),
            "Next payment due:\nKES 2,500\nDate: 15/02/2025\n\n0. Back"
        );
    }

    #[test]
    fn test_loan_details_only_shows_schedule_when_active() {
        let catalog = StaticCatalog::default();
        let mut sub = subscriber();
        let active = render(Report::LoanDetails, &english(&catalog), &sub);
        assert!(active.contains("Next Payment: 15 Feb 2025"));
        assert!(active.ends_with("0. Back\n00. Main Menu"));

        sub.loan.status = LoanStatus::Completed;
        let completed = render(Report::LoanDetails, &english(&catalog), &sub);
        assert!(completed.contains("Status: Completed"));
        assert!(!completed.contains("Monthly"));
    }

    #[test]
    fn test_account_fallbacks() {
        let catalog = StaticCatalog::default();
        let sub = subscriber();
        assert_eq!(
            render(Report::RegisteredPhone, &english(&catalog), &sub),
            "Registered number:\n07XX XXX XXX\n\n0. Back"
        );
        assert_eq!(
            render(Report::AccountNextDue, &english(&catalog), &sub),
            "Your next installment is due:\nN/A\nAmount: N/A\n\n0. Back"
        );
    }

    #[test]
    fn test_recent_transactions_signs_amounts() {
        let catalog = StaticCatalog::default();
        let text = render(Report::RecentTransactions, &english(&catalog), &subscriber());
        assert!(text.contains("Current Balance: KES 45,750.5"));
        assert!(text.contains("20 Jan: Deposit +10,000"));
        assert!(text.contains("15 Jan: Withdrawal -2,500"));
    }

    #[test]
    fn test_account_details_summary() {
        let catalog = StaticCatalog::default();
        let text = render(Report::AccountDetails, &english(&catalog), &subscriber());
        assert!(text.contains("Account Type: Savings"));
        assert!(text.contains("Total Transactions: 2"));
        assert!(text.contains("Last Transaction: 20 Jan"));
    }
}
