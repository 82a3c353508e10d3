use super::language::Language;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary value as carried in loan and account snapshots.
///
/// Wraps `rust_decimal::Decimal` so report code never touches floats.
/// Serialized transparently as the inner decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanStatus {
    Active,
    #[default]
    Completed,
}

impl LoanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Active => "Active",
            LoanStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub date: NaiveDate,
    pub amount: Amount,
    pub status: String,
}

/// Read-only view of a subscriber's loan, newest payment first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanSnapshot {
    pub status: LoanStatus,
    pub balance: Amount,
    #[serde(default)]
    pub next_payment_date: Option<NaiveDate>,
    pub monthly_amount: Amount,
    pub total_loan: Amount,
    pub paid_amount: Amount,
    #[serde(default)]
    pub payment_history: Vec<LoanPayment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Amount,
    pub balance: Amount,
}

/// Read-only view of a subscriber's account, newest transaction first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_number: String,
    pub balance: Amount,
    pub account_type: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_installment_amount: Option<Amount>,
    #[serde(default)]
    pub transactions: Vec<AccountTransaction>,
}

/// A subscriber record keyed by MSISDN.
///
/// The PIN is held only as an Argon2 PHC string. A locked subscriber stays locked
/// until an operator clears the flag outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub msisdn: String,
    pub name: String,
    #[serde(default)]
    pub pin_hash: Option<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub preferred_language: Option<Language>,
    #[serde(default)]
    pub failed_attempts: u32,
    #[serde(default)]
    pub loan: LoanSnapshot,
    #[serde(default)]
    pub account: AccountSnapshot,
}

impl Subscriber {
    pub fn new(msisdn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            msisdn: msisdn.into(),
            name: name.into(),
            pin_hash: None,
            locked: false,
            preferred_language: None,
            failed_attempts: 0,
            loan: LoanSnapshot::default(),
            account: AccountSnapshot::default(),
        }
    }

    pub fn has_pin(&self) -> bool {
        self.pin_hash.is_some()
    }

    pub fn install_pin_hash(&mut self, phc: String) {
        self.pin_hash = Some(phc);
    }

    /// Bumps the failed-attempt counter and returns the new count.
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
        self.failed_attempts
    }

    pub fn reset_attempts(&mut self) {
        self.failed_attempts = 0;
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_subscriber_is_blank() {
        let sub = Subscriber::new("211925415377", "Amina");
        assert!(!sub.has_pin());
        assert!(!sub.locked);
        assert_eq!(sub.preferred_language, None);
        assert_eq!(sub.failed_attempts, 0);
    }

    #[test]
    fn test_attempt_counter() {
        let mut sub = Subscriber::new("1", "A");
        assert_eq!(sub.record_failed_attempt(), 1);
        assert_eq!(sub.record_failed_attempt(), 2);
        sub.reset_attempts();
        assert_eq!(sub.failed_attempts, 0);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"msisdn":"211955123456","name":"Deng"}"#;
        let sub: Subscriber = serde_json::from_str(json).unwrap();
        assert_eq!(sub.msisdn, "211955123456");
        assert_eq!(sub.loan.status, LoanStatus::Completed);
        assert!(sub.account.transactions.is_empty());
    }

    #[test]
    fn test_deserialize_snapshots() {
        let json = r#"{
            "msisdn": "1",
            "name": "A",
            "preferred_language": "so",
            "loan": {
                "status": "Active",
                "balance": "12500",
                "next_payment_date": "2025-02-15",
                "monthly_amount": "2500",
                "total_loan": "50000",
                "paid_amount": "37500",
                "payment_history": [
                    {"date": "2025-01-15", "amount": "2500", "status": "Paid"}
                ]
            },
            "account": {
                "account_number": "ACC-001",
                "balance": "8200.50",
                "account_type": "Savings",
                "transactions": [
                    {"date": "2025-01-10", "type": "Deposit", "amount": "1000", "balance": "8200.50"}
                ]
            }
        }"#;
        let sub: Subscriber = serde_json::from_str(json).unwrap();
        assert_eq!(sub.preferred_language, Some(Language::Somali));
        assert_eq!(sub.loan.status, LoanStatus::Active);
        assert_eq!(sub.loan.payment_history.len(), 1);
        assert_eq!(sub.account.transactions[0].kind, "Deposit");
        assert_eq!(
            sub.account.balance,
            Amount::new(rust_decimal_macros::dec!(8200.50))
        );
    }
}
