use super::language::Language;
use super::subscriber::Subscriber;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::time::Instant;

/// Upper bound on remembered back-navigation steps. Oldest entries are dropped first.
pub const HISTORY_CAPACITY: usize = 16;

/// One-shot report screens. Each returns to its parent menu on the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Report {
    LoanBalance,
    PaymentBreakdown,
    LoanMiniStatement,
    LoanNextDue,
    LoanDetails,
    AccountMiniStatement,
    RegisteredPhone,
    AccountNextDue,
    RecentTransactions,
    AccountDetails,
}

impl Report {
    pub fn parent(&self) -> SessionState {
        match self {
            Report::LoanBalance
            | Report::PaymentBreakdown
            | Report::LoanMiniStatement
            | Report::LoanNextDue
            | Report::LoanDetails => SessionState::LoansMenu,
            Report::AccountMiniStatement
            | Report::RegisteredPhone
            | Report::AccountNextDue
            | Report::RecentTransactions
            | Report::AccountDetails => SessionState::AccountInfoMenu,
        }
    }

    /// Extended reports also accept "00" to jump straight to the main menu.
    pub fn allows_root_shortcut(&self) -> bool {
        matches!(
            self,
            Report::LoanDetails | Report::RecentTransactions | Report::AccountDetails
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Initial,
    LanguageSelection,
    PinSetup,
    PinConfirmation,
    Login,
    WrongPin,
    AccountLocked,
    MainMenu,
    LoansMenu,
    AccountInfoMenu,
    Report(Report),
}

/// Previously visited states, most recent last.
///
/// Revisiting a state that is already on the stack unwinds the stack to just below
/// it, so menu loops (menu -> report -> menu) never grow the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<SessionState>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Records a transition `from -> to`.
    pub fn record(&mut self, from: SessionState, to: SessionState) {
        if let Some(pos) = self.entries.iter().position(|s| *s == to) {
            self.entries.truncate(pos);
            return;
        }
        if from == SessionState::Initial {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(from);
    }

    pub fn peek(&self) -> Option<SessionState> {
        self.entries.back().copied()
    }

    pub fn contains(&self, state: SessionState) -> bool {
        self.entries.contains(&state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = SessionState> + '_ {
        self.entries.iter().copied()
    }
}

/// Per-session values that never reach the subscriber record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scratch {
    pub pending_pin: Option<String>,
}

impl Scratch {
    pub fn clear(&mut self) {
        self.pending_pin = None;
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub msisdn: String,
    pub state: SessionState,
    pub history: History,
    pub language: Option<Language>,
    pub scratch: Scratch,
    /// Snapshot of the subscriber taken when the session started, refreshed after
    /// every mutation the session itself makes.
    pub subscriber: Subscriber,
    pub last_activity: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>, subscriber: Subscriber) -> Self {
        Self {
            id: id.into(),
            msisdn: subscriber.msisdn.clone(),
            state: SessionState::Initial,
            history: History::default(),
            language: subscriber.preferred_language,
            scratch: Scratch::default(),
            subscriber,
            last_activity: Instant::now(),
        }
    }
}
