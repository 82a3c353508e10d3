//! One handler per navigation state.
//!
//! Handlers never fail for business reasons: bad input, wrong PINs and locked
//! accounts are ordinary `Outcome`s. An `Err` means a store failed.

mod auth;
mod display;
mod menus;
mod onboarding;

use super::screens::{Texts, screen};
use crate::config::MenuSettings;
use crate::domain::message::MessageKey;
use crate::domain::ports::{SubscriberStore, Translator};
use crate::domain::session::{Session, SessionState};
use crate::error::{Result, UssdError};

/// "Back one level".
pub const BACK: &str = "0";
/// "Jump to the main menu".
pub const ROOT: &str = "00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

impl Flow {
    /// The `FreeFlow` header value for this flow.
    pub fn marker(&self) -> &'static str {
        match self {
            Flow::Continue => "FC",
            Flow::Terminate => "FB",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: SessionState,
    pub message: String,
    pub flow: Flow,
}

impl Outcome {
    pub fn proceed(state: SessionState, message: String) -> Self {
        Self {
            state,
            message,
            flow: Flow::Continue,
        }
    }

    pub fn end(state: SessionState, message: String) -> Self {
        Self {
            state,
            message,
            flow: Flow::Terminate,
        }
    }
}

/// What a handler may touch besides the session itself.
pub struct MenuContext<'a> {
    pub subscribers: &'a dyn SubscriberStore,
    pub translator: &'a dyn Translator,
    pub settings: &'a MenuSettings,
}

impl<'a> MenuContext<'a> {
    pub fn texts(&self, session: &Session) -> Texts<'a> {
        Texts::new(self.translator, session.language, &self.settings.currency)
    }

    /// Reloads the session's cached subscriber after a store mutation.
    pub async fn refresh(&self, session: &mut Session) -> Result<()> {
        session.subscriber = self
            .subscribers
            .get(&session.msisdn)
            .await?
            .ok_or_else(|| {
                UssdError::StorageError(format!("subscriber {} vanished mid-session", session.msisdn))
            })?;
        Ok(())
    }
}

/// Routes `input` to the handler for the session's current state.
pub async fn dispatch(ctx: &MenuContext<'_>, session: &mut Session, input: &str) -> Result<Outcome> {
    match session.state {
        SessionState::Initial => onboarding::initial(ctx, session).await,
        SessionState::LanguageSelection => onboarding::select_language(ctx, session, input).await,
        SessionState::PinSetup => Ok(onboarding::pin_setup(ctx, session, input)),
        SessionState::PinConfirmation => onboarding::pin_confirmation(ctx, session, input).await,
        SessionState::Login => auth::login(ctx, session, input).await,
        SessionState::WrongPin => auth::wrong_pin(ctx, session, input).await,
        SessionState::AccountLocked => Ok(auth::account_locked(ctx, session)),
        SessionState::MainMenu => Ok(menus::main_menu(ctx, session, input)),
        SessionState::LoansMenu => Ok(menus::loans_menu(ctx, session, input)),
        SessionState::AccountInfoMenu => Ok(menus::account_info_menu(ctx, session, input)),
        SessionState::Report(report) => Ok(display::show(ctx, session, input, report)),
    }
}

/// Returns to the state on top of the history stack. With nothing to go back to,
/// the session ends.
pub(crate) fn go_back(ctx: &MenuContext<'_>, session: &Session) -> Outcome {
    let texts = ctx.texts(session);
    match session.history.peek() {
        Some(previous) => Outcome::proceed(previous, screen(&texts, session, previous)),
        None => Outcome::end(session.state, texts.get(MessageKey::Goodbye)),
    }
}
