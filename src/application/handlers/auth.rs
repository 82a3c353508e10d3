use super::{MenuContext, Outcome};
use crate::application::screens::main_menu;
use crate::domain::credential::is_valid_pin;
use crate::domain::message::MessageKey;
use crate::domain::session::{Session, SessionState};
use crate::error::Result;

pub(super) async fn login(
    ctx: &MenuContext<'_>,
    session: &mut Session,
    input: &str,
) -> Result<Outcome> {
    let texts = ctx.texts(session);
    let msisdn = session.msisdn.clone();

    if ctx.subscribers.is_locked(&msisdn).await? {
        return Ok(Outcome::end(
            SessionState::AccountLocked,
            texts.get(MessageKey::AccountLocked),
        ));
    }

    // Malformed input does not count as an attempt.
    if !is_valid_pin(input) {
        return Ok(Outcome::proceed(
            SessionState::Login,
            texts.get(MessageKey::InvalidPin),
        ));
    }

    if ctx.subscribers.verify_pin(&msisdn, input).await? {
        ctx.subscribers.reset_attempts(&msisdn).await?;
        ctx.refresh(session).await?;
        tracing::info!(msisdn = %msisdn, "login succeeded");
        return Ok(Outcome::proceed(
            SessionState::MainMenu,
            main_menu(&texts, &session.subscriber),
        ));
    }

    let attempts = ctx.subscribers.increment_attempts(&msisdn).await?;
    let max_attempts = ctx.settings.max_pin_attempts;
    if attempts >= max_attempts {
        ctx.subscribers.lock(&msisdn).await?;
        ctx.refresh(session).await?;
        tracing::warn!(msisdn = %msisdn, attempts, "account locked after repeated PIN failures");
        return Ok(Outcome::end(
            SessionState::AccountLocked,
            texts.get(MessageKey::AccountLocked),
        ));
    }

    ctx.refresh(session).await?;
    let left = (max_attempts - attempts).to_string();
    Ok(Outcome::proceed(
        SessionState::WrongPin,
        format!(
            "{}\n{}",
            texts.get(MessageKey::WrongPin),
            texts.with(MessageKey::AttemptsLeft, &[("attempts", left.as_str())])
        ),
    ))
}

/// Shown between login attempts. A well-formed PIN is taken as the next attempt;
/// anything else (including "0") leads back to the login prompt.
pub(super) async fn wrong_pin(
    ctx: &MenuContext<'_>,
    session: &mut Session,
    input: &str,
) -> Result<Outcome> {
    if is_valid_pin(input) {
        return login(ctx, session, input).await;
    }
    Ok(Outcome::proceed(
        SessionState::Login,
        ctx.texts(session).get(MessageKey::LoginPrompt),
    ))
}

pub(super) fn account_locked(ctx: &MenuContext<'_>, session: &Session) -> Outcome {
    Outcome::end(
        SessionState::AccountLocked,
        ctx.texts(session).get(MessageKey::AccountLocked),
    )
}
