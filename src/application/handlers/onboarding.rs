use super::auth::account_locked;
use super::{BACK, MenuContext, Outcome, go_back};
use crate::application::screens::{language_prompt, main_menu};
use crate::domain::credential::is_valid_pin;
use crate::domain::language::Language;
use crate::domain::message::MessageKey;
use crate::domain::session::{Session, SessionState};
use crate::error::{Result, UssdError};

/// Entry point. Input is ignored.
pub(super) async fn initial(ctx: &MenuContext<'_>, session: &mut Session) -> Result<Outcome> {
    match session.subscriber.preferred_language {
        None => Ok(Outcome::proceed(
            SessionState::LanguageSelection,
            language_prompt(&ctx.texts(session)),
        )),
        Some(language) => {
            session.language = Some(language);
            credential_step(ctx, session).await
        }
    }
}

pub(super) async fn select_language(
    ctx: &MenuContext<'_>,
    session: &mut Session,
    input: &str,
) -> Result<Outcome> {
    if input == BACK {
        return Ok(go_back(ctx, session));
    }

    let Some(language) = Language::from_selection(input) else {
        let texts = ctx.texts(session);
        return Ok(Outcome::proceed(
            SessionState::LanguageSelection,
            texts.prefixed(MessageKey::InvalidOption, &language_prompt(&texts)),
        ));
    };

    session.language = Some(language);
    ctx.subscribers
        .set_language(&session.msisdn, language)
        .await?;
    session.subscriber.preferred_language = Some(language);
    tracing::debug!(msisdn = %session.msisdn, language = %language, "language selected");

    credential_step(ctx, session).await
}

pub(super) fn pin_setup(ctx: &MenuContext<'_>, session: &mut Session, input: &str) -> Outcome {
    if input == BACK {
        return go_back(ctx, session);
    }

    let texts = ctx.texts(session);
    if !is_valid_pin(input) {
        return Outcome::proceed(SessionState::PinSetup, texts.get(MessageKey::InvalidPin));
    }

    session.scratch.pending_pin = Some(input.to_string());
    Outcome::proceed(
        SessionState::PinConfirmation,
        texts.get(MessageKey::PinConfirmPrompt),
    )
}

pub(super) async fn pin_confirmation(
    ctx: &MenuContext<'_>,
    session: &mut Session,
    input: &str,
) -> Result<Outcome> {
    let texts = ctx.texts(session);

    if input == BACK {
        session.scratch.clear();
        return Ok(Outcome::proceed(
            SessionState::PinSetup,
            texts.get(MessageKey::PinSetupPrompt),
        ));
    }

    if !is_valid_pin(input) {
        return Ok(Outcome::proceed(
            SessionState::PinConfirmation,
            format!(
                "{}\n\n{}",
                texts.get(MessageKey::InvalidPin),
                texts.get(MessageKey::PinConfirmPrompt)
            ),
        ));
    }

    let pending = session.scratch.pending_pin.take();
    if pending.as_deref() != Some(input) {
        session.scratch.clear();
        return Ok(Outcome::proceed(
            SessionState::PinSetup,
            format!(
                "{}\n\n{}",
                texts.get(MessageKey::PinMismatch),
                texts.get(MessageKey::PinSetupPrompt)
            ),
        ));
    }

    if ctx.subscribers.is_locked(&session.msisdn).await? {
        session.scratch.clear();
        return Ok(account_locked(ctx, session));
    }

    if !ctx.subscribers.set_pin(&session.msisdn, input).await? {
        return Err(UssdError::StorageError(format!(
            "subscriber {} vanished before PIN could be stored",
            session.msisdn
        )));
    }
    session.scratch.clear();
    ctx.refresh(session).await?;
    tracing::info!(msisdn = %session.msisdn, "PIN set");

    Ok(Outcome::proceed(
        SessionState::MainMenu,
        format!(
            "{}\n\n{}",
            texts.get(MessageKey::PinSuccess),
            main_menu(&texts, &session.subscriber)
        ),
    ))
}

/// Login when a PIN exists, otherwise PIN setup. A locked subscriber never
/// reaches setup.
async fn credential_step(ctx: &MenuContext<'_>, session: &Session) -> Result<Outcome> {
    let texts = ctx.texts(session);
    if session.subscriber.has_pin() {
        return Ok(Outcome::proceed(
            SessionState::Login,
            texts.get(MessageKey::LoginPrompt),
        ));
    }
    if ctx.subscribers.is_locked(&session.msisdn).await? {
        return Ok(account_locked(ctx, session));
    }
    Ok(Outcome::proceed(
        SessionState::PinSetup,
        texts.get(MessageKey::PinSetupPrompt),
    ))
}
