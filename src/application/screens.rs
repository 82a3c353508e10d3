//! Prompt and menu rendering shared by the state handlers.

use super::format::format_money;
use super::reports;
use crate::domain::language::Language;
use crate::domain::message::MessageKey;
use crate::domain::ports::Translator;
use crate::domain::session::{Session, SessionState};
use crate::domain::subscriber::{Amount, Subscriber};

/// Message lookup bound to one session's language and the configured currency label.
#[derive(Clone, Copy)]
pub struct Texts<'a> {
    translator: &'a dyn Translator,
    language: Option<Language>,
    currency: &'a str,
}

impl<'a> Texts<'a> {
    pub fn new(translator: &'a dyn Translator, language: Option<Language>, currency: &'a str) -> Self {
        Self {
            translator,
            language,
            currency,
        }
    }

    pub fn get(&self, key: MessageKey) -> String {
        self.translator.text(key, self.language)
    }

    pub fn with(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        self.translator.render(key, self.language, params)
    }

    /// `"<label>: <value>"` with a translated label.
    pub fn field(&self, key: MessageKey, value: impl AsRef<str>) -> String {
        format!("{}: {}", self.get(key), value.as_ref())
    }

    pub fn money(&self, amount: Amount) -> String {
        format_money(self.currency, amount)
    }

    /// `"<notice>\n\n<body>"`, used for validation notices ahead of a re-rendered screen.
    pub fn prefixed(&self, key: MessageKey, body: &str) -> String {
        format!("{}\n\n{}", self.get(key), body)
    }
}

pub fn language_prompt(texts: &Texts<'_>) -> String {
    format!(
        "{}\n{}",
        texts.get(MessageKey::LanguagePrompt),
        texts.get(MessageKey::LanguageOptions)
    )
}

pub fn main_menu(texts: &Texts<'_>, subscriber: &Subscriber) -> String {
    format!(
        "{}\n{}",
        texts.with(MessageKey::MainMenuGreeting, &[("name", subscriber.name.as_str())]),
        texts.get(MessageKey::MainMenuOptions)
    )
}

pub fn loans_menu(texts: &Texts<'_>) -> String {
    format!(
        "{}\n{}\n\n{}",
        texts.get(MessageKey::LoansMenuTitle),
        texts.get(MessageKey::LoansMenuOptions),
        texts.get(MessageKey::BackOption)
    )
}

pub fn account_menu(texts: &Texts<'_>) -> String {
    format!(
        "{}\n{}\n\n{}",
        texts.get(MessageKey::AccountMenuTitle),
        texts.get(MessageKey::AccountMenuOptions),
        texts.get(MessageKey::BackOption)
    )
}

/// Renders the screen a session shows when it (re-)enters `state` without new input.
pub fn screen(texts: &Texts<'_>, session: &Session, state: SessionState) -> String {
    match state {
        SessionState::Initial | SessionState::LanguageSelection => language_prompt(texts),
        SessionState::PinSetup => texts.get(MessageKey::PinSetupPrompt),
        SessionState::PinConfirmation => texts.get(MessageKey::PinConfirmPrompt),
        SessionState::Login | SessionState::WrongPin => texts.get(MessageKey::LoginPrompt),
        SessionState::AccountLocked => texts.get(MessageKey::AccountLocked),
        SessionState::MainMenu => main_menu(texts, &session.subscriber),
        SessionState::LoansMenu => loans_menu(texts),
        SessionState::AccountInfoMenu => account_menu(texts),
        SessionState::Report(report) => reports::render(report, texts, &session.subscriber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::StaticCatalog;

    #[test]
    fn test_main_menu_is_personalised() {
        let catalog = StaticCatalog::default();
        let texts = Texts::new(&catalog, Some(Language::English), "KES");
        let menu = main_menu(&texts, &Subscriber::new("1", "Amina"));
        assert_eq!(menu, "Welcome, Amina\n1. Loans\n2. Account Info\n3. Logout");
    }

    #[test]
    fn test_language_prompt_lists_choices() {
        let catalog = StaticCatalog::default();
        let texts = Texts::new(&catalog, None, "KES");
        let prompt = language_prompt(&texts);
        assert!(prompt.starts_with("Please select your language:"));
        assert!(prompt.contains("1. Kiswahili"));
        assert!(prompt.contains("3. Somali"));
    }

    #[test]
    fn test_screen_covers_menus() {
        let catalog = StaticCatalog::default();
        let texts = Texts::new(&catalog, Some(Language::English), "KES");
        let session = Session::new("s", Subscriber::new("1", "Amina"));
        assert!(screen(&texts, &session, SessionState::LoansMenu).starts_with("Loan Menu"));
        assert!(screen(&texts, &session, SessionState::AccountInfoMenu).starts_with("Account Info"));
        assert_eq!(
            screen(&texts, &session, SessionState::WrongPin),
            "Please enter your PIN:"
        );
    }
}
