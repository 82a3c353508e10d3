use super::{BACK, MenuContext, Outcome, ROOT};
use crate::application::reports;
use crate::application::screens::{self, account_menu};
use crate::domain::message::MessageKey;
use crate::domain::session::{Report, Session, SessionState};

pub(super) fn main_menu(ctx: &MenuContext<'_>, session: &Session, input: &str) -> Outcome {
    let texts = ctx.texts(session);
    match input {
        "1" => Outcome::proceed(SessionState::LoansMenu, screens::loans_menu(&texts)),
        "2" => Outcome::proceed(SessionState::AccountInfoMenu, account_menu(&texts)),
        "3" => Outcome::end(SessionState::MainMenu, texts.get(MessageKey::Goodbye)),
        "" | BACK | ROOT => {
            Outcome::proceed(SessionState::MainMenu, screens::main_menu(&texts, &session.subscriber))
        }
        _ => Outcome::proceed(
            SessionState::MainMenu,
            texts.prefixed(
                MessageKey::InvalidOption,
                &screens::main_menu(&texts, &session.subscriber),
            ),
        ),
    }
}

pub(super) fn loans_menu(ctx: &MenuContext<'_>, session: &Session, input: &str) -> Outcome {
    let report = match input {
        "1" => Report::LoanBalance,
        "2" => Report::PaymentBreakdown,
        "3" => Report::LoanMiniStatement,
        "4" => Report::LoanNextDue,
        "5" => Report::LoanDetails,
        BACK | ROOT => return to_main_menu(ctx, session),
        _ => {
            let texts = ctx.texts(session);
            return Outcome::proceed(
                SessionState::LoansMenu,
                texts.prefixed(MessageKey::InvalidOption, &screens::loans_menu(&texts)),
            );
        }
    };
    open_report(ctx, session, report)
}

pub(super) fn account_info_menu(ctx: &MenuContext<'_>, session: &Session, input: &str) -> Outcome {
    let report = match input {
        "1" => Report::AccountMiniStatement,
        "2" => Report::RegisteredPhone,
        "3" => Report::AccountNextDue,
        "4" => Report::RecentTransactions,
        "5" => Report::AccountDetails,
        BACK | ROOT => return to_main_menu(ctx, session),
        _ => {
            let texts = ctx.texts(session);
            return Outcome::proceed(
                SessionState::AccountInfoMenu,
                texts.prefixed(MessageKey::InvalidOption, &account_menu(&texts)),
            );
        }
    };
    open_report(ctx, session, report)
}

pub(super) fn to_main_menu(ctx: &MenuContext<'_>, session: &Session) -> Outcome {
    Outcome::proceed(
        SessionState::MainMenu,
        screens::main_menu(&ctx.texts(session), &session.subscriber),
    )
}

fn open_report(ctx: &MenuContext<'_>, session: &Session, report: Report) -> Outcome {
    Outcome::proceed(
        SessionState::Report(report),
        reports::render(report, &ctx.texts(session), &session.subscriber),
    )
}
