use super::menus::to_main_menu;
use super::{MenuContext, Outcome, ROOT};
use crate::application::screens::screen;
use crate::domain::session::{Report, Session};

/// Any input on a report leaves it. "00" jumps home where the footer offers it;
/// everything else returns to the menu the report was opened from.
pub(super) fn show(ctx: &MenuContext<'_>, session: &Session, input: &str, report: Report) -> Outcome {
    if input == ROOT && report.allows_root_shortcut() {
        return to_main_menu(ctx, session);
    }
    let parent = report.parent();
    Outcome::proceed(parent, screen(&ctx.texts(session), session, parent))
}
