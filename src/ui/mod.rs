// ============================================================================
// Terminal Presentation
// ============================================================================
//
// Parses operator lines into actions and draws the till screen. Holds no
// state of its own; everything is read from the LedgerSession.
//
// ============================================================================

pub mod input;
pub mod render;

pub use input::{parse_action, InputError, UiAction, HELP};
pub use render::{render_screen, ScreenOptions, CLEAR};

use crate::domain::order::LedgerSession;

/// What the loop should do after an action
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue(Option<String>),
    Quit,
}

/// Apply one operator action to the session and return a status line
pub fn dispatch(session: &mut LedgerSession, action: UiAction) -> Flow {
    let result = match action {
        UiAction::Add(item_id) => session.add_item(item_id).map(|_| None),
        UiAction::Remove(item_id) => session.remove_item(item_id).map(|_| None),
        UiAction::Pay(raw) => session.record_payment(&raw).map(|_| {
            if session.ledger().payment().is_recorded() {
                None
            } else {
                Some(format!("'{}' is not an amount, payment cleared", raw))
            }
        }),
        UiAction::Complete => session
            .complete_order()
            .map(|order| Some(format!("Order completed: {} item(s)", order.item_count()))),
        UiAction::Help => Ok(Some(HELP.to_string())),
        UiAction::Refresh => Ok(None),
        UiAction::Quit => return Flow::Quit,
    };

    match result {
        Ok(status) => Flow::Continue(status),
        Err(e) => Flow::Continue(Some(e.to_string())),
    }
}
