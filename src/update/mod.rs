//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod corrections;
mod edit;
mod selection;
mod session;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use corrections::update_corrections;
pub use edit::update_edit;
pub use selection::update_selection;
pub use session::{load_sentence, update_session};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Completed is terminal; only app-level messages still apply
    if model.session.is_completed() && !matches!(msg, Msg::App(_)) {
        return None;
    }

    match msg {
        Msg::Selection(m) => selection::update_selection(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Correction(m) => corrections::update_corrections(model, m),
        Msg::Session(m) => session::update_session(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after session state, logs the diff and checks the
/// selection invariants after every message.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SessionSnapshot::from_session(&model.session);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_session(&model.session);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    if let Some(sentence) = model.sentence() {
        if let Err(violation) = sentence.check_invariants() {
            panic!("invariant violated after {}: {}", msg_name, violation);
        }
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Selection::Move(1)`
/// - `Edit::InsertChar('x')`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Correction(m) => format!("Correction::{:?}", m),
        Msg::Session(m) => format!("Session::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
