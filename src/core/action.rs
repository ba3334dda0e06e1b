//! # Actions
//!
//! Everything that can happen while browsing becomes an `Action`.
//! User presses `j`? That's `Action::MoveCursor(1)`.
//! User presses `h`? That's `Action::Ascend`.
//!
//! The `update()` function applies an action to the navigation state and
//! returns an `Effect` telling the outer loop what to do next. No side
//! effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  Effect (reload / open / spawn / quit)
//! ```
//!
//! "Reload this directory" is an explicit `Effect::Reload` the event loop
//! consumes, which makes every transition testable: apply an action, assert
//! on state and effect.

use std::path::PathBuf;

use log::debug;

use crate::core::state::App;

/// A decoded user intention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by a signed delta, clamped to the listing.
    MoveCursor(i64),
    /// Enter the directory under the cursor.
    Descend,
    /// Go to the parent directory, remembering where we came from.
    Ascend,
    /// Jump to the user's home directory.
    GoHome(PathBuf),
    /// Flip dotfile visibility.
    ToggleHidden,
    /// Open the entry under the cursor (descend or hand off to the opener).
    OpenEntry,
    Quit,
}

/// What the event loop must do after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Something visible changed; redraw on the next tick.
    Redraw,
    /// The effective path changed; rebuild the snapshot before rendering.
    Reload,
    /// Hand the file to the platform opener. Navigation state unchanged.
    OpenFile(PathBuf),
    Quit,
}

/// Apply one action to the navigation state.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::MoveCursor(delta) => move_cursor(app, delta),
        Action::Descend => descend(app),
        Action::Ascend => ascend(app),
        Action::GoHome(home) => enter(app, home),
        Action::ToggleHidden => {
            app.show_hidden = !app.show_hidden;
            app.cursor = 0;
            app.scroll = 0;
            app.pending_highlight = None;
            Effect::Reload
        }
        Action::OpenEntry => match app.cursor_entry() {
            Some(e) if e.is_dir() => descend(app),
            Some(e) if e.is_regular() => match app.cursor_path() {
                Some(p) => Effect::OpenFile(p),
                None => Effect::None,
            },
            _ => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

fn move_cursor(app: &mut App, delta: i64) -> Effect {
    let len = app.snapshot.len();
    if len == 0 {
        return Effect::None;
    }
    let target = (app.cursor as i64 + delta).clamp(0, len as i64 - 1) as usize;
    if target == app.cursor {
        return Effect::None; // already at the edge
    }
    app.cursor = target;
    Effect::Redraw
}

fn descend(app: &mut App) -> Effect {
    match app.cursor_entry() {
        Some(e) if e.is_dir() => {
            let next = app.path.join(&e.name);
            enter(app, next)
        }
        _ => Effect::None,
    }
}

fn enter(app: &mut App, path: PathBuf) -> Effect {
    app.path = path;
    app.cursor = 0;
    app.scroll = 0;
    app.pending_highlight = None;
    Effect::Reload
}

fn ascend(app: &mut App) -> Effect {
    let (parent, leaf) = match app.split_parent() {
        Some(p) => p,
        None => return Effect::None, // already at the root
    };
    let parent = parent.to_path_buf();
    app.pending_highlight = Some(leaf);
    app.path = parent;
    app.scroll = 0;
    Effect::Reload
}
