//! # Frame Composition
//!
//! Lays out the three panes and draws one complete frame. Ratatui's
//! `Terminal::draw` diffs against an internal buffer and flushes the frame
//! as a single write, which is what keeps redraws flicker-free; nothing
//! here touches the terminal directly.
//!
//! Layout: row 1 is the breadcrumb header, the last row is the status/
//! command line, and the rows between are split into parent (~17.2% of
//! columns), current (~32.8%) and preview (remainder) panes.

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::fs::preview::{self, Preview};
use crate::fs::snapshot::{self, DirSnapshot, StatMode};
use crate::tui::component::Component;
use crate::tui::components::{CommandLine, Header, ListingPane, ParentPane, PreviewPane};

/// Who and where, for the breadcrumb. Detected once at startup.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: String,
    pub host: String,
    pub home: Option<PathBuf>,
}

impl Identity {
    pub fn detect() -> Self {
        let host = sysinfo::System::host_name()
            .map(|h| h.split('.').next().unwrap_or(&h).to_string())
            .unwrap_or_else(|| "localhost".to_string());
        Self {
            user: std::env::var("USER").unwrap_or_else(|_| "user".to_string()),
            host,
            home: dirs::home_dir(),
        }
    }
}

/// Per-frame data that needs filesystem reads: the parent listing and the
/// preview of the cursor entry. Rebuilt before each redraw so the panes
/// never show stale content.
pub struct PaneData {
    pub parent: Option<DirSnapshot>,
    /// Index of the current directory inside `parent`.
    pub parent_highlight: Option<usize>,
    pub preview: Option<Preview>,
}

impl PaneData {
    /// Gather the side-pane content for the current navigation state.
    /// `pane_rows` bounds how many preview lines are worth building.
    pub fn gather(app: &App, config: &ResolvedConfig, pane_rows: usize) -> Self {
        let (parent, parent_highlight) = match app.split_parent() {
            Some((parent_path, leaf)) => {
                match snapshot::read_snapshot(
                    parent_path,
                    app.show_hidden,
                    config.entry_cap,
                    StatMode::LinkAware,
                ) {
                    Ok(snap) => {
                        let highlight = snap.position_of(&leaf);
                        (Some(snap), highlight)
                    }
                    Err(_) => (None, None), // parent unreadable, pane stays blank
                }
            }
            None => (None, None),
        };

        let preview = preview::build_preview(app, pane_rows, config.entry_cap, config.sniff_bytes);

        Self {
            parent,
            parent_highlight,
            preview,
        }
    }
}

/// Split the terminal into header row, three body panes, and status row.
pub fn layout_panes(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
    use Constraint::{Length, Min};
    let [header_area, body, status_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

    let parent_width = (area.width as f32 * 0.172) as u16;
    let current_width = (area.width as f32 * 0.328) as u16;
    let [parent_area, current_area, preview_area] =
        Layout::horizontal([Length(parent_width), Length(current_width), Min(0)]).areas(body);

    (header_area, parent_area, current_area, preview_area, status_area)
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &mut App,
    panes: &PaneData,
    identity: &Identity,
    command_line: &mut CommandLine,
) {
    let (header_area, parent_area, current_area, preview_area, status_area) =
        layout_panes(frame.area());

    Header {
        user: identity.user.clone(),
        host: identity.host.clone(),
        home: identity.home.clone(),
        target: app.cursor_path().unwrap_or_else(|| app.path.clone()),
    }
    .render(frame, header_area);

    ParentPane {
        snapshot: panes.parent.as_ref(),
        highlight: panes.parent_highlight,
    }
    .render(frame, parent_area);

    ListingPane {
        snapshot: &app.snapshot,
        cursor: app.cursor,
        scroll: &mut app.scroll,
    }
    .render(frame, current_area);

    PreviewPane {
        preview: panes.preview.as_ref(),
    }
    .render(frame, preview_area);

    command_line.render(frame, status_area);
}
