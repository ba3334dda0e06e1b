//! # TUI Components
//!
//! One file per pane, following the props pattern: stateless panes receive
//! everything they render as struct fields, the command line keeps its own
//! editing state and emits events. Each file co-locates its state, render
//! logic and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file + shared row rendering)
//! ├── header.rs        (user@host:path breadcrumb)
//! ├── parent_pane.rs   (siblings of the current directory)
//! ├── listing_pane.rs  (current directory, cursor + scroll)
//! ├── preview_pane.rs  (directory/text/binary preview)
//! └── command_line.rs  (bottom-row `:` prompt)
//! ```

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::fs::classify::{classify, icon, style_for};
use crate::fs::snapshot::EntryInfo;
use crate::tui::text::fit_to_width;

mod command_line;
mod header;
mod listing_pane;
mod parent_pane;
mod preview_pane;

pub use command_line::{CommandEvent, CommandLine};
pub use header::Header;
pub use listing_pane::ListingPane;
pub use parent_pane::ParentPane;
pub use preview_pane::PreviewPane;

/// Render one entry as a pane row: space, icon, space, name, padded to the
/// pane width. Selection inverts the row.
pub(crate) fn entry_line(entry: &EntryInfo, width: u16, selected: bool) -> Line<'static> {
    let glyph = icon(&entry.name, entry.kind, entry.owner_exec);
    let mut style = style_for(classify(&entry.name, entry.kind, entry.owner_exec));
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let width = width as usize;
    // Leading space + glyph + space eat three columns.
    let name = fit_to_width(&entry.name, width.saturating_sub(4));
    let mut text = format!(" {glyph} {name}");
    let pad = width.saturating_sub(text.as_str().width());
    text.extend(std::iter::repeat_n(' ', pad));

    Line::from(Span::styled(text, style))
}
