//! # Parent Pane
//!
//! Left column: the siblings of the current directory (contents of its
//! parent), with the current directory highlighted. Scrolls on its own so
//! the highlight stays visible; it has no cursor of its own.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::fs::snapshot::DirSnapshot;
use crate::tui::component::Component;
use crate::tui::components::entry_line;

pub struct ParentPane<'a> {
    /// Listing of the parent directory. None at the filesystem root.
    pub snapshot: Option<&'a DirSnapshot>,
    /// Index of the current directory within that listing.
    pub highlight: Option<usize>,
}

impl ParentPane<'_> {
    /// First visible row: 0 unless the highlight would fall below the pane.
    fn scroll_offset(&self, height: usize) -> usize {
        match self.highlight {
            Some(idx) if height > 0 && idx >= height => idx - height + 1,
            _ => 0,
        }
    }
}

impl Component for ParentPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let snapshot = match self.snapshot {
            Some(s) => s,
            None => return, // nothing above the root
        };

        let height = area.height as usize;
        let scroll = self.scroll_offset(height);

        for (row, entry) in snapshot.entries.iter().skip(scroll).take(height).enumerate() {
            let idx = row + scroll;
            let selected = self.highlight == Some(idx);
            let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            frame.render_widget(entry_line(entry, area.width, selected), line_area);
        }
    }
}
