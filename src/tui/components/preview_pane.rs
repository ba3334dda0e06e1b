//! # Preview Pane
//!
//! Right column: what's inside the entry under the cursor. Directories get
//! their leading entries (first row highlighted, where a Descend would put
//! the cursor), text files their leading lines, binaries a placeholder.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::fs::preview::Preview;
use crate::tui::component::Component;
use crate::tui::components::entry_line;
use crate::tui::text::fit_to_width;

pub struct PreviewPane<'a> {
    /// None when the listing is empty (no cursor entry to preview).
    pub preview: Option<&'a Preview>,
}

impl Component for PreviewPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let preview = match self.preview {
            Some(p) => p,
            None => return,
        };
        match preview {
            Preview::Directory(snap) => {
                if snap.is_empty() {
                    render_note(frame, area, "-- empty --");
                    return;
                }
                let height = area.height as usize;
                for (row, entry) in snap.entries.iter().take(height).enumerate() {
                    let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
                    frame.render_widget(entry_line(entry, area.width, row == 0), line_area);
                }
            }
            Preview::Text(lines) => {
                let height = area.height as usize;
                let width = area.width.saturating_sub(2) as usize;
                for (row, line) in lines.iter().take(height).enumerate() {
                    let line_area = Rect::new(
                        area.x + 2,
                        area.y + row as u16,
                        area.width.saturating_sub(2),
                        1,
                    );
                    frame.render_widget(Line::raw(fit_to_width(line, width)), line_area);
                }
            }
            Preview::Binary => render_note(frame, area, "-- Binary File --"),
            Preview::Blank => {}
        }
    }
}

fn render_note(frame: &mut Frame, area: Rect, note: &str) {
    let note_area = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    frame.render_widget(Line::raw(note.to_string()), note_area);
}
