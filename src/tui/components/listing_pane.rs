//! # Listing Pane
//!
//! Middle column: the directory being browsed. Owns the scroll-follows-
//! cursor invariant: whatever happened since the last frame, after `render`
//! the cursor row is inside the visible window.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::fs::snapshot::DirSnapshot;
use crate::tui::component::Component;
use crate::tui::components::entry_line;

pub struct ListingPane<'a> {
    pub snapshot: &'a DirSnapshot,
    pub cursor: usize,
    /// Shared with the navigation state so the offset survives frames.
    pub scroll: &'a mut usize,
}

/// Clamp `scroll` so `cursor` lies within `[scroll, scroll + height)`.
pub fn clamp_scroll(scroll: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return scroll;
    }
    if cursor < scroll {
        cursor
    } else if cursor >= scroll + height {
        cursor - height + 1
    } else {
        scroll
    }
}

impl Component for ListingPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.snapshot.is_empty() {
            let placeholder = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
            frame.render_widget(Line::raw("-- empty --"), placeholder);
            return;
        }

        let height = area.height as usize;
        *self.scroll = clamp_scroll(*self.scroll, self.cursor, height);

        for (row, entry) in self
            .snapshot
            .entries
            .iter()
            .skip(*self.scroll)
            .take(height)
            .enumerate()
        {
            let idx = row + *self.scroll;
            let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            frame.render_widget(entry_line(entry, area.width, idx == self.cursor), line_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::snapshot::{EntryInfo, EntryKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    fn snapshot(count: usize) -> DirSnapshot {
        DirSnapshot {
            path: "/here".into(),
            entries: (0..count)
                .map(|i| EntryInfo {
                    name: format!("file{i:02}"),
                    kind: EntryKind::Regular,
                    owner_exec: false,
                })
                .collect(),
            truncated: false,
        }
    }

    #[test]
    fn test_clamp_scroll_window() {
        // Cursor above the window pulls it up.
        assert_eq!(clamp_scroll(5, 2, 4), 2);
        // Cursor below the window pushes it down.
        assert_eq!(clamp_scroll(0, 7, 4), 4);
        // Cursor inside leaves it alone.
        assert_eq!(clamp_scroll(3, 5, 4), 3);
        // Degenerate pane.
        assert_eq!(clamp_scroll(3, 9, 0), 3);
    }

    #[test]
    fn test_cursor_always_within_window_after_any_walk() {
        let mut scroll = 0usize;
        let height = 5usize;
        let moves = [3i64, 9, -1, -20, 14, 1, 1, 1, -7];
        let mut cursor = 0i64;
        for m in moves {
            cursor = (cursor + m).clamp(0, 19);
            scroll = clamp_scroll(scroll, cursor as usize, height);
            assert!((cursor as usize) >= scroll);
            assert!((cursor as usize) < scroll + height);
        }
    }

    #[test]
    fn test_render_marks_cursor_row_reversed() {
        let snap = snapshot(3);
        let mut scroll = 0;
        let mut pane = ListingPane {
            snapshot: &snap,
            cursor: 1,
            scroll: &mut scroll,
        };
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer[(1, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let snap = snapshot(20);
        let mut scroll = 0;
        let mut pane = ListingPane {
            snapshot: &snap,
            cursor: 12,
            scroll: &mut scroll,
        };
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();
        assert_eq!(scroll, 8);

        let buffer = terminal.backend().buffer();
        let top: String = (0..20).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.contains("file08"));
    }

    #[test]
    fn test_empty_listing_placeholder() {
        let snap = snapshot(0);
        let mut scroll = 0;
        let mut pane = ListingPane {
            snapshot: &snap,
            cursor: 0,
            scroll: &mut scroll,
        };
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let top: String = (0..20).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.contains("-- empty --"));
    }
}
