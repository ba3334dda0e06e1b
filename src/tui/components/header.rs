//! # Header Component
//!
//! Top-row breadcrumb styled like a shell prompt: `user@host:path`.
//!
//! The path shown is not the current directory but where `Open` would land:
//! the leaf segment is the entry under the cursor whenever the listing is
//! non-empty. The home directory collapses to `~`, including as a prefix of
//! the directory component.

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Header {
    pub user: String,
    pub host: String,
    pub home: Option<PathBuf>,
    /// Path previewed by the breadcrumb (cursor entry, or the directory
    /// itself when empty).
    pub target: PathBuf,
}

fn bold(c: Color) -> Style {
    Style::default().fg(c).add_modifier(Modifier::BOLD)
}

impl Header {
    /// Directory component and leaf of the breadcrumb, with `~` applied.
    /// The directory part is None when the target sits at the root or is
    /// home itself.
    fn split_display(&self) -> (Option<String>, String) {
        if let Some(home) = &self.home {
            if &self.target == home {
                return (None, "~".to_string());
            }
        }
        let leaf = match self.target.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => return (None, "/".to_string()),
        };

        let base = match self.target.parent() {
            Some(p) if p.as_os_str().is_empty() => return (None, leaf),
            Some(p) => p,
            None => return (None, leaf),
        };

        let base_str = match &self.home {
            Some(home) if base == home => "~".to_string(),
            Some(home) => match base.strip_prefix(home) {
                Ok(rest) => format!("~/{}", rest.display()),
                Err(_) => base.display().to_string(),
            },
            None => base.display().to_string(),
        };
        (Some(base_str), leaf)
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (base, leaf) = self.split_display();

        let mut spans = vec![
            Span::styled(format!("{}@{}", self.user, self.host), bold(Color::Green)),
            Span::styled(":", bold(Color::White)),
        ];
        if let Some(base) = base {
            let sep = if base == "/" { "" } else { "/" };
            spans.push(Span::styled(format!("{base}{sep}"), bold(Color::Blue)));
        }
        spans.push(Span::styled(leaf, bold(Color::White)));

        frame.render_widget(Line::from(spans), area);
    }
}
