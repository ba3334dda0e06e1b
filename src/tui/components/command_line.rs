//! # Command Line
//!
//! Bottom-row `:` prompt for ad-hoc shell commands. Opened with Enter,
//! edited in place, submitted with Enter, dismissed with Esc. While closed
//! the row doubles as the status line.
//!
//! Navigation keys were already decoded into commands before the dispatcher
//! knew the prompt was open, so this component folds them back into their
//! characters (`j`, `k`, `q`... are all typeable in a command).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level outcome of a key while the prompt is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Run this command line.
    Submit(String),
    /// Prompt dismissed without running anything.
    Cancel,
}

#[derive(Default)]
pub struct CommandLine {
    buffer: String,
    active: bool,
    /// Shown on the row while the prompt is closed.
    pub status: String,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn open(&mut self) {
        self.active = true;
        self.buffer.clear();
    }

    fn close(&mut self) {
        self.active = false;
        self.buffer.clear();
    }

    /// The character a navigation command would have typed, if any.
    fn as_char(event: &TuiEvent) -> Option<char> {
        match event {
            TuiEvent::Quit => Some('q'),
            TuiEvent::CursorUp => Some('k'),
            TuiEvent::CursorDown => Some('j'),
            TuiEvent::Open => Some('l'),
            TuiEvent::Ascend => Some('h'),
            TuiEvent::GoHome => Some('~'),
            TuiEvent::ToggleHidden => Some('.'),
            TuiEvent::Shell => Some('!'),
            TuiEvent::InputChar(c) => Some(*c),
            _ => None,
        }
    }
}

impl EventHandler for CommandLine {
    type Event = CommandEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CommandEvent> {
        debug_assert!(self.active);
        match event {
            TuiEvent::Escape | TuiEvent::ForceQuit => {
                self.close();
                Some(CommandEvent::Cancel)
            }
            TuiEvent::CommandPrompt => {
                // Enter: submit, but an empty command keeps the prompt open.
                if self.buffer.is_empty() {
                    return None;
                }
                let cmd = std::mem::take(&mut self.buffer);
                self.close();
                Some(CommandEvent::Submit(cmd))
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            other => {
                if let Some(c) = Self::as_char(other) {
                    if !c.is_control() {
                        self.buffer.push(c);
                    }
                }
                None
            }
        }
    }
}

impl Component for CommandLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = if self.active {
            Line::from(vec![Span::raw(":"), Span::raw(self.buffer.clone())])
        } else {
            Line::from(Span::styled(
                self.status.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(line: &mut CommandLine, events: &[TuiEvent]) -> Option<CommandEvent> {
        let mut last = None;
        for e in events {
            last = line.handle_event(e);
        }
        last
    }

    #[test]
    fn test_typing_and_submit() {
        let mut line = CommandLine::new();
        line.open();
        let out = typed(
            &mut line,
            &[
                TuiEvent::InputChar('g'),
                TuiEvent::InputChar('i'),
                TuiEvent::InputChar('t'),
                TuiEvent::InputChar(' '),
                TuiEvent::InputChar('s'),
                TuiEvent::CommandPrompt,
            ],
        );
        assert_eq!(out, Some(CommandEvent::Submit("git s".to_string())));
        assert!(!line.is_active());
    }

    #[test]
    fn test_navigation_keys_type_their_characters() {
        let mut line = CommandLine::new();
        line.open();
        let out = typed(
            &mut line,
            &[
                TuiEvent::CursorDown,
                TuiEvent::Open,
                TuiEvent::Quit,
                TuiEvent::CommandPrompt,
            ],
        );
        assert_eq!(out, Some(CommandEvent::Submit("jlq".to_string())));
    }

    #[test]
    fn test_backspace_edits() {
        let mut line = CommandLine::new();
        line.open();
        let out = typed(
            &mut line,
            &[
                TuiEvent::InputChar('a'),
                TuiEvent::InputChar('b'),
                TuiEvent::Backspace,
                TuiEvent::InputChar('c'),
                TuiEvent::CommandPrompt,
            ],
        );
        assert_eq!(out, Some(CommandEvent::Submit("ac".to_string())));
    }

    #[test]
    fn test_empty_submit_keeps_prompt_open() {
        let mut line = CommandLine::new();
        line.open();
        assert_eq!(line.handle_event(&TuiEvent::CommandPrompt), None);
        assert!(line.is_active());
    }

    #[test]
    fn test_escape_cancels() {
        let mut line = CommandLine::new();
        line.open();
        line.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(
            line.handle_event(&TuiEvent::Escape),
            Some(CommandEvent::Cancel)
        );
        assert!(!line.is_active());

        // Reopening starts from an empty buffer.
        line.open();
        assert_eq!(line.handle_event(&TuiEvent::CommandPrompt), None);
    }

    #[test]
    fn test_render_active_prompt() {
        let mut line = CommandLine::new();
        line.open();
        line.handle_event(&TuiEvent::InputChar('l'));
        line.handle_event(&TuiEvent::InputChar('s'));

        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| line.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with(":ls"));
    }

    #[test]
    fn test_render_status_when_closed() {
        let mut line = CommandLine::new();
        line.status = "listing truncated at 4096 entries".to_string();

        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| line.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("truncated"));
    }
}
