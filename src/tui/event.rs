use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Logical input commands decoded from raw terminal events.
///
/// Crossterm does the escape-sequence work (CSI arrows arrive as `KeyCode`
/// variants); this layer only maps keys to browser commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    CursorUp,
    CursorDown,
    /// `l`/Right: descend into a directory or open a file.
    Open,
    /// `h`/Left: go to the parent directory.
    Ascend,
    GoHome,
    ToggleHidden,
    /// `!`: suspend into an interactive shell.
    Shell,
    /// Enter: open the `:` command prompt.
    CommandPrompt,
    /// Bare escape (cancels the command prompt).
    Escape,
    InputChar(char),
    Backspace,
    Resize,
    ForceQuit,
}

/// Poll for an event with the given timeout. None on timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(decode(event::read()?))
}

fn decode(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Char('l')) | (_, KeyCode::Right) => Some(TuiEvent::Open),
                (_, KeyCode::Char('h')) | (_, KeyCode::Left) => Some(TuiEvent::Ascend),
                (_, KeyCode::Char('~')) => Some(TuiEvent::GoHome),
                (_, KeyCode::Char('.')) => Some(TuiEvent::ToggleHidden),
                (_, KeyCode::Char('!')) => Some(TuiEvent::Shell),
                (_, KeyCode::Enter) => Some(TuiEvent::CommandPrompt),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
