//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 500ms waiting
//! for input and only redraws after an event changed something (or the
//! terminal resized). A frame is drawn with `Terminal::draw`, which flushes
//! the whole screen as one buffered write, so a redraw never flickers.
//!
//! ## Suspension
//!
//! Three commands hand the terminal to a child process: `!` (interactive
//! shell), Enter-then-`:command` (ad-hoc shell command) and opening a
//! non-directory entry (system opener). Each restores the terminal with
//! `ratatui::restore` before spawning and re-enters with `ratatui::init`
//! afterwards, so the child sees a normal cooked-mode terminal.

mod component;
mod components;
mod event;
mod text;
mod ui;

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use log::{debug, info, warn};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CommandEvent, CommandLine};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui::{Identity, PaneData};

/// TUI-specific presentation state (not part of core navigation logic).
pub struct TuiState {
    pub command_line: CommandLine,
    pub identity: Identity,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            command_line: CommandLine::new(),
            identity: Identity::detect(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the browser until the user quits. Owns the terminal for the whole
/// session; the raw-mode/alternate-screen state is restored on every exit
/// path, including errors out of the event loop.
pub fn run(start: std::path::PathBuf, config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(start, config.show_hidden, config.entry_cap);
    // A start directory we cannot read is fatal; everything later degrades
    // by climbing to the parent instead.
    app.reload()?;

    info!("starting at {}", app.path.display());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &config);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            tui.command_line.status = app.status_message.clone();
            let pane_rows = terminal.size()?.height.saturating_sub(2) as usize;
            let panes = PaneData::gather(app, config, pane_rows);
            terminal.draw(|f| ui::draw_ui(f, app, &panes, &tui.identity, &mut tui.command_line))?;
            needs_redraw = false;
        }

        let tui_event = match poll_event_timeout(Duration::from_millis(500))? {
            Some(e) => e,
            None => continue,
        };
        needs_redraw = true;

        // The open prompt captures every key until it submits or cancels.
        if tui.command_line.is_active() {
            match tui.command_line.handle_event(&tui_event) {
                Some(CommandEvent::Submit(cmd)) => {
                    run_shell_command(terminal, app, &cmd);
                }
                Some(CommandEvent::Cancel) | None => {}
            }
            continue;
        }

        let action = match tui_event {
            TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
            TuiEvent::CursorUp => Action::MoveCursor(-1),
            TuiEvent::CursorDown => Action::MoveCursor(1),
            TuiEvent::Open => Action::OpenEntry,
            TuiEvent::Ascend => Action::Ascend,
            TuiEvent::ToggleHidden => Action::ToggleHidden,
            TuiEvent::GoHome => match dirs::home_dir() {
                Some(home) => Action::GoHome(home),
                None => {
                    warn!("no home directory to jump to");
                    continue;
                }
            },
            TuiEvent::Shell => {
                run_interactive_shell(terminal, app);
                continue;
            }
            TuiEvent::CommandPrompt => {
                tui.command_line.open();
                continue;
            }
            TuiEvent::Resize => continue, // redraw already queued
            TuiEvent::Escape | TuiEvent::InputChar(_) | TuiEvent::Backspace => {
                needs_redraw = false;
                continue;
            }
        };

        match update(app, action) {
            Effect::Quit => {
                info!("quit");
                return Ok(());
            }
            Effect::Reload => app.reload()?,
            Effect::OpenFile(path) => open_with_system(terminal, app, &path),
            Effect::Redraw => {}
            Effect::None => needs_redraw = false,
        }
    }
}

/// Restore the terminal, run `child`, then re-enter the TUI. The closure's
/// error (if any) is reported on the status line rather than tearing the
/// browser down.
fn suspend_for<F>(terminal: &mut DefaultTerminal, app: &mut App, child: F)
where
    F: FnOnce() -> io::Result<()>,
{
    ratatui::restore();
    let outcome = child();
    *terminal = ratatui::init();
    terminal.clear().ok();
    if let Err(err) = outcome {
        warn!("child process failed: {err}");
        app.status_message = format!("command failed: {err}");
    }
}

fn run_interactive_shell(terminal: &mut DefaultTerminal, app: &mut App) {
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    debug!("suspending into {shell}");
    let cwd = app.path.clone();
    suspend_for(terminal, app, || {
        Command::new(&shell).current_dir(&cwd).status()?;
        Ok(())
    });
}

fn run_shell_command(terminal: &mut DefaultTerminal, app: &mut App, cmd: &str) {
    debug!("running command: {cmd}");
    let cwd = app.path.clone();
    let cmd = cmd.to_string();
    suspend_for(terminal, app, || {
        Command::new("sh")
            .arg("-c")
            .arg(&cmd)
            .current_dir(&cwd)
            .status()?;
        // Hold the output on screen until a keypress.
        let mut out = io::stdout();
        write!(out, "\nPress any key to continue...")?;
        out.flush()?;
        crossterm::terminal::enable_raw_mode()?;
        let wait = wait_for_keypress();
        crossterm::terminal::disable_raw_mode()?;
        wait
    });
}

fn wait_for_keypress() -> io::Result<()> {
    use crossterm::event::{Event, KeyEventKind, read};
    loop {
        if let Event::Key(key) = read()?
            && key.kind != KeyEventKind::Release
        {
            return Ok(());
        }
    }
}

/// Hand a file to the desktop opener (`xdg-open`, or `open` on macOS).
fn open_with_system(terminal: &mut DefaultTerminal, app: &mut App, path: &Path) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    debug!("opening {} with {opener}", path.display());
    let path = path.to_path_buf();
    suspend_for(terminal, app, move || {
        Command::new(opener).arg(&path).status()?;
        Ok(())
    });
}
