//! # Navigation State
//!
//! Core browsing state for tripane. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── path: PathBuf                // directory being browsed
//! ├── cursor: usize                // selected entry index
//! ├── scroll: usize                // first visible entry index
//! ├── show_hidden: bool            // dotfiles visible?
//! ├── pending_highlight: Option    // child to re-select after ascend
//! ├── snapshot: DirSnapshot        // current directory listing
//! └── status_message: String       // bottom-row text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! and the snapshot is rebuilt through `reload()` whenever a transition
//! changes the effective path. Invariant: `cursor < max(1, len)` always;
//! the render layer keeps the cursor inside the visible window.

use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::fs::snapshot::{self, DirSnapshot, StatMode};

pub struct App {
    pub path: PathBuf,
    pub cursor: usize,
    pub scroll: usize,
    pub show_hidden: bool,
    /// Child name to restore the cursor to after the next reload.
    /// Set by Ascend so re-entering the parent lands on where we came from.
    pub pending_highlight: Option<String>,
    pub snapshot: DirSnapshot,
    pub status_message: String,
    /// Snapshot entry cap, from config.
    pub entry_cap: usize,
}

impl App {
    pub fn new(path: PathBuf, show_hidden: bool, entry_cap: usize) -> Self {
        Self {
            path,
            cursor: 0,
            scroll: 0,
            show_hidden,
            pending_highlight: None,
            snapshot: DirSnapshot::default(),
            status_message: String::new(),
            entry_cap,
        }
    }

    /// Entry currently under the cursor, if the listing is non-empty.
    pub fn cursor_entry(&self) -> Option<&snapshot::EntryInfo> {
        self.snapshot.entry(self.cursor)
    }

    /// Absolute path of the entry under the cursor.
    pub fn cursor_path(&self) -> Option<PathBuf> {
        self.cursor_entry().map(|e| self.path.join(&e.name))
    }

    /// Rebuild the snapshot for the current path.
    ///
    /// If the directory is unreadable (permissions, raced delete), climbs to
    /// the nearest readable ancestor instead of failing: the browsed
    /// directory may vanish mid-session and that shouldn't kill the browser.
    /// Only an unreadable filesystem root is a hard error.
    ///
    /// Afterwards the cursor is restored from `pending_highlight` when that
    /// child still exists, otherwise clamped into range.
    pub fn reload(&mut self) -> io::Result<()> {
        loop {
            match snapshot::read_snapshot(
                &self.path,
                self.show_hidden,
                self.entry_cap,
                StatMode::LinkAware,
            ) {
                Ok(snap) => {
                    self.snapshot = snap;
                    break;
                }
                Err(e) => {
                    let parent = match self.path.parent() {
                        Some(p) => p.to_path_buf(),
                        None => return Err(e), // root itself unreadable
                    };
                    warn!(
                        "directory {} unreadable ({}), ascending to {}",
                        self.path.display(),
                        e,
                        parent.display()
                    );
                    self.path = parent;
                    self.cursor = 0;
                    self.scroll = 0;
                    self.pending_highlight = None;
                }
            }
        }

        match self.pending_highlight.take() {
            Some(name) => {
                self.cursor = self.snapshot.position_of(&name).unwrap_or(0);
            }
            None => {
                if self.cursor >= self.snapshot.len() {
                    self.cursor = self.snapshot.len().saturating_sub(1);
                }
            }
        }

        self.status_message = if self.snapshot.truncated {
            format!("listing truncated at {} entries", self.entry_cap)
        } else {
            String::new()
        };

        debug!(
            "reloaded {} ({} entries, cursor {})",
            self.path.display(),
            self.snapshot.len(),
            self.cursor
        );
        Ok(())
    }

    /// Parent directory and the name of the current directory within it.
    /// None at the filesystem root.
    pub fn split_parent(&self) -> Option<(&Path, String)> {
        let parent = self.path.parent()?;
        let leaf = self.path.file_name()?.to_string_lossy().into_owned();
        Some((parent, leaf))
    }
}
