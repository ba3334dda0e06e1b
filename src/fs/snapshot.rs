//! # Directory Snapshots
//!
//! Point-in-time listings of a directory. A snapshot owns its entries and is
//! rebuilt from scratch whenever the browsed directory changes, the hidden
//! flag flips, or the directory becomes unreadable mid-session.
//!
//! Two stat flavors exist on purpose:
//!
//! - the navigable listing uses a *link-aware* stat (`symlink_metadata`), so
//!   symlinks stay visible as symlinks;
//! - directory previews use a *link-following* stat, so the preview pane
//!   describes what a link points at.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::order::entry_cmp;

/// Default cap on entries held per snapshot. Larger directories are
/// truncated and the snapshot flags it instead of dropping entries silently.
pub const DEFAULT_ENTRY_CAP: usize = 4096;

/// File kind as recorded by the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
}

impl EntryKind {
    fn from_file_type(ft: fs::FileType) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_fifo() {
                return EntryKind::Fifo;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
        }
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Regular
        }
    }
}

/// One directory entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub kind: EntryKind,
    /// Owner-executable bit from the entry's mode.
    pub owner_exec: bool,
}

impl EntryInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_regular(&self) -> bool {
        self.kind == EntryKind::Regular
    }
}

/// An ordered, capped listing of one directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirSnapshot {
    pub path: PathBuf,
    pub entries: Vec<EntryInfo>,
    /// True when the directory held more entries than the cap.
    pub truncated: bool,
}

impl DirSnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&EntryInfo> {
        self.entries.get(index)
    }

    /// Index of the entry with the given name, if present.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

/// Which stat to use when recording entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatMode {
    /// `symlink_metadata`: symlinks show up as symlinks (listing panes).
    LinkAware,
    /// `metadata`: symlinks show up as their targets (preview pane).
    FollowLinks,
}

/// Read a directory into a sorted snapshot.
///
/// `.` and `..` never appear; dot-prefixed names are skipped unless
/// `show_hidden`. Entries whose stat fails (racing deletes) are dropped.
pub fn read_snapshot(
    path: &Path,
    show_hidden: bool,
    cap: usize,
    stat_mode: StatMode,
) -> io::Result<DirSnapshot> {
    let mut entries = Vec::new();
    let mut truncated = false;

    for dirent in fs::read_dir(path)? {
        let dirent = match dirent {
            Ok(d) => d,
            Err(_) => continue,
        };
        let name = match dirent.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue, // non-UTF-8 name, not representable
        };
        if name == "." || name == ".." {
            continue;
        }
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        if entries.len() >= cap {
            truncated = true;
            break;
        }

        let entry_path = dirent.path();
        let meta = match stat_mode {
            StatMode::LinkAware => fs::symlink_metadata(&entry_path),
            StatMode::FollowLinks => fs::metadata(&entry_path),
        };
        let meta = match meta {
            Ok(m) => m,
            Err(_) => continue,
        };

        entries.push(EntryInfo {
            name,
            kind: EntryKind::from_file_type(meta.file_type()),
            owner_exec: owner_exec_bit(&meta),
        });
    }

    entries.sort_by(entry_cmp);

    Ok(DirSnapshot {
        path: path.to_path_buf(),
        entries,
        truncated,
    })
}

#[cfg(unix)]
fn owner_exec_bit(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn owner_exec_bit(_meta: &fs::Metadata) -> bool {
    false
}
