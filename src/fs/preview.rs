//! # Preview Building
//!
//! Builds the content of the right-hand pane for the entry under the cursor:
//! a sorted listing for directories, sniffed text for regular files, and
//! placeholders for everything that can't be shown.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::state::App;
use crate::fs::snapshot::{self, DirSnapshot, StatMode};

/// How many leading bytes the text/binary sniff inspects.
pub const DEFAULT_SNIFF_BYTES: usize = 512;

/// Upper bound on bytes read for a text preview. The pane only ever shows a
/// screenful, so reading more is wasted work on huge files.
const PREVIEW_READ_BYTES: u64 = 64 * 1024;

/// What the preview pane should show.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// First entries of a directory, link-following stat, same sort as the
    /// listing panes.
    Directory(DirSnapshot),
    /// Leading lines of a text file.
    Text(Vec<String>),
    /// A file whose leading bytes are not plain text.
    Binary,
    /// Unreadable target, or a kind with nothing to show (fifo, socket...).
    Blank,
}

/// True when every byte looks like ASCII text.
///
/// Mirrors the C-locale `isprint || isspace` test: 0x20..=0x7E plus the six
/// ASCII whitespace bytes. Anything else (including UTF-8 continuation
/// bytes) flags the file binary.
pub fn is_text(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| {
        (0x20..=0x7e).contains(&b) || matches!(b, b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
    })
}

/// Build the preview for the entry under the cursor, if any.
///
/// Every failure path degrades to `Preview::Blank`: previews are best-effort
/// and never surface errors.
pub fn build_preview(app: &App, max_lines: usize, cap: usize, sniff_bytes: usize) -> Option<Preview> {
    let entry = app.snapshot.entry(app.cursor)?;
    let target = app.path.join(&entry.name);

    // Follow links here: the preview describes what the entry points at.
    let meta = match std::fs::metadata(&target) {
        Ok(m) => m,
        Err(_) => return Some(Preview::Blank),
    };

    if meta.is_dir() {
        let snap = match snapshot::read_snapshot(&target, app.show_hidden, cap, StatMode::FollowLinks)
        {
            Ok(s) => s,
            Err(_) => return Some(Preview::Blank),
        };
        return Some(Preview::Directory(snap));
    }

    if meta.is_file() {
        return Some(preview_file(&target, max_lines, sniff_bytes));
    }

    Some(Preview::Blank)
}

fn preview_file(path: &Path, max_lines: usize, sniff_bytes: usize) -> Preview {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Preview::Blank,
    };

    let mut buf = Vec::with_capacity(8192);
    if file.take(PREVIEW_READ_BYTES).read_to_end(&mut buf).is_err() {
        return Preview::Blank;
    }

    // Only the leading window decides text vs binary.
    let head = &buf[..buf.len().min(sniff_bytes)];
    if !is_text(head) {
        return Preview::Binary;
    }

    let text = String::from_utf8_lossy(&buf);
    let lines = text
        .lines()
        .take(max_lines)
        .map(str::to_string)
        .collect();
    Preview::Text(lines)
}
