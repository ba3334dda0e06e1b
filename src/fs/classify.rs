//! # File Classification
//!
//! Pure lookup tables mapping (name, kind, exec bit) to a display category
//! and an icon glyph. No I/O, fully deterministic, case-insensitive.
//!
//! Evaluation order matters and is part of the contract: kind checks first
//! (symlink before directory, so a link to a directory still reads as a
//! link), then the executable bit, then extension tables in priority order
//! archive → image → audio → document.

use ratatui::style::{Color, Modifier, Style};

use crate::fs::snapshot::EntryKind;

/// Display category of an entry, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Plain,
    Directory,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    Executable,
    Archive,
    Image,
    Audio,
    Document,
}

const ARCHIVE_EXTS: &[&str] = &[
    "tar", "tgz", "arc", "arj", "taz", "lha", "lz4", "lzh", "lzma", "tlz", "txz", "tzo", "t7z",
    "zip", "z", "dz", "gz", "lrz", "lz", "lzo", "xz", "zst", "tzst", "bz2", "bz", "tbz", "tbz2",
    "tz", "deb", "rpm", "jar", "war", "ear", "sar", "rar", "alz", "ace", "zoo", "cpio", "7z",
    "rz", "cab", "wim", "swm", "dwm", "esd",
];

const IMAGE_EXTS: &[&str] = &[
    "jpg", "jpeg", "mjpg", "mjpeg", "gif", "bmp", "pbm", "pgm", "ppm", "tga", "xbm", "xpm",
    "tif", "tiff", "png", "svg", "svgz", "mng", "pcx", "mov", "mpg", "mpeg", "m2v", "mkv",
    "webm", "ogm", "mp4", "m4v", "mp4v", "vob", "qt", "nuv", "wmv", "asf", "rm", "rmvb", "flc",
    "avi", "fli", "flv", "gl", "dl", "xcf", "xwd", "yuv", "cgm", "emf", "ogv", "ogx",
];

const AUDIO_EXTS: &[&str] = &[
    "aac", "au", "flac", "m4a", "mid", "midi", "mka", "mp3", "mpc", "ogg", "ra", "wav", "oga",
    "opus", "spx", "xspf",
];

const DOC_EXTS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "md", "txt",
];

/// Lowercased extension of `name`, if any.
fn extension(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    Some(name[dot + 1..].to_ascii_lowercase())
}

/// Classify an entry. First match wins.
pub fn classify(name: &str, kind: EntryKind, owner_exec: bool) -> FileClass {
    match kind {
        EntryKind::Symlink => return FileClass::Symlink,
        EntryKind::Directory => return FileClass::Directory,
        EntryKind::Fifo => return FileClass::Fifo,
        EntryKind::Socket => return FileClass::Socket,
        EntryKind::BlockDevice => return FileClass::BlockDevice,
        EntryKind::CharDevice => return FileClass::CharDevice,
        EntryKind::Regular => {}
    }
    if owner_exec {
        return FileClass::Executable;
    }

    if let Some(ext) = extension(name) {
        let ext = ext.as_str();
        if ARCHIVE_EXTS.contains(&ext) {
            return FileClass::Archive;
        }
        if IMAGE_EXTS.contains(&ext) {
            return FileClass::Image;
        }
        if AUDIO_EXTS.contains(&ext) {
            return FileClass::Audio;
        }
        if DOC_EXTS.contains(&ext) {
            return FileClass::Document;
        }
    }
    FileClass::Plain
}

/// Color for a class, matching the classic dircolors palette.
pub fn style_for(class: FileClass) -> Style {
    let bold = |c| Style::default().fg(c).add_modifier(Modifier::BOLD);
    match class {
        FileClass::Plain => Style::default(),
        FileClass::Directory | FileClass::Document => bold(Color::Blue),
        FileClass::Symlink => bold(Color::Cyan),
        FileClass::Fifo => Style::default().fg(Color::Yellow),
        FileClass::Socket | FileClass::Image => bold(Color::Magenta),
        FileClass::BlockDevice | FileClass::CharDevice => bold(Color::Yellow),
        FileClass::Executable => bold(Color::Green),
        FileClass::Archive => bold(Color::Red),
        FileClass::Audio => Style::default().fg(Color::Cyan),
    }
}

// Nerd Font glyphs, one per icon group.
const ICON_DIR: &str = "\u{f413}";
const ICON_LINK: &str = "\u{f481}";
const ICON_EXEC: &str = "\u{f427}";
const ICON_BUILD: &str = "\u{e615}";
const ICON_LICENSE: &str = "\u{e60a}";
const ICON_DOCKER: &str = "\u{e7b0}";
const ICON_GIT: &str = "\u{e615}";
const ICON_ARCHIVE: &str = "\u{f410}";
const ICON_MEDIA: &str = "\u{f40f}";
const ICON_PDF: &str = "\u{f411}";
const ICON_MARKDOWN: &str = "\u{e609}";
const ICON_HTML: &str = "\u{e60e}";
const ICON_CSS: &str = "\u{e614}";
const ICON_JS: &str = "\u{e60c}";
const ICON_PYTHON: &str = "\u{e606}";
const ICON_C: &str = "\u{e61e}";
const ICON_CPP: &str = "\u{e61d}";
const ICON_HEADER: &str = "\u{f0fd}";
const ICON_SHELL: &str = "\u{e795}";
const ICON_JSON: &str = "\u{e60b}";
const ICON_YAML: &str = "\u{e615}";
const ICON_GENERIC: &str = "\u{f40e}";

/// Pick the icon glyph for an entry.
///
/// Exact basenames (build files, licenses, docker files) win over extension
/// groups, which win over the generic glyph.
pub fn icon(name: &str, kind: EntryKind, owner_exec: bool) -> &'static str {
    match kind {
        EntryKind::Directory => return ICON_DIR,
        EntryKind::Symlink => return ICON_LINK,
        _ => {}
    }
    if owner_exec {
        return ICON_EXEC;
    }

    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "makefile" | "cmakelists.txt" => return ICON_BUILD,
        "license" | "licence" => return ICON_LICENSE,
        "dockerfile" => return ICON_DOCKER,
        _ => {}
    }
    if lower.contains("docker-compose.y") && lower.ends_with("ml") {
        return ICON_DOCKER;
    }
    if lower.contains(".git") {
        return ICON_GIT;
    }

    let ext = match extension(&lower) {
        Some(e) => e,
        None => return ICON_GENERIC,
    };
    match ext.as_str() {
        "tar" | "zip" | "rar" | "7z" | "gz" | "bz2" => ICON_ARCHIVE,
        "jpg" | "jpeg" | "png" | "gif" | "svg" => ICON_MEDIA,
        "mkv" | "mp4" | "mov" | "avi" => ICON_MEDIA,
        "mp3" | "flac" | "wav" => ICON_MEDIA,
        "pdf" => ICON_PDF,
        "md" | "markdown" => ICON_MARKDOWN,
        "html" | "htm" => ICON_HTML,
        "css" => ICON_CSS,
        "js" => ICON_JS,
        "py" => ICON_PYTHON,
        "c" => ICON_C,
        "cpp" | "cxx" | "cc" => ICON_CPP,
        "h" | "hpp" => ICON_HEADER,
        "sh" | "bash" | "zsh" => ICON_SHELL,
        "json" => ICON_JSON,
        "yml" | "yaml" => ICON_YAML,
        _ => ICON_GENERIC,
    }
}
