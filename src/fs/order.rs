//! # Entry Ordering
//!
//! The sort used by every pane: directories first, then a natural
//! case-insensitive name comparison where runs of ASCII digits compare by
//! numeric value ("file2" < "file10") instead of lexically.

use std::cmp::Ordering;

use crate::fs::snapshot::EntryInfo;

/// Compare two names naturally and case-insensitively.
///
/// Digit runs are compared as whole numbers (leading zeros carry no weight),
/// everything else byte-by-byte after ASCII lowercasing. When one string is
/// a prefix of the other, the shorter one sorts first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut a_chars, &mut b_chars);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = ca.to_ascii_lowercase().cmp(&cb.to_ascii_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    a_chars.next();
                    b_chars.next();
                }
            }
        }
    }
}

/// Consume one digit run from each iterator and compare them numerically.
///
/// Runs are compared by stripped length first, then digit-by-digit, so
/// arbitrarily long runs never overflow an integer type.
fn compare_digit_runs(
    a: &mut std::iter::Peekable<std::str::Chars>,
    b: &mut std::iter::Peekable<std::str::Chars>,
) -> Ordering {
    let run_a = take_digit_run(a);
    let run_b = take_digit_run(b);

    let trimmed_a = run_a.trim_start_matches('0');
    let trimmed_b = run_b.trim_start_matches('0');

    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Pane ordering: directories before everything else, then natural name order.
///
/// "Directory" here is whatever the snapshot recorded, so a symlink pointing
/// at a directory still sorts with the files in the listing pane.
pub fn entry_cmp(a: &EntryInfo, b: &EntryInfo) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => natural_cmp(&a.name, &b.name),
    }
}
