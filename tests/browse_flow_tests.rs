//! End-to-end browsing flows over real directory trees: apply actions the
//! way the event loop would, run the reloads they request, and assert on
//! what the panes would show.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use tripane::core::action::{Action, Effect, update};
use tripane::core::state::App;
use tripane::fs::snapshot::DEFAULT_ENTRY_CAP;

// ============================================================================
// Helper Functions
// ============================================================================

fn file(root: &Path, name: &str) {
    fs::write(root.join(name), b"x").unwrap();
}

fn dir(root: &Path, name: &str) {
    fs::create_dir_all(root.join(name)).unwrap();
}

fn app_at(path: &Path) -> App {
    let mut app = App::new(path.to_path_buf(), false, DEFAULT_ENTRY_CAP);
    app.reload().unwrap();
    app
}

/// Apply an action and run the reload it asks for, like the event loop does.
fn step(app: &mut App, action: Action) -> Effect {
    let effect = update(app, action);
    if effect == Effect::Reload {
        app.reload().unwrap();
    }
    effect
}

fn names(app: &App) -> Vec<&str> {
    app.snapshot.entries.iter().map(|e| e.name.as_str()).collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_listing_orders_directories_first_then_naturally() {
    let tmp = TempDir::new().unwrap();
    file(tmp.path(), "b.txt");
    dir(tmp.path(), "A");
    file(tmp.path(), "10.txt");
    file(tmp.path(), "2.txt");

    let app = app_at(tmp.path());
    assert_eq!(names(&app), vec!["A", "2.txt", "10.txt", "b.txt"]);
}

// ============================================================================
// Descend / Ascend
// ============================================================================

#[test]
fn test_ascend_restores_cursor_to_departed_directory() {
    let tmp = TempDir::new().unwrap();
    dir(tmp.path(), "alpha");
    dir(tmp.path(), "beta");
    dir(tmp.path(), "gamma");

    let mut app = app_at(tmp.path());
    step(&mut app, Action::MoveCursor(1));
    assert_eq!(app.cursor_entry().unwrap().name, "beta");

    assert_eq!(step(&mut app, Action::Descend), Effect::Reload);
    assert_eq!(app.path, tmp.path().join("beta"));
    assert!(app.snapshot.is_empty());

    assert_eq!(step(&mut app, Action::Ascend), Effect::Reload);
    assert_eq!(app.path, tmp.path());
    assert_eq!(app.cursor_entry().unwrap().name, "beta");
}

#[test]
fn test_ascend_highlight_survives_hidden_siblings_appearing() {
    let tmp = TempDir::new().unwrap();
    dir(tmp.path(), ".hidden");
    dir(tmp.path(), "visible");

    let mut app = app_at(tmp.path().join("visible").as_path());
    step(&mut app, Action::ToggleHidden);
    assert!(app.show_hidden);

    step(&mut app, Action::Ascend);
    // Dotfiles shift the listing, but the cursor still lands on "visible".
    assert_eq!(app.cursor_entry().unwrap().name, "visible");
}

#[test]
fn test_open_entry_descends_into_directory_but_offers_files() {
    let tmp = TempDir::new().unwrap();
    dir(tmp.path(), "docs");
    file(tmp.path(), "notes.txt");

    let mut app = app_at(tmp.path());
    assert_eq!(step(&mut app, Action::OpenEntry), Effect::Reload);
    assert_eq!(app.path, tmp.path().join("docs"));

    step(&mut app, Action::Ascend);
    step(&mut app, Action::MoveCursor(1));
    assert_eq!(
        step(&mut app, Action::OpenEntry),
        Effect::OpenFile(tmp.path().join("notes.txt"))
    );
}

// ============================================================================
// Hidden files
// ============================================================================

#[test]
fn test_toggle_hidden_round_trip() {
    let tmp = TempDir::new().unwrap();
    file(tmp.path(), ".secret");
    file(tmp.path(), "plain");

    let mut app = app_at(tmp.path());
    assert_eq!(names(&app), vec!["plain"]);

    step(&mut app, Action::ToggleHidden);
    assert_eq!(names(&app), vec![".secret", "plain"]);
    assert_eq!(app.cursor, 0);

    step(&mut app, Action::ToggleHidden);
    assert_eq!(names(&app), vec!["plain"]);
}

// ============================================================================
// Oversized listings
// ============================================================================

#[test]
fn test_entry_cap_truncates_and_reports() {
    let tmp = TempDir::new().unwrap();
    for i in 0..6 {
        file(tmp.path(), &format!("f{i}"));
    }

    let mut app = App::new(tmp.path().to_path_buf(), false, 4);
    app.reload().unwrap();

    assert_eq!(app.snapshot.len(), 4);
    assert!(app.snapshot.truncated);
    assert!(app.status_message.contains("truncated"));

    // Cursor cannot move past the cap.
    update(&mut app, Action::MoveCursor(100));
    assert_eq!(app.cursor, 3);
}

// ============================================================================
// Vanished directories
// ============================================================================

#[test]
fn test_reload_climbs_out_of_deleted_directory() {
    let tmp = TempDir::new().unwrap();
    dir(tmp.path(), "doomed/inner");

    let mut app = app_at(tmp.path().join("doomed/inner").as_path());
    fs::remove_dir_all(tmp.path().join("doomed")).unwrap();

    app.reload().unwrap();
    assert_eq!(app.path, tmp.path());
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_stale_cursor_clamped_after_entries_vanish() {
    let tmp = TempDir::new().unwrap();
    for i in 0..5 {
        file(tmp.path(), &format!("f{i}"));
    }

    let mut app = app_at(tmp.path());
    update(&mut app, Action::MoveCursor(4));
    assert_eq!(app.cursor, 4);

    for i in 1..5 {
        fs::remove_file(tmp.path().join(format!("f{i}"))).unwrap();
    }
    app.reload().unwrap();
    assert_eq!(app.cursor, 0);
    assert_eq!(names(&app), vec!["f0"]);
}
