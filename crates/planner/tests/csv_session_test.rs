use pretty_assertions::assert_eq;
use rehearsal_core::{Day, TimeInterval};
use rehearsal_planner::{Planner, ResolveOptions};
use rehearsal_store::{CsvStore, schema};

fn slot(start: u8, end: u8) -> TimeInterval {
    TimeInterval::new(start, end).expect("valid interval")
}

#[test_log::test]
fn test_edits_survive_a_reload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    schema::initialize_data_dir(dir.path()).expect("initialize");

    let mut planner =
        Planner::load(CsvStore::new(dir.path()), ResolveOptions::default()).expect("load");
    planner
        .add_musician("Alice", &["Chant".to_string()])
        .expect("add Alice");
    planner
        .add_musician("Bob", &["Guitare".to_string()])
        .expect("add Bob");
    planner
        .set_availability("Alice", Day::Monday, "17h-20h")
        .expect("Alice on Monday");
    let kept = planner
        .set_availability("Bob", Day::Monday, "18h-19h, 19h30-21h")
        .expect("Bob on Monday");
    planner
        .add_piece(
            "Highway to Hell",
            &[
                ("Chant".to_string(), "Alice".to_string()),
                ("Guitare".to_string(), "Bob".to_string()),
            ],
        )
        .expect("add piece");
    assert_eq!(kept, vec![slot(18, 19)]);

    let reloaded =
        Planner::load(CsvStore::new(dir.path()), ResolveOptions::default()).expect("reload");
    let piece = reloaded.resolve_piece("Highway to Hell").expect("piece exists");

    assert_eq!(reloaded.musicians().len(), 2);
    assert_eq!(piece.windows.get(Day::Monday), &[slot(18, 19)]);
    assert_eq!(piece.windows.windows().count(), 1);
}

#[test]
fn test_missing_data_dir_starts_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let planner = Planner::load(
        CsvStore::new(dir.path().join("absent")),
        ResolveOptions::default(),
    )
    .expect("load");

    assert!(planner.musicians().is_empty());
    assert!(planner.index().is_empty());
    assert!(planner.resolve_all().is_empty());
}
