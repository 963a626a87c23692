use pretty_assertions::assert_eq;
use rehearsal_core::errors::RehearsalError;
use rehearsal_core::models::musician::{Musician, MusicianId, is_listed_instrument};
use rehearsal_core::models::piece::{PieceRequirement, PieceRow, PieceTable, musicians_for_piece};

fn ids(names: &[&str]) -> Vec<MusicianId> {
    names.iter().map(|name| MusicianId::from(*name)).collect()
}

fn sample_pieces() -> PieceTable {
    let mut table = PieceTable::new(vec![
        "Chant".to_string(),
        "Guitare".to_string(),
        "Basse".to_string(),
        "Batterie".to_string(),
    ]);
    table.rows.push(PieceRow::new(
        "Highway to Hell",
        vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "".to_string(),
            "Carol".to_string(),
        ],
    ));
    table.rows.push(PieceRow::new(
        "Come Together",
        vec![
            "Bob".to_string(),
            "Bob".to_string(),
            " ".to_string(),
            "Dan".to_string(),
        ],
    ));
    table
}

#[test]
fn test_musicians_for_piece_in_column_order() {
    let musicians = musicians_for_piece(&sample_pieces(), "Highway to Hell")
        .expect("piece exists");

    assert_eq!(musicians, ids(&["Alice", "Bob", "Carol"]));
}

#[test]
fn test_musicians_for_piece_trims_title() {
    let musicians = musicians_for_piece(&sample_pieces(), "  Come Together ")
        .expect("piece exists");

    assert_eq!(musicians, ids(&["Bob", "Bob", "Dan"]));
}

#[test]
fn test_unknown_piece_is_reported() {
    let result = musicians_for_piece(&sample_pieces(), "Nonexistent Song");

    match result {
        Err(RehearsalError::UnknownPiece(title)) => assert_eq!(title, "Nonexistent Song"),
        other => panic!("expected UnknownPiece, got {other:?}"),
    }
}

#[test]
fn test_requirement_lists_each_musician_once() {
    let table = sample_pieces();

    let requirements = table.requirements();

    assert_eq!(
        requirements[1],
        PieceRequirement {
            title: "Come Together".to_string(),
            musicians: ids(&["Bob", "Dan"]),
        }
    );
}

#[test]
fn test_piece_without_musicians_has_empty_requirement() {
    let row = PieceRow::new("Instrumental", vec![String::new(), "  ".to_string()]);

    assert!(PieceRequirement::from_row(&row).is_empty());
}

#[test]
fn test_insert_adds_missing_role_columns() {
    let mut table = sample_pieces();

    table.insert(
        "Le Vent Nous Portera",
        &[
            ("Chant".to_string(), MusicianId::from("Eve")),
            ("Violon".to_string(), MusicianId::from("Fanny")),
        ],
    );

    assert_eq!(table.role_columns.last().map(String::as_str), Some("Violon"));
    assert_eq!(table.rows[0].cells.len(), 5);
    assert_eq!(
        musicians_for_piece(&table, "Le Vent Nous Portera").expect("piece exists"),
        ids(&["Eve", "Fanny"])
    );
}

#[test]
fn test_default_piece_table_has_standard_roles() {
    let table = PieceTable::default();

    assert_eq!(table.role_columns[0], "Chant");
    assert!(table.rows.is_empty());
}

#[test]
fn test_musician_drops_blank_and_repeated_instruments() {
    let musician = Musician::new("Alice", &["Chant", " ", "Guitare", "Chant"]);

    assert_eq!(musician.instruments, vec!["Chant", "Guitare"]);
    assert!(musician.plays("guitare"));
    assert!(!musician.plays("Basse"));
}

#[test]
fn test_unlisted_instruments() {
    let musician = Musician::new("Eve", &["synthé", "Theremin", "Flûte", "Kazoo"]);

    assert_eq!(musician.unlisted_instruments(), vec!["Theremin", "Kazoo"]);
    assert!(is_listed_instrument(" guitare "));
    assert!(!is_listed_instrument("Ukulélé"));
}
