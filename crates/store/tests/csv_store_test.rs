use std::fs;

use pretty_assertions::assert_eq;
use rehearsal_core::{
    AvailabilityIndex, AvailabilityRow, AvailabilityTable, Day, Musician, MusicianId, PieceTable,
    TimeInterval, musicians_for_piece,
};
use rehearsal_store::schema::{self, AVAILABILITY_FILE, MUSICIANS_FILE, PIECES_FILE};
use rehearsal_store::{CsvStore, RosterStore};
use tempfile::TempDir;

fn slot(start: u8, end: u8) -> TimeInterval {
    TimeInterval::new(start, end).expect("valid interval")
}

fn store() -> (TempDir, CsvStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = CsvStore::new(dir.path());
    (dir, store)
}

#[test_log::test]
fn test_missing_files_read_as_empty_tables() {
    let (_dir, store) = store();

    assert!(store.load_musicians().expect("load musicians").is_empty());
    assert!(store.load_availability().expect("load availability").rows.is_empty());
    assert_eq!(store.load_pieces().expect("load pieces"), PieceTable::default());
}

#[test]
fn test_musicians_round_trip() {
    let (_dir, store) = store();
    let musicians = vec![
        Musician::new("Alice", &["Chant", "Guitare"]),
        Musician::new("Bob", &["Batterie"]),
    ];

    store.save_musicians(&musicians).expect("save musicians");
    let loaded = store.load_musicians().expect("load musicians");

    assert_eq!(loaded, musicians);
}

#[test]
fn test_musicians_file_layout() {
    let (dir, store) = store();

    store
        .save_musicians(&[Musician::new("Alice", &["Chant", "Guitare"])])
        .expect("save musicians");
    let text = fs::read_to_string(dir.path().join(MUSICIANS_FILE)).expect("read file");

    assert_eq!(text, "Nom,Instrument(s)\nAlice,\"Chant,Guitare\"\n");
}

#[test]
fn test_availability_round_trip_keeps_free_text() {
    let (_dir, store) = store();
    let table = AvailabilityTable::new(vec![
        AvailabilityRow::new("Alice")
            .with_cell(Day::Monday, "17h-20h")
            .with_cell(Day::Saturday, "10h-12h, 14h-16h"),
        AvailabilityRow::new("Bob").with_cell(Day::Monday, "18h-19h, 19h30-21h"),
    ]);

    store.save_availability(&table).expect("save availability");
    let loaded = store.load_availability().expect("load availability");

    assert_eq!(loaded, table);
}

#[test]
fn test_hand_written_availability_file() {
    let (dir, store) = store();
    fs::write(
        dir.path().join(AVAILABILITY_FILE),
        "Nom,lundi,Mardi,Remarques,Samedi\n\
         Alice,17h-20h,,batteur remplaçant,\"10h-12h, 14h-16h\"\n\
         ,9h-10h,,,\n\
         Bob,\"18h-19h, 19h30-21h\",pas dispo,,\n",
    )
    .expect("write file");

    let table = store.load_availability().expect("load availability");
    let index = AvailabilityIndex::build(&table);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(index.get(&MusicianId::from("Alice"), Day::Monday), &[slot(17, 20)]);
    assert_eq!(
        index.get(&MusicianId::from("Alice"), Day::Saturday),
        &[slot(10, 12), slot(14, 16)]
    );
    assert_eq!(index.get(&MusicianId::from("Bob"), Day::Monday), &[slot(18, 19)]);
    assert!(index.get(&MusicianId::from("Bob"), Day::Tuesday).is_empty());
}

#[test]
fn test_availability_without_name_column_is_an_error() {
    let (dir, store) = store();
    fs::write(dir.path().join(AVAILABILITY_FILE), "Lundi,Mardi\n17h-19h,\n").expect("write file");

    let err = store.load_availability().unwrap_err();

    assert!(err.to_string().contains("'Nom'"));
}

#[test]
fn test_pieces_with_title_column_anywhere() {
    let (dir, store) = store();
    fs::write(
        dir.path().join(PIECES_FILE),
        "Chant,Titre,Guitare,Batterie\n\
         Alice,Highway to Hell,Bob,\n\
         ,Come Together,Bob,Dan\n",
    )
    .expect("write file");

    let table = store.load_pieces().expect("load pieces");

    assert_eq!(table.role_columns, vec!["Chant", "Guitare", "Batterie"]);
    assert_eq!(
        musicians_for_piece(&table, "Highway to Hell").expect("piece exists"),
        vec![MusicianId::from("Alice"), MusicianId::from("Bob")]
    );
    assert_eq!(
        musicians_for_piece(&table, "Come Together").expect("piece exists"),
        vec![MusicianId::from("Bob"), MusicianId::from("Dan")]
    );
}

#[test]
fn test_pieces_round_trip() {
    let (_dir, store) = store();
    let mut table = PieceTable::default();
    table.insert(
        "Smoke on the Water",
        &[
            ("Guitare".to_string(), MusicianId::from("Bob")),
            ("Batterie".to_string(), MusicianId::from("Dan")),
        ],
    );

    store.save_pieces(&table).expect("save pieces");
    let loaded = store.load_pieces().expect("load pieces");

    assert_eq!(loaded, table);
}

#[test]
fn test_initialize_data_dir_keeps_existing_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_dir = dir.path().join("groupe");
    let store = CsvStore::new(&data_dir);

    schema::initialize_data_dir(&data_dir).expect("initialize");
    store
        .save_musicians(&[Musician::new("Alice", &["Chant"])])
        .expect("save musicians");
    schema::initialize_data_dir(&data_dir).expect("initialize again");

    assert_eq!(store.load_musicians().expect("load musicians").len(), 1);
    let header = fs::read_to_string(data_dir.join(AVAILABILITY_FILE)).expect("read file");
    assert_eq!(header, "Nom,Lundi,Mardi,Mercredi,Jeudi,Vendredi,Samedi\n");
}
