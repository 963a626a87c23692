use pretty_assertions::assert_eq;
use rehearsal_core::errors::SlotParseError;
use rehearsal_core::models::time_slot::{
    TimeInterval, canonicalize, format_cell, parse_cell, parse_slot, slots_overlap,
};
use rstest::rstest;

fn slot(start: u8, end: u8) -> TimeInterval {
    TimeInterval::new(start, end).expect("valid interval")
}

#[rstest]
#[case("17h-19h", 17, 19)]
#[case(" 17h - 19h ", 17, 19)]
#[case("9h-12h", 9, 12)]
#[case("0h-24h", 0, 24)]
#[case("18H-20H", 18, 20)]
fn test_parse_valid_slot(#[case] text: &str, #[case] start: u8, #[case] end: u8) {
    let interval = parse_slot(text).expect("slot should parse");

    assert_eq!((interval.start(), interval.end()), (start, end));
}

#[rstest]
#[case("", SlotParseError::Empty)]
#[case("   ", SlotParseError::Empty)]
#[case("17-19", SlotParseError::MissingHourMarker("17".to_string()))]
#[case("17h19h", SlotParseError::MissingSeparator("17h19h".to_string()))]
#[case("abc", SlotParseError::MissingSeparator("abc".to_string()))]
#[case("19h30-21h", SlotParseError::MissingHourMarker("19h30".to_string()))]
#[case("xh-19h", SlotParseError::NotAnHour("xh".to_string()))]
#[case(
    "17h-19h-20h",
    SlotParseError::WrongPartCount { token: "17h-19h-20h".to_string(), found: 3 }
)]
#[case("20h-18h", SlotParseError::EmptyRange { start: 20, end: 18 })]
#[case("19h-19h", SlotParseError::EmptyRange { start: 19, end: 19 })]
#[case("22h-2h", SlotParseError::EmptyRange { start: 22, end: 2 })]
#[case("17h-25h", SlotParseError::HourOutOfRange(25))]
fn test_parse_malformed_slot(#[case] text: &str, #[case] expected: SlotParseError) {
    assert_eq!(parse_slot(text), Err(expected));
}

#[test]
fn test_parse_cell_keeps_valid_tokens_in_order() {
    assert_eq!(
        parse_cell("17h-19h, 20h-21h"),
        vec![slot(17, 19), slot(20, 21)]
    );
    assert_eq!(parse_cell("20h-21h,9h-10h"), vec![slot(20, 21), slot(9, 10)]);
}

#[test_log::test]
fn test_parse_cell_discards_malformed_tokens() {
    assert_eq!(parse_cell("18h-19h, 19h30-21h"), vec![slot(18, 19)]);
    assert_eq!(parse_cell("n'importe quoi, 10h-12h, 12-14"), vec![slot(10, 12)]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(" , ,")]
#[case("pas dispo")]
#[case("19h30-21h")]
fn test_parse_cell_without_valid_tokens_is_empty(#[case] text: &str) {
    assert!(parse_cell(text).is_empty());
}

#[rstest]
#[case(slot(17, 19), slot(18, 20), true)]
#[case(slot(17, 19), slot(19, 21), false)]
#[case(slot(17, 21), slot(18, 19), true)]
#[case(slot(9, 10), slot(20, 21), false)]
#[case(slot(17, 19), slot(17, 19), true)]
fn test_slots_overlap_is_symmetric(
    #[case] a: TimeInterval,
    #[case] b: TimeInterval,
    #[case] expected: bool,
) {
    assert_eq!(slots_overlap(&a, &b), expected);
    assert_eq!(slots_overlap(&b, &a), expected);
}

#[test]
fn test_intersection() {
    assert_eq!(slot(17, 20).intersection(&slot(18, 21)), Some(slot(18, 20)));
    assert_eq!(slot(17, 19).intersection(&slot(19, 21)), None);
}

#[test]
fn test_canonicalize_merges_overlaps_only() {
    assert_eq!(
        canonicalize(&[slot(19, 21), slot(17, 20), slot(22, 23)]),
        vec![slot(17, 21), slot(22, 23)]
    );
    assert_eq!(
        canonicalize(&[slot(19, 21), slot(17, 19)]),
        vec![slot(17, 19), slot(19, 21)]
    );
    assert!(canonicalize(&[]).is_empty());
}

#[test]
fn test_format_cell_reads_back() {
    let intervals = vec![slot(17, 19), slot(20, 21)];

    let text = format_cell(&intervals);

    assert_eq!(text, "17h-19h, 20h-21h");
    assert_eq!(parse_cell(&text), intervals);
}

#[test]
fn test_interval_serialization() {
    let json = serde_json::to_string(&slot(17, 19)).expect("Failed to serialize interval");
    assert_eq!(json, r#"{"start":17,"end":19}"#);

    let degenerate = serde_json::from_str::<TimeInterval>(r#"{"start":20,"end":18}"#);
    assert!(degenerate.is_err());
}
