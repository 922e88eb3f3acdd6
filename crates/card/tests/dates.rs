use chrono::{DateTime, Datelike, Local};
use course_card::{format_date, ordinal_suffix, parse_local_date, Error};
use pretty_assertions::assert_eq;

#[test]
fn test_suffix_table() {
    let expected = [
        (1, "st"),
        (2, "nd"),
        (3, "rd"),
        (4, "th"),
        (10, "th"),
        (11, "th"),
        (12, "th"),
        (13, "th"),
        (20, "th"),
        (21, "st"),
        (22, "nd"),
        (23, "rd"),
        (30, "th"),
        (31, "st"),
    ];
    for (day, suffix) in expected {
        assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
    }
}

#[test]
fn test_plain_dates() {
    assert_eq!(format_date("2024-06-03").unwrap(), "3rd Jun 2024");
    assert_eq!(format_date("2024-01-11").unwrap(), "11th Jan 2024");
    assert_eq!(format_date("2023-12-22").unwrap(), "22nd Dec 2023");
    assert_eq!(format_date("2025-03-31").unwrap(), "31st Mar 2025");
    assert_eq!(format_date(" 2024-02-29 ").unwrap(), "29th Feb 2024");
}

#[test]
fn test_same_input_same_output() {
    assert_eq!(
        format_date("2024-06-03").unwrap(),
        format_date("2024-06-03").unwrap()
    );
}

#[test]
fn test_naive_timestamps() {
    assert_eq!(format_date("2024-06-03T10:30:00").unwrap(), "3rd Jun 2024");
    assert_eq!(format_date("2024-06-03T10:30:00.123").unwrap(), "3rd Jun 2024");
    assert_eq!(format_date("2024-06-03 23:59:59").unwrap(), "3rd Jun 2024");
    assert_eq!(format_date("2024-06-03T10:30").unwrap(), "3rd Jun 2024");
}

#[test]
fn test_offset_timestamp_uses_local_date() {
    let input = "2024-06-03T12:00:00Z";
    let local = DateTime::parse_from_rfc3339(input)
        .unwrap()
        .with_timezone(&Local)
        .date_naive();

    assert_eq!(parse_local_date(input).unwrap(), local);
    assert!(format_date(input).unwrap().starts_with(&local.day().to_string()));
}

#[test]
fn test_offset_timestamps() {
    // midday UTC is the same calendar day in all but the most extreme timezones
    assert_eq!(format_date("2024-06-03T12:00:00+00:00").unwrap(), "3rd Jun 2024");
    assert_eq!(format_date("2024-01-11T12:00:00Z").unwrap(), "11th Jan 2024");
    assert_eq!(
        format_date("2024-06-22T12:30:00.500+00:00").unwrap(),
        "22nd Jun 2024"
    );
}

#[test]
fn test_invalid_dates() {
    for input in ["", "soon", "2024-13-01", "2024-02-30", "03/06/2024"] {
        assert_eq!(
            format_date(input),
            Err(Error::InvalidDate(input.to_string())),
            "input {:?}",
            input
        );
    }
}
