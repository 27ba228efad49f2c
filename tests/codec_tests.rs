//! Tests for the line codec
//!
//! These tests verify:
//! - CSV encoding of records
//! - CSV decoding of valid lines
//! - One failure kind per bad field, in field order
//! - The tagged (call-style) format
//! - Line numbering on decode failures

use chrono::{Days, NaiveDate};
use passlog::codec::{decode_line, decode_tagged, encode_line, encode_tagged, LineFormat};
use passlog::{LineError, PassRecord, RecordError, VehicleKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed reference date so results never depend on the wall clock
fn today() -> NaiveDate {
    date(2024, 6, 15)
}

fn decode_err(line: &str) -> RecordError {
    decode_line(line, today()).unwrap_err()
}

// =============================================================================
// CSV Encode Tests
// =============================================================================

#[test]
fn test_encode_canonical_line() {
    let record = PassRecord::new(date(2023, 1, 2), "А123БВ78", 7.5);
    assert_eq!(encode_line(&record), "2023-01-02,А123БВ78,7.5");
}

#[test]
fn test_encode_pads_date_and_keeps_plate_verbatim() {
    let record = PassRecord::new(date(2019, 3, 4), "Х001ОР777", 12.0);
    assert_eq!(encode_line(&record), "2019-03-04,Х001ОР777,12");
}

#[test]
fn test_encode_matches_display() {
    let record = PassRecord::new(date(2020, 2, 29), "М777ММ77", 0.125);
    assert_eq!(encode_line(&record), record.to_string());
}

// =============================================================================
// CSV Decode Tests
// =============================================================================

#[test]
fn test_decode_valid_line() {
    let record = decode_line("2023-01-02,А123ВС78,7.5", today()).unwrap();

    assert_eq!(record.date(), date(2023, 1, 2));
    assert_eq!(record.plate(), "А123ВС78");
    assert_eq!(record.fuel_rate(), 7.5);
    assert_eq!(record.kind(), VehicleKind::Car);
    assert!(record.has_spare_wheel());
}

#[test]
fn test_decode_three_digit_region() {
    let record = decode_line("2024-06-15,У999ХХ199,10", today()).unwrap();
    assert_eq!(record.plate(), "У999ХХ199");
    assert_eq!(record.fuel_rate(), 10.0);
}

#[test]
fn test_decode_encode_round_trip() {
    let line = "2021-11-30,Т456КМ50,8.25";
    let record = decode_line(line, today()).unwrap();
    assert_eq!(encode_line(&record), line);
}

#[test]
fn test_decode_date_equal_to_today_is_accepted() {
    let line = format!("{},А123ВС78,7.5", today().format("%Y-%m-%d"));
    assert!(decode_line(&line, today()).is_ok());
}

// =============================================================================
// CSV Decode Failure Tests
// =============================================================================

#[test]
fn test_decode_wrong_field_count() {
    for (line, found) in [
        ("2023-01-02,А123ВС78", 2),
        ("2023-01-02,А123ВС78,7.5,extra", 4),
        ("", 1),
        ("2023-01-02,А123,ВС78,7.5", 4),
    ] {
        match decode_err(line) {
            RecordError::MalformedLine { detail } => {
                assert_eq!(detail, format!("expected 3 fields, found {found}"), "{line}")
            }
            other => panic!("Expected MalformedLine for {line:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_invalid_date() {
    for line in [
        "02.01.2023,А123ВС78,7.5",
        "2023-02-30,А123ВС78,7.5",
        "not-a-date,А123ВС78,7.5",
    ] {
        assert_eq!(decode_err(line).kind_name(), "InvalidDate", "{line}");
    }
}

#[test]
fn test_decode_future_date() {
    let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
    let line = format!("{},А123ВС78,7.5", tomorrow.format("%Y-%m-%d"));

    assert_eq!(
        decode_err(&line),
        RecordError::FutureDate { date: tomorrow }
    );
}

#[test]
fn test_decode_invalid_identifier() {
    for plate in ["InvalidNumber", "И123ВС78", "А123ГД78", "А123БВ78", "A123BC78", ""] {
        let line = format!("2023-01-02,{plate},7.5");
        assert_eq!(decode_err(&line).kind_name(), "InvalidIdentifier", "{plate:?}");
    }
}

#[test]
fn test_decode_invalid_identifier_message_lists_alphabet() {
    let message = decode_err("2023-01-02,InvalidNumber,7.5").to_string();
    assert!(message.contains("InvalidNumber"));
    assert!(message.contains("А, В, Е, К, М, Н, О, Р, С, Т, У, Х"));
}

#[test]
fn test_decode_invalid_number() {
    for fuel in ["abc", "", "7,5", "inf"] {
        let line = format!("2023-01-02,А123ВС78,{fuel}");
        // "7,5" splits into four fields
        let expected = if fuel.contains(',') { "MalformedLine" } else { "InvalidNumber" };
        assert_eq!(decode_err(&line).kind_name(), expected, "{fuel:?}");
    }
}

#[test]
fn test_decode_non_positive_fuel_rate() {
    for fuel in ["0", "0.0", "-1", "-7.5"] {
        let line = format!("2023-01-02,А123ВС78,{fuel}");
        assert_eq!(decode_err(&line).kind_name(), "NonPositiveFuelRate", "{fuel}");
    }
}

#[test]
fn test_decode_reports_first_bad_field() {
    // Bad date and bad plate: the date is checked first
    assert_eq!(decode_err("bad,bad,-1").kind_name(), "InvalidDate");
    // Good date, bad plate and bad fuel: the plate is checked first
    assert_eq!(decode_err("2023-01-02,bad,-1").kind_name(), "InvalidIdentifier");
}

// =============================================================================
// Line Numbering Tests
// =============================================================================

#[test]
fn test_decode_numbered_attaches_position() {
    let err = LineFormat::Csv
        .decode_numbered(7, "2023-01-02,InvalidNumber,7.5", today())
        .unwrap_err();

    assert_eq!(err.line_number, 7);
    assert_eq!(err.line, "2023-01-02,InvalidNumber,7.5");
    assert_eq!(err.kind.kind_name(), "InvalidIdentifier");
}

#[test]
fn test_line_error_message_contains_position_line_and_detail() {
    let err = LineError::new(
        3,
        "2023-01-02,А123ВС78,-2",
        RecordError::NonPositiveFuelRate { value: -2.0 },
    );
    let message = err.to_string();

    assert!(message.contains("line 3"));
    assert!(message.contains("2023-01-02,А123ВС78,-2"));
    assert!(message.contains("fuel rate must be positive"));
}

// =============================================================================
// Tagged Format Tests
// =============================================================================

#[test]
fn test_tagged_encode() {
    let record =
        PassRecord::with_kind(VehicleKind::Truck, date(2023, 2, 1), "А123ВС78", 25.5, false);
    assert_eq!(
        encode_tagged(&record),
        "Truck(01.02.2023, \"А123ВС78\", 25.5, False)"
    );
}

#[test]
fn test_tagged_decode_all_kinds() {
    for (tag, kind) in [
        ("Car", VehicleKind::Car),
        ("Truck", VehicleKind::Truck),
        ("Motorcycle", VehicleKind::Motorcycle),
    ] {
        let line = format!("{tag}(01.02.2023, \"А123ВС78\", 5.5, False)");
        let record = decode_tagged(&line, today()).unwrap();
        assert_eq!(record.kind(), kind);
        assert_eq!(record.date(), date(2023, 2, 1));
        assert_eq!(record.plate(), "А123ВС78");
        assert_eq!(record.fuel_rate(), 5.5);
        assert!(!record.has_spare_wheel());
    }
}

#[test]
fn test_tagged_spare_wheel_defaults_to_true() {
    let record = decode_tagged("Car(01.02.2023, \"А123ВС78\", 5.5)", today()).unwrap();
    assert!(record.has_spare_wheel());
}

#[test]
fn test_tagged_round_trip() {
    let line = "Motorcycle(28.02.2022, \"Е321КХ99\", 3.2, True)";
    let record = decode_tagged(line, today()).unwrap();
    assert_eq!(encode_tagged(&record), line);
}

#[test]
fn test_tagged_failures() {
    let cases = [
        ("Car 01.02.2023, \"А123ВС78\", 5.5", "MalformedLine"),
        ("Car(01.02.2023, \"А123ВС78\", 5.5", "MalformedLine"),
        ("Bus(01.02.2023, \"А123ВС78\", 5.5)", "UnknownKind"),
        ("Car(01.02.2023, \"А123ВС78\")", "MalformedLine"),
        ("Car(2023-02-01, \"А123ВС78\", 5.5)", "InvalidDate"),
        ("Car(01.02.2023, А123ВС78, 5.5)", "MalformedLine"),
        ("Car(01.02.2023, \"И123ВС78\", 5.5)", "InvalidIdentifier"),
        ("Car(01.02.2023, \"А123ВС78\", zero)", "InvalidNumber"),
        ("Car(01.02.2023, \"А123ВС78\", 0)", "NonPositiveFuelRate"),
        ("Car(01.02.2023, \"А123ВС78\", 5.5, maybe)", "InvalidFlag"),
        ("Car(16.06.2024, \"А123ВС78\", 5.5)", "FutureDate"),
    ];

    for (line, expected) in cases {
        let err = decode_tagged(line, today()).unwrap_err();
        assert_eq!(err.kind_name(), expected, "{line}");
    }
}

#[test]
fn test_tagged_field_count_names_accepted_range() {
    for (line, found) in [
        ("Car(01.02.2023, \"А123ВС78\")", 2),
        ("Car(01.02.2023, \"А123ВС78\", 5.5, True, 1)", 5),
    ] {
        match decode_tagged(line, today()) {
            Err(RecordError::MalformedLine { detail }) => {
                assert_eq!(detail, format!("expected 3 or 4 fields, found {found}"), "{line}")
            }
            other => panic!("Expected MalformedLine for {line}, got {other:?}"),
        }
    }
}

// =============================================================================
// LineFormat Tests
// =============================================================================

#[test]
fn test_line_format_dispatch() {
    let record = PassRecord::new(date(2023, 1, 2), "А123ВС78", 7.5);

    assert_eq!(LineFormat::Csv.encode(&record), "2023-01-02,А123ВС78,7.5");
    assert_eq!(
        LineFormat::Tagged.encode(&record),
        "Car(02.01.2023, \"А123ВС78\", 7.5, True)"
    );

    for format in [LineFormat::Csv, LineFormat::Tagged] {
        let decoded = format.decode(&format.encode(&record), today()).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn test_line_format_from_str() {
    assert_eq!("csv".parse::<LineFormat>().unwrap(), LineFormat::Csv);
    assert_eq!("Tagged".parse::<LineFormat>().unwrap(), LineFormat::Tagged);
    assert!("json".parse::<LineFormat>().is_err());
    assert_eq!(LineFormat::default(), LineFormat::Csv);
}
