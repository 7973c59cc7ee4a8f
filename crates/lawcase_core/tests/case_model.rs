use chrono::NaiveDate;
use lawcase_core::{parse_deadline, DeadlineFormatError, LegalCase};
use std::error::Error;

#[test]
fn new_case_sets_fields_and_empty_documents() {
    let case = LegalCase::new("CASE001", "John Doe", "Contract Dispute", 1, "2025-08-01").unwrap();

    assert_eq!(case.case_id(), "CASE001");
    assert_eq!(case.client_name, "John Doe");
    assert_eq!(case.case_type, "Contract Dispute");
    assert_eq!(case.priority, 1);
    assert_eq!(case.deadline, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    assert!(case.documents().is_empty());
}

#[test]
fn new_rejects_non_canonical_deadlines() {
    for input in [
        "08/01/2025",
        "tomorrow",
        "",
        " 2025-07-10",
        "2025- 07-10",
        "+2025-07-10",
        "25-07-10",
        "20250-07-10",
        "2025-07-10\n",
        "٢٠٢٥-07-10",
    ] {
        let err: DeadlineFormatError =
            LegalCase::new("CASE001", "John Doe", "Contract Dispute", 1, input).unwrap_err();
        assert_eq!(err.value, input);
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}

#[test]
fn new_rejects_impossible_dates_with_parse_cause() {
    for input in ["2025-13-01", "2025-02-30", "2025-00-10"] {
        let err = LegalCase::new("CASE001", "John Doe", "Contract Dispute", 1, input).unwrap_err();
        assert_eq!(err.value, input);
        assert!(err.source().is_some(), "parse cause should be kept for `{input}`");
    }
}

#[test]
fn add_document_is_idempotent() {
    let mut case = LegalCase::new("CASE001", "John Doe", "Contract Dispute", 1, "2025-08-01").unwrap();

    assert!(case.add_document("DOC001"));
    assert!(!case.add_document("DOC001"));
    assert!(case.add_document("DOC002"));

    assert_eq!(case.documents().len(), 2);
    assert!(case.has_document("DOC001"));
    assert!(!case.has_document("DOC003"));
}

#[test]
fn display_renders_date_without_time() {
    let case = LegalCase::new("CASE004", "John Adams", "Compliance", 1, "2025-07-10").unwrap();

    assert_eq!(
        case.to_string(),
        "Case CASE004: John Adams (Compliance), Priority: 1, Deadline: 2025-07-10"
    );
}

#[test]
fn serialization_uses_iso_deadline() {
    let mut case = LegalCase::new("CASE002", "Jane Smith", "IP Litigation", 2, "2025-07-15").unwrap();
    case.add_document("DOC900");

    let json = serde_json::to_value(&case).unwrap();
    assert_eq!(json["case_id"], "CASE002");
    assert_eq!(json["deadline"], "2025-07-15");
    assert_eq!(json["documents"], serde_json::json!(["DOC900"]));

    let decoded: LegalCase = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, case);
}

#[test]
fn with_deadline_matches_parsed_constructor() {
    let date = parse_deadline("2025-09-01").unwrap();
    let parsed = LegalCase::new("CASE003", "Acme Corp", "Contract Dispute", 3, "2025-09-01").unwrap();
    let direct = LegalCase::with_deadline("CASE003", "Acme Corp", "Contract Dispute", 3, date);

    assert_eq!(parsed, direct);
}
