//! Demonstration driver for `lawcase_core`.
//!
//! # Responsibility
//! - Build a sample registry and print priority, overdue, summary and
//!   client-search results.
//! - Optionally initialize file logging from `LAWCASE_LOG_DIR`.
//!
//! Usage: `lawcase_cli [AS_OF_DATE]` where `AS_OF_DATE` is `YYYY-MM-DD`.

use chrono::{Local, NaiveDateTime, NaiveTime};
use lawcase_core::logging::{init_logging_with, LoggingConfig};
use lawcase_core::{parse_deadline, CaseRegistry, LegalCase, PRIORITY_HIGH};
use std::process::ExitCode;

const SAMPLE_CASES: [(&str, &str, &str, u8, &str); 4] = [
    ("CASE001", "John Doe", "Contract Dispute", 1, "2025-08-01"),
    ("CASE002", "Jane Smith", "IP Litigation", 2, "2025-07-15"),
    ("CASE003", "Acme Corp", "Contract Dispute", 3, "2025-09-01"),
    ("CASE004", "John Adams", "Compliance", 1, "2025-07-10"),
];

fn main() -> ExitCode {
    let logging = LoggingConfig::from_env()
        .and_then(|config| config.map_or(Ok(()), init_logging_with));
    if let Err(err) = logging {
        eprintln!("logging disabled: {err}");
    }

    let as_of = match std::env::args().nth(1) {
        Some(value) => match parse_deadline(&value) {
            Ok(date) => date.and_time(NaiveTime::MIN),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        },
        None => Local::now().naive_local(),
    };

    match run_demo(as_of) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo(as_of: NaiveDateTime) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = CaseRegistry::new();

    for (case_id, client, case_type, priority, deadline) in SAMPLE_CASES {
        let case = LegalCase::new(case_id, client, case_type, priority, deadline)?;
        match registry.add_case(case) {
            Ok(id) => println!("Case {id} added successfully."),
            Err(err) => println!("Case {case_id} skipped: {err}"),
        }
    }

    for doc_id in ["DOC001", "DOC002"] {
        let inserted = registry.add_document("CASE001", doc_id)?;
        println!("{}", document_line("CASE001", doc_id, inserted));
    }

    println!("\nHigh Priority Cases (Priority {PRIORITY_HIGH}):");
    for case in registry.cases_by_priority(PRIORITY_HIGH) {
        println!("{case}");
    }

    println!("\nOverdue Cases (as of {}):", as_of.date());
    for case in registry.overdue_cases(as_of) {
        println!("{case}");
    }

    println!("\nCase Summary by Type:");
    for (case_type, count) in registry.case_summary() {
        println!("{case_type}: {count} case(s)");
    }

    println!("\nSearch for cases with client 'John':");
    for case in registry.search_by_client("John") {
        println!("{case}");
    }

    log::info!(
        "event=demo_done module=cli status=ok cases={}",
        registry.len()
    );
    Ok(())
}

fn document_line(case_id: &str, doc_id: &str, inserted: bool) -> String {
    if inserted {
        format!("Document {doc_id} added to case {case_id}")
    } else {
        format!("Document {doc_id} already attached to case {case_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::document_line;
    use lawcase_core::{CaseRegistry, LegalCase};

    #[test]
    fn document_line_reports_repeated_attachment() {
        let mut registry = CaseRegistry::new();
        registry
            .add_case(LegalCase::new("CASE001", "John Doe", "Contract Dispute", 1, "2025-08-01").unwrap())
            .unwrap();

        let first = registry.add_document("CASE001", "DOC001").unwrap();
        let second = registry.add_document("CASE001", "DOC001").unwrap();

        assert_eq!(
            document_line("CASE001", "DOC001", first),
            "Document DOC001 added to case CASE001"
        );
        assert_eq!(
            document_line("CASE001", "DOC001", second),
            "Document DOC001 already attached to case CASE001"
        );
    }
}
