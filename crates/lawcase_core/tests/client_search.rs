use lawcase_core::{search_by_client, ClientQuery, LegalCase};

fn case(id: &str, client: &str) -> LegalCase {
    LegalCase::new(id, client, "Contract Dispute", 2, "2025-08-01").unwrap()
}

#[test]
fn john_matches_both_johns_and_not_jane() {
    let cases = [
        case("C1", "John Doe"),
        case("C2", "Jane Smith"),
        case("C3", "John Adams"),
    ];

    let hits: Vec<&str> = search_by_client(&cases, "john")
        .into_iter()
        .map(|case| case.case_id())
        .collect();

    assert_eq!(hits, vec!["C1", "C3"]);
}

#[test]
fn query_matches_inside_the_name() {
    let query = ClientQuery::new("ADA");

    assert!(query.matches("John Adams"));
    assert!(!query.matches("Jane Smith"));
}

#[test]
fn empty_query_returns_all_cases_in_order() {
    let cases = [case("C2", "Beta LLC"), case("C1", "Alpha Inc")];

    let hits = search_by_client(&cases, "");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].case_id(), "C2");
}
