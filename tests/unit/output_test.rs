//! Tests for output formatting

use movie_rental::core::RentalError;
use movie_rental::output::{
    AvailableList, CatalogList, ErrorResult, FeeQuote, HistoryList, OperationResult, OutputMode,
    Render, RentalList, ReturnReceipt,
};
use movie_rental::core::models::MovieKind;

use crate::common::{desk_with, mixed_desk};

fn human(result: &impl Render) -> String {
    let mut buf = Vec::new();
    result.render(OutputMode::Human, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn json(result: &impl Render) -> serde_json::Value {
    let mut buf = Vec::new();
    result.render(OutputMode::Json, &mut buf).unwrap();
    serde_json::from_slice(&buf).unwrap()
}

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_operation_result_human_and_json() {
    let result = OperationResult::unchanged("Customer 'Alice' already exists.");
    assert_eq!(human(&result), "Customer 'Alice' already exists.\n");

    let value = json(&result);
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Customer 'Alice' already exists.");
}

#[test]
fn test_error_result_carries_message() {
    let err = RentalError::CustomerNotFound {
        name: "Zed".to_string(),
    };
    let result = ErrorResult::from(&err);
    assert!(human(&result).contains("customer 'Zed' not found"));
    assert_eq!(json(&result)["error"], "customer 'Zed' not found");
}

#[test]
fn test_available_list_shows_catalog_indices() {
    let mut desk = mixed_desk();
    desk.rent("Alice", 0).unwrap();

    let list = AvailableList::from_catalog(desk.catalog());
    assert_eq!(human(&list), "Available Movies:\n1. Tenet\n");
    assert_eq!(json(&list)["movies"][0]["index"], 1);
}

#[test]
fn test_available_list_empty() {
    let mut desk = mixed_desk();
    desk.rent("Alice", 0).unwrap();
    desk.rent("Alice", 1).unwrap();

    assert_eq!(human(&AvailableList::from_catalog(desk.catalog())), "No movies available.\n");
}

#[test]
fn test_catalog_list_shows_status() {
    let mut desk = mixed_desk();
    desk.rent("Bob", 1).unwrap();

    let list = CatalogList::from_catalog(desk.catalog());
    assert_eq!(human(&list), "Inception (Available)\nTenet (Rented)\n");

    let value = json(&list);
    assert_eq!(value["movies"][1]["title"], "Tenet");
    assert_eq!(value["movies"][1]["status"], "rented");
}

#[test]
fn test_catalog_list_empty() {
    let desk = desk_with(&[], &[]);
    assert_eq!(human(&CatalogList::from_catalog(desk.catalog())), "The catalog is empty.\n");
}

#[test]
fn test_rental_list_shows_outstanding_total() {
    let mut desk = mixed_desk();
    desk.rent("Alice", 1).unwrap();
    desk.rent("Alice", 0).unwrap();

    let list = RentalList::for_customer(&desk, "Alice", "RM");
    let text = human(&list);
    assert!(text.contains("0. Tenet\n1. Inception\n"));
    assert!(text.contains("RM 15.00"));
}

#[test]
fn test_return_receipt() {
    let mut desk = mixed_desk();
    desk.rent("Alice", 0).unwrap();
    let summary = desk.return_rental("Alice", 0, 5).unwrap();

    let receipt = ReturnReceipt::new(summary, "RM");
    assert_eq!(
        human(&receipt),
        "Inception has been returned after 5 day(s), total fee is: RM 9.00\n"
    );
    assert_eq!(json(&receipt)["fee"], 9.0);
}

#[test]
fn test_history_list_is_sorted() {
    let mut desk = mixed_desk();
    desk.rent("Bob", 1).unwrap();
    desk.rent("Alice", 0).unwrap();

    let history = HistoryList::from_ledger(desk.ledger());
    assert_eq!(history.events, vec!["Alice rented Inception", "Bob rented Tenet"]);
    assert_eq!(human(&HistoryList { events: vec![] }), "No rentals yet.\n");
}

#[test]
fn test_fee_quote() {
    let quote = FeeQuote {
        kind: MovieKind::Physical,
        days: 5,
        base_fee: 10.0,
        fee: 14.0,
        currency: "RM".to_string(),
    };
    assert_eq!(human(&quote), "Physical rental for 5 day(s): RM 14.00 (base RM 10.00)\n");
    assert_eq!(json(&quote)["kind"], "physical");
}
