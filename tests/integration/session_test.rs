//! Integration tests for interactive menu sessions
//!
//! Each test pipes a full menu script into the binary and checks what the
//! user would have seen.

use predicates::prelude::*;
use tempfile::TempDir;

use super::{movie_rental, single_movie_config};

// =============================================================================
// RENT AND RETURN
// =============================================================================

/// Rent "X" to "A", return it after 5 days, then check the history
#[test]
fn test_rent_return_history_workflow() {
    let home = TempDir::new().unwrap();
    let config = single_movie_config(&home);

    movie_rental(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("3\nA\n0\n4\nA\n0\n5\n6\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Movies:\n0. X"))
        .stdout(predicate::str::contains("X has been rented to A."))
        .stdout(predicate::str::contains("0. X\nOutstanding (before late fees): RM 5.00"))
        .stdout(predicate::str::contains("total fee is: RM 9.00"))
        .stdout(predicate::str::contains("A rented X\nA returned X"))
        .stdout(predicate::str::contains("X (Available)"))
        .stdout(predicate::str::contains("Thank you for using the Movie Rental System"));
}

#[test]
fn test_rent_marks_movie_rented_in_listing() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nAlice\n1\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark Knight has been rented to Alice."))
        .stdout(predicate::str::contains("Dark Knight (Rented)"))
        .stdout(predicate::str::contains("Inception (Available)"));
}

#[test]
fn test_rent_already_rented_index_reports_error() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nAlice\n0\n3\nBob\n0\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception is already rented"));
}

#[test]
fn test_rent_unknown_customer_reports_error() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nZed\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer 'Zed' not found"))
        .stdout(predicate::str::contains("No rentals yet."));
}

#[test]
fn test_rent_out_of_range_index_changes_nothing() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nAlice\n12\n3\nAlice\n-1\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("index 12 is out of range for 12 item(s)"))
        .stdout(predicate::str::contains("index -1 is out of range"))
        .stdout(predicate::str::contains("(Rented)").not());
}

#[test]
fn test_rent_non_numeric_index_reports_error() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nAlice\nfirst\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'first' is not a whole number"));
}

#[test]
fn test_return_without_rentals() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("4\nKim\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies rented by Kim."));
}

#[test]
fn test_return_out_of_range_keeps_rental() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nBob\n3\n4\nBob\n1\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("index 1 is out of range for 1 item(s)"))
        .stdout(predicate::str::contains("Tenet (Rented)"));
}

#[test]
fn test_return_physical_within_grace() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("3\nJack\n3\n4\nJack\n0\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tenet has been returned after 2 day(s), total fee is: RM 10.00",
        ));
}

// =============================================================================
// CUSTOMERS AND MOVIES
// =============================================================================

#[test]
fn test_add_customer_then_rent() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("1\nZoe\n1\nZoe\n3\nZoe\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer 'Zoe' added successfully."))
        .stdout(predicate::str::contains("Customer 'Zoe' already exists."))
        .stdout(predicate::str::contains("Oppenheimer has been rented to Zoe."));
}

#[test]
fn test_add_movie_appends_to_catalog() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("2\nDune\nP\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Physical movie 'Dune' at index 12."))
        .stdout(predicate::str::contains("The Social Network (Available)\nDune (Available)"));
}

#[test]
fn test_add_movie_invalid_kind_adds_nothing() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("2\nDune\nvhs\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid movie type 'vhs'"))
        .stdout(predicate::str::contains("Dune (Available)").not());
}

// =============================================================================
// MENU HANDLING
// =============================================================================

#[test]
fn test_invalid_menu_choice_keeps_running() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("9\nhello\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid menu choice '9'"))
        .stdout(predicate::str::contains("invalid menu choice 'hello'"))
        .stdout(predicate::str::contains("Exiting!"));
}

#[test]
fn test_end_of_input_is_fatal() {
    let home = TempDir::new().unwrap();
    movie_rental(&home)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input stream closed"));
}

#[test]
fn test_json_mode_renders_results_as_json() {
    let home = TempDir::new().unwrap();
    let config = single_movie_config(&home);

    movie_rental(&home)
        .args(["--json", "--config"])
        .arg(&config)
        .write_stdin("3\nA\n0\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"events\": [\n    \"A rented X\"\n  ]"));
}
