//! Integration tests for the `list` command.
//!
//! These tests verify listing bookings, including:
//! - Empty database handling
//! - Various output formats (table, json, csv)
//! - Role-dependent visibility (customer vs hotel owner)
//! - Format precedence (flag over config file)

mod common;

use std::fs;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

/// List with no bookings succeeds and says so.
#[test]
fn test_list_empty() {
    let env = TestEnv::new();
    env.seed_room();

    env.customer_command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found"));
}

/// Table output shows the booking with its status.
#[test]
fn test_list_table_format() {
    let env = TestEnv::new();
    let room = env.seed_room();
    env.book(room, "2030-06-01", "2030-06-04");

    env.customer_command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("pending"))
        .stdout(predicate::str::contains("2030-06-01..2030-06-04"));
}

/// JSON output is valid and carries the booking fields.
#[test]
fn test_list_json_format() {
    let env = TestEnv::new();
    let room = env.seed_room();
    let booking = env.book(room, "2030-06-01", "2030-06-04");

    let output = env
        .customer_command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");

    let rows = parsed.as_array().expect("Expected a JSON array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], booking.to_string());
    assert_eq!(rows[0]["nights"], 3);
    assert_eq!(rows[0]["total_price"], 300);
    assert_eq!(rows[0]["status"], "pending");
}

/// CSV output starts with the header row.
#[test]
fn test_list_csv_format() {
    let env = TestEnv::new();
    let room = env.seed_room();
    env.book(room, "2030-06-01", "2030-06-04");

    env.customer_command()
        .arg("list")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,customer,room,check_in"));
}

/// Customers only see their own bookings.
#[test]
fn test_list_customer_sees_only_own_bookings() {
    let env = TestEnv::new();
    let hotel = env.add_hotel("Test Hotel");
    let room_a = env.add_room(hotel, "101");
    let room_b = env.add_room(hotel, "102");
    env.book(room_a, "2030-06-01", "2030-06-04");

    // A second customer books the other room.
    let other = uuid::Uuid::new_v4();
    env.command()
        .arg("--actor")
        .arg(other.to_string())
        .arg("book")
        .arg("--room")
        .arg(room_b.to_string())
        .arg("--check-in")
        .arg("2030-07-01")
        .arg("--check-out")
        .arg("2030-07-03")
        .assert()
        .success();

    let output = env
        .customer_command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list command");
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");

    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
}

/// Hotel owners see every booking on their rooms.
#[test]
fn test_list_owner_sees_all_bookings() {
    let env = TestEnv::new();
    let hotel = env.add_hotel("Test Hotel");
    let room_a = env.add_room(hotel, "101");
    let room_b = env.add_room(hotel, "102");
    env.book(room_a, "2030-06-01", "2030-06-04");

    let other = uuid::Uuid::new_v4();
    env.command()
        .arg("--actor")
        .arg(other.to_string())
        .arg("book")
        .arg("--room")
        .arg(room_b.to_string())
        .arg("--check-in")
        .arg("2030-07-01")
        .arg("--check-out")
        .arg("2030-07-03")
        .assert()
        .success();

    let output = env
        .owner_command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list command");
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");

    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
}

/// The config file's output format is used when no flag is given.
#[test]
fn test_list_format_from_config_file() {
    let env = TestEnv::new();
    let room = env.seed_room();
    env.book(room, "2030-06-01", "2030-06-04");

    fs::write(env.data_dir.join("config.yaml"), "output_format: csv\n")
        .expect("Failed to write config");

    env.customer_command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,customer,room"));
}

/// The --format flag beats the config file.
#[test]
fn test_list_format_flag_beats_config() {
    let env = TestEnv::new();
    let room = env.seed_room();
    env.book(room, "2030-06-01", "2030-06-04");

    fs::write(env.data_dir.join("config.yaml"), "output_format: csv\n")
        .expect("Failed to write config");

    env.customer_command()
        .arg("list")
        .arg("--format")
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"));
}
