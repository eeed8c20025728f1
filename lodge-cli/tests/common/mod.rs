//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixture helpers that drive the CLI to seed hotels, rooms, and bookings

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;
use uuid::Uuid;

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the lodge database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the lodge data directory
    pub data_dir: PathBuf,
    /// Id of a hotel owner for this environment
    pub owner: Uuid,
    /// Id of a customer for this environment
    pub customer: Uuid,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created yet; lodge auto-initializes it
    /// on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("lodge-data");

        Self {
            temp_dir,
            data_dir,
            owner: Uuid::new_v4(),
            customer: Uuid::new_v4(),
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the data directory or test
    /// global flag behavior.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("lodge").expect("Failed to find lodge binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder acting as the environment's hotel owner.
    pub fn owner_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--actor")
            .arg(self.owner.to_string())
            .arg("--role")
            .arg("hotel-owner");
        cmd
    }

    /// Get a command builder acting as the environment's customer.
    pub fn customer_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--actor").arg(self.customer.to_string());
        cmd
    }

    /// Register a hotel owned by this environment's owner.
    ///
    /// Returns the hotel id printed by the CLI.
    pub fn add_hotel(&self, name: &str) -> Uuid {
        let output = self
            .owner_command()
            .arg("add-hotel")
            .arg(name)
            .output()
            .expect("Failed to run add-hotel command");

        assert!(
            output.status.success(),
            "add-hotel failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Add a room to a hotel, open for booking far in the future.
    ///
    /// Returns the room id printed by the CLI.
    pub fn add_room(&self, hotel: Uuid, name: &str) -> Uuid {
        let output = self
            .owner_command()
            .arg("add-room")
            .arg("--hotel")
            .arg(hotel.to_string())
            .arg("--nightly-rate")
            .arg("100")
            .arg(name)
            .output()
            .expect("Failed to run add-room command");

        assert!(
            output.status.success(),
            "add-room failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Book a room as this environment's customer.
    ///
    /// Returns the booking id printed by the CLI.
    pub fn book(&self, room: Uuid, check_in: &str, check_out: &str) -> Uuid {
        let output = self
            .customer_command()
            .arg("book")
            .arg("--room")
            .arg(room.to_string())
            .arg("--check-in")
            .arg(check_in)
            .arg("--check-out")
            .arg(check_out)
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Seed a hotel with one room and return the room id.
    pub fn seed_room(&self) -> Uuid {
        let hotel = self.add_hotel("Test Hotel");
        self.add_room(hotel, "101")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to parse a UUID from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> Uuid {
    output.trim().parse().expect("Output is not a valid UUID")
}
