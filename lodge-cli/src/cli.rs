//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::commands::{
    AddHotelCommand, AddRoomCommand, BookCommand, CancelCommand, DecideCommand, DeleteCommand,
    InitCommand, ListCommand, PayCommand,
};
use lodge::Role;

/// Command-line tool for managing hotel room bookings.
#[derive(Parser)]
#[command(name = "lodge")]
#[command(version, about = "Manage hotel room bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LODGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Id of the acting user
    #[arg(long, value_name = "UUID", global = true, env = "LODGE_ACTOR")]
    pub actor: Option<Uuid>,

    /// Role of the acting user (customer or hotel-owner)
    #[arg(
        long,
        value_name = "ROLE",
        global = true,
        env = "LODGE_ROLE",
        default_value = "customer"
    )]
    pub role: Role,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "LODGE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Register a hotel owned by the acting user
    AddHotel(AddHotelCommand),

    /// Add a room to a hotel
    AddRoom(AddRoomCommand),

    /// Book a room for a stay
    Book(BookCommand),

    /// Cancel a pending booking
    Cancel(CancelCommand),

    /// Approve a pending booking
    Approve(DecideCommand),

    /// Reject a booking
    Reject(DecideCommand),

    /// Pay for a booking
    Pay(PayCommand),

    /// Delete a booking
    Delete(DeleteCommand),

    /// List bookings visible to the acting user
    List(ListCommand),
}
