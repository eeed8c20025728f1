//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_hotel`: Register a hotel owned by the acting user
//! - `add_room`: Add a room to a hotel
//! - `book`: Book a room for a stay
//! - `cancel`: Cancel a pending booking
//! - `decide`: Approve or reject a booking as the hotel owner
//! - `pay`: Pay for a booking
//! - `delete`: Delete a booking
//! - `list`: List bookings visible to the acting user

pub mod add_hotel;
pub mod add_room;
pub mod book;
pub mod cancel;
pub mod decide;
pub mod delete;
pub mod init;
pub mod list;
pub mod pay;

pub use add_hotel::AddHotelCommand;
pub use add_room::AddRoomCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use decide::DecideCommand;
pub use delete::DeleteCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use pay::PayCommand;
