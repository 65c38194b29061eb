//! On-disk session archive formats
//!
//! An archived session is two files:
//! - `session.yaml`: event and driver list ([`SessionInfo`])
//! - `position_data.json`: raw position series per driver ([`PositionData`])

pub mod positions;
pub mod session;

pub use positions::{DriverPositions, PositionData};
pub use session::{DriverEntry, SessionInfo};
