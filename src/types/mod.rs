//! Core types for position data.
//!
//! - [`RawPositionSample`] is one reading as stored in the session archive
//! - [`Coordinate`] is a scaled, axis-permuted point in visualization space
//! - [`SessionId`] names the session to export
//!
//! ## Usage Example
//!
//! ```rust
//! use trackcast::types::{Coordinate, RawPositionSample, Scale};
//!
//! let sample = RawPositionSample::new(12.4, 100.0, 200.0, 300.0);
//! let (x, y, z) = sample.axes().unwrap();
//! let coordinate = Coordinate::from_raw(x, y, z, Scale::Hundredths);
//!
//! assert_eq!(sample.second(), 12);
//! assert_eq!(coordinate, Coordinate { x: 1.0, y: 3.0, z: 2.0 });
//! ```

mod coordinate;
mod sample;
mod session_id;

pub use coordinate::{Coordinate, Scale};
pub use sample::RawPositionSample;
pub use session_id::{SessionId, SessionKind};
