//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, no parsing, no arithmetic, just data and accessors.

pub mod config;
pub mod record;
pub mod time_unit;

pub use record::ValueRecord;
pub use time_unit::TimeUnit;
