//! Gamification Core - Shared data models, date decoding, and errors

pub mod dates;
pub mod errors;
pub mod models;

pub use dates::{DateCodec, DateFormat};
pub use errors::{Error, Result};
pub use models::*;
