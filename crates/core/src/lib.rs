//! Domain logic for the character biography service.
//!
//! Pure types and functions only: identifier validation, HTML escaping,
//! and profile template rendering. No I/O and no web types live here.

pub mod error;
pub mod id;
pub mod profile;
