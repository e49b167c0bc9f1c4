//! Character identifier parsing and validation.
//!
//! Identifiers are generated by the external character writer and are
//! always 24 lowercase hexadecimal characters. Anything else is rejected
//! before the database is consulted.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Regex pattern for a valid character identifier.
pub const CHARACTER_ID_PATTERN: &str = r"^[0-9a-f]{24}$";

/// Compiled identifier regex. Compiled once, reused forever.
static CHARACTER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CHARACTER_ID_PATTERN).expect("valid regex"));

/// A validated character identifier in its canonical 24-hex form.
///
/// Construction goes through [`FromStr`]; a value of this type is always
/// safe to bind into a lookup query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterId(String);

impl CharacterId {
    /// The canonical string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CharacterId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if CHARACTER_ID_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::Validation("Improper character ID.".to_string()))
        }
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
