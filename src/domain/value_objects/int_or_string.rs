//! IntOrString value object - a port given either by number or by name

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric port (`8080`) or a named port (`"http"`).
///
/// `Int(0)` is the canonical unset value and is what `Default` produces.
/// An empty name is treated as unset as well, see [`IntOrString::is_unset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl IntOrString {
    /// True for both unset forms: `Int(0)` and `String("")`.
    pub fn is_unset(&self) -> bool {
        match self {
            IntOrString::Int(value) => *value == 0,
            IntOrString::String(name) => name.is_empty(),
        }
    }
}

impl Default for IntOrString {
    fn default() -> Self {
        IntOrString::Int(0)
    }
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        IntOrString::Int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(name: &str) -> Self {
        IntOrString::String(name.to_string())
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntOrString::Int(value) => write!(f, "{}", value),
            IntOrString::String(name) => f.write_str(name),
        }
    }
}
