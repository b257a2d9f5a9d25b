//! A single `property: value` pair.

use std::fmt;

use super::ToCss;

/// A CSS declaration without the trailing semicolon.
///
/// The property is always one of the crate's fixed custom-property names;
/// the value has already been escaped where the producer requires it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self.property);
        buf.push_str(": ");
        buf.push_str(&self.value);
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}
