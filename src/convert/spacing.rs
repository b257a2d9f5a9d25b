//! Spacing attribute to a padding shorthand.

use std::borrow::Cow;

use super::preset::convert_preset_value;
use super::shorthand::build_shorthand;

/// Per-side spacing values, each a literal or a preset reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
}

impl Spacing {
    /// True when no side is present at all.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Convert a spacing attribute to a CSS padding value.
///
/// Each non-empty side is resolved through [`convert_preset_value`], then
/// the four sides are collapsed with [`build_shorthand`]. Returns an empty
/// string when no side has a value.
///
/// # Examples
///
/// ```
/// use plusnav::{Spacing, padding_to_css};
///
/// let spacing = Spacing {
///     top: Some("var:preset|spacing|30".into()),
///     ..Default::default()
/// };
/// assert_eq!(padding_to_css(&spacing), "var(--wp--preset--spacing--30) 0 0 0");
/// ```
pub fn padding_to_css(value: &Spacing) -> String {
    if value.is_empty() {
        return String::new();
    }

    let [top, right, bottom, left] =
        [&value.top, &value.right, &value.bottom, &value.left].map(|side| side.as_deref().unwrap_or(""));

    if top.is_empty() && right.is_empty() && bottom.is_empty() && left.is_empty() {
        return String::new();
    }

    let [top, right, bottom, left] = [top, right, bottom, left].map(resolve_side);

    build_shorthand(&top, &right, &bottom, &left)
}

fn resolve_side(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        Cow::Borrowed("")
    } else {
        convert_preset_value(value)
    }
}
