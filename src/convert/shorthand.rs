//! Four-value shorthand collapsing.
//!
//! Box sides and radius corners both collapse "all equal" to one value and
//! fill gaps with `0`, but they list their fields in different orders and
//! only box sides have a two-value form. Each shape is its own
//! [`Shorthand`] implementation so the two can never be mixed up.

/// A property written as four values in a fixed CSS order.
pub(crate) trait Shorthand {
    /// Written in place of an empty field once collapsing to one value fails.
    const FILL: &'static str = "0";

    /// Whether `a b a b` may be written as `a b`.
    const TWO_VALUE: bool;

    /// The four fields in the order CSS expects them.
    fn css_order(&self) -> [&str; 4];

    /// Produce the most compact value this shape allows.
    fn to_shorthand(&self) -> String {
        let values = self.css_order();
        let first = values[0];

        if !first.is_empty() && values.iter().all(|v| *v == first) {
            return first.to_string();
        }

        let filled = values.map(|v| if v.is_empty() { Self::FILL } else { v });

        if Self::TWO_VALUE && filled[0] == filled[2] && filled[1] == filled[3] {
            return format!("{} {}", filled[0], filled[1]);
        }

        filled.join(" ")
    }
}

/// Box sides in `top right bottom left` order (padding, margin).
pub(crate) struct BoxSides<'a> {
    pub top: &'a str,
    pub right: &'a str,
    pub bottom: &'a str,
    pub left: &'a str,
}

impl Shorthand for BoxSides<'_> {
    const TWO_VALUE: bool = true;

    fn css_order(&self) -> [&str; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Radius corners in `top-left top-right bottom-right bottom-left` order.
pub(crate) struct BoxCorners<'a> {
    pub top_left: &'a str,
    pub top_right: &'a str,
    pub bottom_right: &'a str,
    pub bottom_left: &'a str,
}

impl Shorthand for BoxCorners<'_> {
    const TWO_VALUE: bool = false;

    fn css_order(&self) -> [&str; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Build the most compact `top right bottom left` shorthand.
///
/// Empty sides become `0` unless all four sides share one non-empty value.
///
/// # Examples
///
/// ```
/// use plusnav::build_shorthand;
///
/// assert_eq!(build_shorthand("1px", "1px", "1px", "1px"), "1px");
/// assert_eq!(build_shorthand("1px", "", "1px", ""), "1px 0");
/// assert_eq!(build_shorthand("1px", "2px", "3px", ""), "1px 2px 3px 0");
/// ```
pub fn build_shorthand(top: &str, right: &str, bottom: &str, left: &str) -> String {
    BoxSides {
        top,
        right,
        bottom,
        left,
    }
    .to_shorthand()
}
