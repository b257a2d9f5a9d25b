//! Border radius attribute to a `border-radius` value.

use super::shorthand::{BoxCorners, Shorthand};

/// Per-corner radius values. Unset corners are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadiusCorners {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_right: Option<String>,
    pub bottom_left: Option<String>,
}

/// A border radius attribute as stored by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderRadius {
    /// A ready-made CSS value such as `4px` or `50%`.
    Uniform(String),
    /// The per-corner object form.
    Corners(RadiusCorners),
    /// Any other shape. Always converts to an empty value.
    Unsupported,
}

impl From<&str> for BorderRadius {
    fn from(value: &str) -> Self {
        BorderRadius::Uniform(value.to_string())
    }
}

impl From<RadiusCorners> for BorderRadius {
    fn from(corners: RadiusCorners) -> Self {
        BorderRadius::Corners(corners)
    }
}

/// Convert a border radius attribute to a CSS `border-radius` value.
///
/// Strings pass through untouched. Corner objects collapse to a single value
/// when all four corners are set and equal; otherwise empty corners become
/// `0` and all four are listed in top-left, top-right, bottom-right,
/// bottom-left order. There is no two-value form.
///
/// # Examples
///
/// ```
/// use plusnav::{BorderRadius, RadiusCorners, border_radius_to_css};
///
/// assert_eq!(border_radius_to_css(&BorderRadius::from("4px")), "4px");
///
/// let corners = RadiusCorners {
///     top_left: Some("4px".into()),
///     bottom_right: Some("2px".into()),
///     ..Default::default()
/// };
/// assert_eq!(border_radius_to_css(&corners.into()), "4px 0 2px 0");
/// ```
pub fn border_radius_to_css(value: &BorderRadius) -> String {
    match value {
        BorderRadius::Uniform(css) => css.clone(),
        BorderRadius::Corners(corners) => per_corner_radius_to_css(corners),
        BorderRadius::Unsupported => String::new(),
    }
}

fn per_corner_radius_to_css(corners: &RadiusCorners) -> String {
    let shape = BoxCorners {
        top_left: corners.top_left.as_deref().unwrap_or(""),
        top_right: corners.top_right.as_deref().unwrap_or(""),
        bottom_right: corners.bottom_right.as_deref().unwrap_or(""),
        bottom_left: corners.bottom_left.as_deref().unwrap_or(""),
    };

    if shape.css_order().iter().all(|v| v.is_empty()) {
        return String::new();
    }

    shape.to_shorthand()
}
