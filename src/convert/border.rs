//! Border objects to dropdown custom-property declarations.
//!
//! The editor's border control produces one of two shapes:
//!
//! - flat: `{ color, width, style }` applied to every side
//! - per-side: `{ top: { color, width, style }, right: {...}, ... }`
//!
//! Flat borders become three separate custom properties. Per-side borders
//! become one `width style color` custom property per configured side.

use std::borrow::Cow;

use crate::escape::escape_attr;

use super::declaration::Declaration;

/// Values substituted for unset border fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderDefaults {
    pub color: &'static str,
    pub width: &'static str,
    pub style: &'static str,
}

pub const BORDER_DEFAULTS: BorderDefaults = BorderDefaults {
    color: "#dddddd",
    width: "1px",
    style: "solid",
};

const BORDER_COLOR: &str = custom_property!("dropdown--border-color");
const BORDER_WIDTH: &str = custom_property!("dropdown--border-width");
const BORDER_STYLE: &str = custom_property!("dropdown--border-style");

/// One of the four box sides, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Key used for this side in block attributes.
    pub fn key(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Custom property carrying this side's border shorthand.
    pub fn border_property(self) -> &'static str {
        match self {
            Side::Top => custom_property!("dropdown--border-top"),
            Side::Right => custom_property!("dropdown--border-right"),
            Side::Bottom => custom_property!("dropdown--border-bottom"),
            Side::Left => custom_property!("dropdown--border-left"),
        }
    }
}

/// A color/width/style triple. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderLine {
    pub color: Option<String>,
    pub width: Option<String>,
    pub style: Option<String>,
}

impl BorderLine {
    /// True when none of the three fields is set.
    ///
    /// An empty string still counts as set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.width.is_none() && self.style.is_none()
    }

    fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(BORDER_DEFAULTS.color)
    }

    fn width_or_default(&self) -> &str {
        self.width.as_deref().unwrap_or(BORDER_DEFAULTS.width)
    }

    fn style_or_default(&self) -> &str {
        self.style.as_deref().unwrap_or(BORDER_DEFAULTS.style)
    }
}

/// A border attribute in either flat or per-side form.
///
/// `flat` holds the top-level `color`/`width`/`style` keys. If any of them is
/// set the border is flat and the side entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    pub flat: BorderLine,
    pub top: Option<BorderLine>,
    pub right: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
    pub left: Option<BorderLine>,
}

impl Border {
    /// A flat border with the given fields.
    pub fn flat(line: BorderLine) -> Self {
        Self {
            flat: line,
            ..Self::default()
        }
    }

    pub fn side(&self, side: Side) -> Option<&BorderLine> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    pub fn is_flat(&self) -> bool {
        !self.flat.is_empty()
    }
}

/// Convert a border attribute to custom-property declarations.
///
/// Flat borders always yield three declarations (color, width, style) with
/// defaults filled in. Per-side borders yield one declaration per side that
/// has at least one field set, in top/right/bottom/left order. Every value
/// is passed through [`escape_attr`].
///
/// # Examples
///
/// ```
/// use plusnav::{Border, BorderLine, border_to_css};
///
/// let border = Border {
///     top: Some(BorderLine { color: Some("#000".into()), ..Default::default() }),
///     ..Default::default()
/// };
/// let decls = border_to_css(&border);
/// assert_eq!(decls.len(), 1);
/// assert_eq!(decls[0].value, "1px solid #000");
/// ```
pub fn border_to_css(border: &Border) -> Vec<Declaration> {
    border_declarations(border, escape_attr)
}

/// Same as [`border_to_css`] but with values left unescaped, for callers
/// that escape per output context.
pub(crate) fn raw_border_to_css(border: &Border) -> Vec<Declaration> {
    border_declarations(border, unescaped)
}

fn unescaped(value: &str) -> Cow<'_, str> {
    Cow::Borrowed(value)
}

type Escape = fn(&str) -> Cow<'_, str>;

fn border_declarations(border: &Border, escape: Escape) -> Vec<Declaration> {
    if border.is_flat() {
        tracing::trace!("converting flat border");
        return flat_border_to_css(&border.flat, escape);
    }

    tracing::trace!("converting per-side border");
    per_side_border_to_css(border, escape)
}

fn flat_border_to_css(line: &BorderLine, escape: Escape) -> Vec<Declaration> {
    vec![
        Declaration::new(BORDER_COLOR, escape(line.color_or_default())),
        Declaration::new(BORDER_WIDTH, escape(line.width_or_default())),
        Declaration::new(BORDER_STYLE, escape(line.style_or_default())),
    ]
}

fn per_side_border_to_css(border: &Border, escape: Escape) -> Vec<Declaration> {
    Side::ALL
        .into_iter()
        .filter_map(|side| {
            let line = border.side(side).filter(|line| !line.is_empty())?;
            let value = format!(
                "{} {} {}",
                escape(line.width_or_default()),
                escape(line.style_or_default()),
                escape(line.color_or_default()),
            );
            Some(Declaration::new(side.border_property(), value))
        })
        .collect()
}
