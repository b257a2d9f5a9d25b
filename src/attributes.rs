//! Block attributes as stored by the editor.
//!
//! Attributes arrive as JSON. The value-shaped attributes (borders, radii,
//! spacing) are decoded through [`serde_json::Value`] so that any shape
//! decodes: unexpected fields are dropped and the converters fall back to
//! their defaults. Only a document that is not JSON at all, or whose top
//! level is a bare scalar, is an error.
//!
//! Scalars follow the host's string coercion: numbers print in decimal,
//! `true` is `"1"`, `false` is `""` and `null` means "not set".

use std::borrow::Cow;
use std::io::Read;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::convert::{Border, BorderLine, BorderRadius, RadiusCorners, Side, Spacing};
use crate::error::Result;

/// Priority-plus attributes of a navigation block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockAttributes {
    #[serde(
        rename = "priorityNavDropdownBackgroundColor",
        deserialize_with = "scalar"
    )]
    pub dropdown_background_color: Option<String>,

    #[serde(
        rename = "priorityNavDropdownItemHoverBackgroundColor",
        deserialize_with = "scalar"
    )]
    pub item_hover_background_color: Option<String>,

    #[serde(
        rename = "priorityNavDropdownItemHoverTextColor",
        deserialize_with = "scalar"
    )]
    pub item_hover_text_color: Option<String>,

    #[serde(rename = "priorityPlusMenuItemPadding")]
    pub item_padding: Option<ItemPadding>,

    #[serde(rename = "priorityPlusMenuSubmenuIndent", deserialize_with = "scalar")]
    pub submenu_indent: Option<String>,

    #[serde(rename = "priorityNavDropdownStyles")]
    pub dropdown_styles: Option<DropdownStyles>,
}

impl BlockAttributes {
    /// Parse attributes from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse attributes from a reader yielding a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Container styles for the "more" dropdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownStyles {
    pub border: Option<Border>,
    #[serde(deserialize_with = "scalar")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "scalar")]
    pub border_width: Option<String>,
    #[serde(deserialize_with = "scalar")]
    pub border_style: Option<String>,
    pub border_radius: Option<BorderRadius>,
    #[serde(deserialize_with = "scalar")]
    pub box_shadow: Option<String>,
}

impl DropdownStyles {
    /// The border to render.
    ///
    /// An explicit `border` object wins. Otherwise the individual
    /// `borderColor`/`borderWidth`/`borderStyle` fields form a flat border.
    pub fn effective_border(&self) -> Option<Cow<'_, Border>> {
        if let Some(border) = &self.border {
            return Some(Cow::Borrowed(border));
        }

        let line = BorderLine {
            color: self.border_color.clone(),
            width: self.border_width.clone(),
            style: self.border_style.clone(),
        };
        (!line.is_empty()).then(|| Cow::Owned(Border::flat(line)))
    }
}

/// Menu item padding: a spacing object, or a plain CSS string from older
/// versions of the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPadding {
    Legacy(String),
    Sides(Spacing),
}

impl From<&Value> for ItemPadding {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(css) => ItemPadding::Legacy(css.clone()),
            other => ItemPadding::Sides(Spacing::from(other)),
        }
    }
}

impl From<&Value> for Border {
    fn from(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            tracing::debug!("border attribute is not an object, ignoring");
            return Border::default();
        };

        Border {
            flat: border_line(map),
            top: border_side(map, Side::Top),
            right: border_side(map, Side::Right),
            bottom: border_side(map, Side::Bottom),
            left: border_side(map, Side::Left),
        }
    }
}

impl From<&Value> for BorderRadius {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(css) => BorderRadius::Uniform(css.clone()),
            Value::Object(map) => BorderRadius::Corners(RadiusCorners {
                top_left: field(map, "topLeft"),
                top_right: field(map, "topRight"),
                bottom_right: field(map, "bottomRight"),
                bottom_left: field(map, "bottomLeft"),
            }),
            other => {
                tracing::debug!(value = %other, "unsupported border radius shape");
                BorderRadius::Unsupported
            }
        }
    }
}

impl From<&Value> for Spacing {
    fn from(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            tracing::debug!("spacing attribute is not an object, ignoring");
            return Spacing::default();
        };

        Spacing {
            top: field(map, "top"),
            right: field(map, "right"),
            bottom: field(map, "bottom"),
            left: field(map, "left"),
        }
    }
}

/// Implement `Deserialize` by way of `From<&Value>`, which never fails.
macro_rules! deserialize_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = Value::deserialize(deserializer)?;
                    Ok(Self::from(&value))
                }
            }
        )*
    };
}

deserialize_from_value!(Border, BorderRadius, Spacing, ItemPadding);

fn border_line(map: &Map<String, Value>) -> BorderLine {
    BorderLine {
        color: field(map, "color"),
        width: field(map, "width"),
        style: field(map, "style"),
    }
}

fn border_side(map: &Map<String, Value>, side: Side) -> Option<BorderLine> {
    match map.get(side.key()) {
        Some(Value::Object(side_map)) => Some(border_line(side_map)),
        None | Some(Value::Null) => None,
        Some(other) => {
            tracing::debug!(side = side.key(), value = %other, "border side is not an object");
            None
        }
    }
}

fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(coerce_scalar)
}

/// Coerce a JSON scalar to the string the host would see.
pub(crate) fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Array(_) | Value::Object(_) => {
            tracing::debug!(value = %value, "dropping non-scalar attribute value");
            None
        }
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // Integral floats print without a fractional part: 2.0 -> "2".
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_scalar(&value))
}
