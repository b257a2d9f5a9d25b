//! Assembly of a block's custom-property style.
//!
//! This is the host side of the converters: it walks the block attributes,
//! converts each value and collects the resulting declarations into a
//! [`StyleBlock`]. Values stay unescaped until the block is written out,
//! either as a `style` attribute or as stylesheet text.
//!
//! # Example
//!
//! ```
//! use plusnav::{BlockAttributes, render_style};
//!
//! let attrs = BlockAttributes {
//!     submenu_indent: Some("var:preset|spacing|20".into()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     render_style(&attrs).to_inline_style(),
//!     "--wp--custom--priority-plus-navigation--dropdown--submenu-indent: var(--wp--preset--spacing--20);"
//! );
//! ```

use std::borrow::Cow;

use crate::attributes::{BlockAttributes, ItemPadding};
use crate::convert::{
    Declaration, ToCss, border_radius_to_css, convert_preset_value, padding_to_css,
    raw_border_to_css,
};
use crate::escape::{escape_attr, escape_css_value};

pub const DROPDOWN_BACKGROUND_COLOR: &str = custom_property!("dropdown--background-color");
pub const DROPDOWN_ITEM_HOVER_BACKGROUND_COLOR: &str =
    custom_property!("dropdown--item-hover-background-color");
pub const DROPDOWN_ITEM_HOVER_TEXT_COLOR: &str =
    custom_property!("dropdown--item-hover-text-color");
pub const DROPDOWN_BORDER_RADIUS: &str = custom_property!("dropdown--border-radius");
pub const DROPDOWN_BOX_SHADOW: &str = custom_property!("dropdown--box-shadow");
pub const DROPDOWN_ITEM_PADDING: &str = custom_property!("dropdown--item-padding");
pub const DROPDOWN_SUBMENU_INDENT: &str = custom_property!("dropdown--submenu-indent");

/// An ordered list of declarations for one element.
///
/// Declarations hold unescaped values. Each output form escapes for its own
/// context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBlock {
    declarations: Vec<Declaration>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. Empty values are skipped.
    pub fn push(&mut self, declaration: Declaration) {
        if !declaration.value.is_empty() {
            self.declarations.push(declaration);
        }
    }

    /// Append `property: value`. Empty values are skipped.
    pub fn push_value(&mut self, property: &'static str, value: &str) {
        self.push(Declaration::new(property, value));
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render for a `style` attribute: `a: b; c: d;`.
    ///
    /// Values go through [`escape_attr`], so declarations that were
    /// attribute-escaped already are not encoded twice.
    pub fn to_inline_style(&self) -> String {
        self.to_css_string()
    }

    /// Render as stylesheet text: `selector { a: b; c: d; }`.
    ///
    /// Values go through [`escape_css_value`]. The selector is written as
    /// given.
    pub fn to_rule(&self, selector: &str) -> String {
        let mut buf = String::with_capacity(selector.len() + 4 + self.len() * 64);
        buf.push_str(selector);
        buf.push_str(" { ");
        for decl in &self.declarations {
            write_declaration(&mut buf, decl, escape_css_value);
            buf.push_str("; ");
        }
        buf.push('}');
        buf
    }
}

fn write_declaration(buf: &mut String, decl: &Declaration, escape: fn(&str) -> Cow<'_, str>) {
    buf.push_str(decl.property);
    buf.push_str(": ");
    buf.push_str(&escape(&decl.value));
}

impl ToCss for StyleBlock {
    fn to_css(&self, buf: &mut String) {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            write_declaration(buf, decl, escape_attr);
            buf.push(';');
        }
    }
}

impl Extend<Declaration> for StyleBlock {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        for decl in iter {
            self.push(decl);
        }
    }
}

impl IntoIterator for StyleBlock {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

/// Render the priority-plus custom properties for a navigation block.
///
/// Declarations come out in a fixed order: dropdown colors, border,
/// border radius, box shadow, item padding, submenu indent. Attributes that
/// are unset or convert to an empty value produce nothing.
pub fn render_style(attrs: &BlockAttributes) -> StyleBlock {
    let mut style = StyleBlock::new();

    let colors = [
        (DROPDOWN_BACKGROUND_COLOR, &attrs.dropdown_background_color),
        (
            DROPDOWN_ITEM_HOVER_BACKGROUND_COLOR,
            &attrs.item_hover_background_color,
        ),
        (DROPDOWN_ITEM_HOVER_TEXT_COLOR, &attrs.item_hover_text_color),
    ];
    for (property, color) in colors {
        if let Some(color) = color {
            style.push_value(property, &convert_preset_value(color));
        }
    }

    if let Some(styles) = &attrs.dropdown_styles {
        if let Some(border) = styles.effective_border() {
            style.extend(raw_border_to_css(&border));
        }
        if let Some(radius) = &styles.border_radius {
            style.push_value(DROPDOWN_BORDER_RADIUS, &border_radius_to_css(radius));
        }
        if let Some(shadow) = &styles.box_shadow {
            style.push_value(DROPDOWN_BOX_SHADOW, shadow);
        }
    }

    match &attrs.item_padding {
        Some(ItemPadding::Sides(spacing)) => {
            style.push_value(DROPDOWN_ITEM_PADDING, &padding_to_css(spacing));
        }
        Some(ItemPadding::Legacy(css)) => {
            style.push_value(DROPDOWN_ITEM_PADDING, &convert_preset_value(css));
        }
        None => {}
    }

    if let Some(indent) = &attrs.submenu_indent {
        style.push_value(DROPDOWN_SUBMENU_INDENT, &convert_preset_value(indent));
    }

    tracing::trace!(declarations = style.len(), "rendered block style");
    style
}
