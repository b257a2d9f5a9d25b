//! Conversion of block attribute values into CSS.
//!
//! This module contains:
//! - Preset reference rewriting (`var:preset|type|slug`)
//! - Border objects to custom-property declarations
//! - Per-corner radius and per-side spacing to shorthand values
//!
//! Every function here is total: malformed or partial input degrades to
//! defaults or empty output, never to an error.

mod border;
mod declaration;
mod preset;
mod radius;
mod shorthand;
mod spacing;

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

pub use border::{BORDER_DEFAULTS, Border, BorderDefaults, BorderLine, Side, border_to_css};
pub(crate) use border::raw_border_to_css;
pub use declaration::Declaration;
pub use preset::convert_preset_value;
pub use radius::{BorderRadius, RadiusCorners, border_radius_to_css};
pub use shorthand::build_shorthand;
pub use spacing::{Spacing, padding_to_css};
