//! # plusnav
//!
//! CSS value conversion for the priority-plus navigation block.
//!
//! The block editor stores styling choices as structured attributes: preset
//! references such as `var:preset|spacing|30`, flat or per-side border
//! objects, per-corner radius objects and spacing objects. This crate turns
//! those values into minimal CSS shorthand values and custom-property
//! declarations.
//!
//! ## Quick Start
//!
//! ```
//! use plusnav::{Spacing, build_shorthand, convert_preset_value, padding_to_css};
//!
//! assert_eq!(
//!     convert_preset_value("var:preset|spacing|30"),
//!     "var(--wp--preset--spacing--30)"
//! );
//!
//! let padding = Spacing {
//!     top: Some("10px".into()),
//!     bottom: Some("10px".into()),
//!     ..Default::default()
//! };
//! assert_eq!(padding_to_css(&padding), "10px 0");
//! assert_eq!(build_shorthand("1em", "2em", "1em", "2em"), "1em 2em");
//! ```
//!
//! ## Rendering block attributes
//!
//! ```
//! use plusnav::{BlockAttributes, render_style};
//!
//! let attrs = BlockAttributes::from_json_str(
//!     r##"{"priorityNavDropdownStyles": {"border": {"color": "#fff"}}}"##,
//! )
//! .unwrap();
//! let style = render_style(&attrs);
//! assert_eq!(style.len(), 3);
//! ```

/// Expand a name into a custom property under the plugin's namespace.
macro_rules! custom_property {
    ($name:literal) => {
        concat!("--wp--custom--priority-plus-navigation--", $name)
    };
}

pub mod attributes;
pub mod convert;
pub mod error;
pub mod escape;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use attributes::{BlockAttributes, DropdownStyles, ItemPadding};
pub use convert::{
    BORDER_DEFAULTS, Border, BorderDefaults, BorderLine, BorderRadius, Declaration, RadiusCorners,
    Side, Spacing, ToCss, border_radius_to_css, border_to_css, build_shorthand,
    convert_preset_value, padding_to_css,
};
pub use error::{Error, Result};
pub use escape::{escape_attr, escape_css_value};
pub use render::{StyleBlock, render_style};
