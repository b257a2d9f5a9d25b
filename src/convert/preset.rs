//! Preset reference rewriting.

use std::borrow::Cow;

const PRESET_PREFIX: &str = "var:preset|";

/// Convert a preset reference to a CSS custom property lookup.
///
/// The editor stores design tokens as `var:preset|<type>|<slug>`. These
/// become `var(--wp--preset--<type>--<slug>)`, with both parts copied
/// verbatim. Anything else, including values that are already `var(...)`
/// lookups and plain literals like `12px`, is returned unchanged.
///
/// # Examples
///
/// ```
/// use plusnav::convert_preset_value;
///
/// assert_eq!(convert_preset_value("var:preset|spacing|30"), "var(--wp--preset--spacing--30)");
/// assert_eq!(convert_preset_value("var(--custom)"), "var(--custom)");
/// assert_eq!(convert_preset_value("12px"), "12px");
/// ```
pub fn convert_preset_value(value: &str) -> Cow<'_, str> {
    match split_preset(value) {
        Some((kind, slug)) => Cow::Owned(format!("var(--wp--preset--{kind}--{slug})")),
        None => Cow::Borrowed(value),
    }
}

/// Split `var:preset|<type>|<slug>` into its type and slug.
///
/// The type is everything up to the next `|` and must be non-empty. The slug
/// is the remainder of the line: non-empty, no line breaks, with a single
/// trailing newline tolerated and dropped.
fn split_preset(value: &str) -> Option<(&str, &str)> {
    let rest = value.strip_prefix(PRESET_PREFIX)?;
    let rest = rest.strip_suffix('\n').unwrap_or(rest);
    let (kind, slug) = rest.split_once('|')?;

    if kind.is_empty() || slug.is_empty() || slug.contains('\n') {
        return None;
    }

    Some((kind, slug))
}
