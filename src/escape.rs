//! Escaping for declaration values, per output context.
//!
//! [`escape_attr`] is for an HTML `style` attribute. Values are encoded the
//! way the host CMS encodes attribute text: the five HTML-special characters
//! become entities, except that an `&` which already starts a well-formed
//! character reference is left alone. That makes the escape idempotent, so
//! a value escaped by the border converter can be passed through the
//! renderer again without turning `&quot;` into `&amp;quot;`.
//!
//! [`escape_css_value`] is for stylesheet text, where entities are not
//! decoded and the dangerous characters are the ones that end a declaration
//! or a rule.

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for use inside a double- or single-quoted HTML attribute.
///
/// Returns the input unchanged (borrowed) when nothing needs encoding.
///
/// # Examples
///
/// ```
/// use plusnav::escape_attr;
///
/// assert_eq!(escape_attr("#fff"), "#fff");
/// assert_eq!(escape_attr("a\"b"), "a&quot;b");
/// assert_eq!(escape_attr("&amp; & <"), "&amp; &amp; &lt;");
/// ```
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr::memchr3(b'<', b'>', b'"', bytes).is_none()
        && memchr::memchr2(b'\'', b'&', bytes).is_none()
    {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for (i, c) in text.char_indices() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            '&' if starts_with_char_reference(&text[i..]) => result.push('&'),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }

    // Every replacement is longer than its input.
    if result.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(result)
    }
}

/// Escape a declaration value for stylesheet text, e.g. inside `<style>`.
///
/// `;`, `{`, `}` and `\` are backslash-escaped so the value cannot end its
/// declaration or rule. `<` and line breaks become hex escapes (`\3c `),
/// which keeps `</style>` out of the output. Quotes and `&` are left alone.
///
/// # Examples
///
/// ```
/// use plusnav::escape_css_value;
///
/// assert_eq!(escape_css_value("var(--x, 'a')"), "var(--x, 'a')");
/// assert_eq!(escape_css_value("red; } body {"), "red\\; \\} body \\{");
/// assert_eq!(escape_css_value("</style>"), "\\3c /style>");
/// ```
pub fn escape_css_value(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(needs_css_escape) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            ';' | '{' | '}' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            '<' | '\n' | '\r' | '\x0c' => {
                let _ = write!(result, "\\{:x} ", u32::from(c));
            }
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn needs_css_escape(b: u8) -> bool {
    matches!(b, b';' | b'{' | b'}' | b'\\' | b'<' | b'\n' | b'\r' | b'\x0c')
}

/// Whether `text` (which starts with `&`) begins with `&name;`, `&#123;` or
/// `&#x1F;`.
fn starts_with_char_reference(text: &str) -> bool {
    let Some(body) = text.strip_prefix('&') else {
        return false;
    };
    let Some(end) = memchr::memchr(b';', body.as_bytes()) else {
        return false;
    };
    let name = &body[..end];

    match name.strip_prefix('#') {
        Some(number) => match number.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()),
        },
        None => {
            let mut bytes = name.bytes();
            bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
                && bytes.all(|b| b.is_ascii_alphanumeric())
        }
    }
}
