//! Content-type encoders for markup output.
//!
//! Each output dialect that `markweave` writes has exactly one canonical
//! encoder in this crate. An encoder turns an untyped value into text that can
//! be embedded in that dialect's stream without changing the stream's
//! structure. Encoders never look at what surrounds them, so they are applied
//! once, at the point where data enters a typed stream.
//!
//! | Dialect | String encoder | Output |
//! |---------|----------------|--------|
//! | HTML | [`html`] | entity-escaped `&`, `<`, `>`, `"` |
//! | Plaintext | [`plaintext`] | verbatim |
//! | CSS | [`css_string`] | quoted CSS literal |
//! | CSS | [`css_url`] | backslash-escaped `url(...)` body |
//! | JavaScript | [`javascript_string`] | quoted JavaScript literal |
//!
//! Numbers go through [`number`], which produces the same locale-independent
//! decimal text for every dialect.
//!
//! # Example
//!
//! ```rust
//! use markweave_escape::{html, javascript_string, css_string};
//!
//! assert_eq!(html("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
//! assert_eq!(html("it's"), "it's");
//! assert_eq!(javascript_string("</script>"), r#""\074/script\076""#);
//! assert_eq!(css_string("a\"b"), r#""a\"b""#);
//! ```
//!
//! Every encoder also has a `write_*` form that appends to an existing
//! `String`, which is what the renderer uses to avoid intermediate
//! allocations.

use std::borrow::Cow;
use std::fmt::{self, Write};

// ============================================================================
// HTML
// ============================================================================

fn html_replacement(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// HTML-encodes a string.
///
/// Escapes `&`, `<`, `>` and `"`. The apostrophe is left as-is: attribute
/// values are always written with double quotes, so `'` cannot terminate
/// them. Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// ```rust
/// use markweave_escape::html;
///
/// assert_eq!(html("<b>"), "&lt;b&gt;");
/// assert!(matches!(html("plain"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn html(s: &str) -> Cow<'_, str> {
    replace_chars(s, html_replacement)
}

/// Appends the HTML-encoded form of `s` to `out`.
pub fn write_html(out: &mut String, s: &str) {
    push_replaced(out, s, html_replacement);
}

// ============================================================================
// Plaintext
// ============================================================================

/// Plaintext encoder. Plaintext has no metacharacters, so this is the identity.
pub fn plaintext(s: &str) -> Cow<'_, str> {
    Cow::Borrowed(s)
}

/// Appends `s` to `out` unchanged.
pub fn write_plaintext(out: &mut String, s: &str) {
    out.push_str(s);
}

// ============================================================================
// CSS
// ============================================================================

// Hex escapes carry a trailing space. Without it the escape would swallow
// following hex digits or whitespace.
fn css_string_replacement(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some("\\\\"),
        '\n' => Some("\\a "),
        '\r' => Some("\\d "),
        '\x0c' => Some("\\c "),
        '\'' => Some("\\'"),
        '"' => Some("\\\""),
        '<' => Some("\\3c "),
        '>' => Some("\\3e "),
        _ => None,
    }
}

/// Encodes `s` as a double-quoted CSS string literal.
///
/// ```rust
/// use markweave_escape::css_string;
///
/// assert_eq!(css_string("Helvetica Neue"), "\"Helvetica Neue\"");
/// assert_eq!(css_string("line\nbreak"), "\"line\\a break\"");
/// ```
pub fn css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_css_string(&mut out, s);
    out
}

/// Appends `s` to `out` as a double-quoted CSS string literal.
pub fn write_css_string(out: &mut String, s: &str) {
    out.push('"');
    push_replaced(out, s, css_string_replacement);
    out.push('"');
}

/// Encodes `s` as the body of an unquoted CSS `url(...)` token.
///
/// Characters that would end the token are backslash-escaped. The caller
/// writes the surrounding `url(` and `)`.
///
/// ```rust
/// use markweave_escape::css_url;
///
/// assert_eq!(css_url("/img/a b.png"), r"/img/a\ b.png");
/// ```
pub fn css_url(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    write_css_url(&mut out, s);
    out
}

/// Appends `s` to `out` as the body of a CSS `url(...)` token.
pub fn write_css_url(out: &mut String, s: &str) {
    for c in s.chars() {
        if is_css_url_special(c) {
            out.push('\\');
        }
        out.push(c);
    }
}

fn is_css_url_special(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\'' | '"' | '\\' | ' ' | '(' | ')' | ',')
}

// ============================================================================
// JavaScript
// ============================================================================

/// Encodes `s` as a double-quoted JavaScript string literal.
///
/// Besides the quote and backslash, the characters `'`, `<`, `>`, `&` and `=`
/// are written as octal escapes so the literal is also safe inside an HTML
/// `<script>` element or an event-handler attribute. Line terminators and
/// other control characters are escaped.
///
/// ```rust
/// use markweave_escape::javascript_string;
///
/// assert_eq!(
///     javascript_string("foo < > ' \""),
///     r#""foo \074 \076 \047 \042""#
/// );
/// ```
pub fn javascript_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_javascript_string(&mut out, s);
    out
}

/// Appends `s` to `out` as a double-quoted JavaScript string literal.
pub fn write_javascript_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\047"),
            '"' => out.push_str("\\042"),
            '<' => out.push_str("\\074"),
            '>' => out.push_str("\\076"),
            '&' => out.push_str("\\046"),
            '=' => out.push_str("\\075"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\x7f' || c == '\u{2028}' || c == '\u{2029}' => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

// ============================================================================
// Numbers
// ============================================================================

/// Formats a number as locale-independent decimal text.
///
/// The output is identical for every dialect: no grouping separators, `.` as
/// the decimal point, and no exponent for values `Display` prints in full.
///
/// ```rust
/// use markweave_escape::number;
///
/// assert_eq!(number(12345678), "12345678");
/// assert_eq!(number(-8), "-8");
/// assert_eq!(number(2.5f64), "2.5");
/// ```
pub fn number<N: fmt::Display>(value: N) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}

/// Appends the decimal text of `value` to `out`.
pub fn write_number<N: fmt::Display>(out: &mut String, value: N) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{}", value);
}

// ============================================================================
// Internals
// ============================================================================

fn replace_chars(s: &str, replacement: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    match s.char_indices().find(|(_, c)| replacement(*c).is_some()) {
        None => Cow::Borrowed(s),
        Some((first, _)) => {
            let mut out = String::with_capacity(s.len() + 16);
            out.push_str(&s[..first]);
            push_replaced(&mut out, &s[first..], replacement);
            Cow::Owned(out)
        }
    }
}

fn push_replaced(out: &mut String, s: &str, replacement: fn(char) -> Option<&'static str>) {
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if let Some(rep) = replacement(c) {
            out.push_str(&s[start..i]);
            out.push_str(rep);
            start = i + c.len_utf8();
        }
    }
    out.push_str(&s[start..]);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn unescape_html(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn html_output_has_no_raw_metacharacters(s in any::<String>()) {
            let escaped = html(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }

        #[test]
        fn html_is_reversible(s in any::<String>()) {
            prop_assert_eq!(unescape_html(&html(&s)), s);
        }

        #[test]
        fn html_preserves_apostrophes(s in "[a-z' ]{0,40}") {
            prop_assert_eq!(html(&s).matches('\'').count(), s.matches('\'').count());
        }

        #[test]
        fn write_html_matches_html(s in any::<String>()) {
            let mut out = String::new();
            write_html(&mut out, &s);
            prop_assert_eq!(out, html(&s).into_owned());
        }

        #[test]
        fn javascript_literal_never_breaks_out(s in any::<String>()) {
            let lit = javascript_string(&s);
            let inner = &lit[1..lit.len() - 1];
            prop_assert!(!inner.contains('<'));
            prop_assert!(!inner.contains('\''));
            prop_assert!(!inner.contains('\n'));
            // Every quote inside the literal is part of an escape.
            prop_assert!(!inner.contains('"'));
        }

        #[test]
        fn css_url_body_never_ends_token(s in any::<String>()) {
            let body = css_url(&s);
            let mut chars = body.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    // The escaped character follows.
                    prop_assert!(chars.next().is_some());
                } else {
                    prop_assert!(!is_css_url_special(c), "unescaped {:?} in {:?}", c, body);
                }
            }
        }

        #[test]
        fn css_url_body_unescapes_to_input(s in any::<String>()) {
            let body = css_url(&s);
            let mut decoded = String::with_capacity(s.len());
            let mut chars = body.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        decoded.push(next);
                    }
                } else {
                    decoded.push(c);
                }
            }
            prop_assert_eq!(decoded, s);
        }

        #[test]
        fn css_literal_never_closes_style(s in any::<String>()) {
            let lit = css_string(&s);
            prop_assert!(!lit.contains('<'));
            prop_assert!(!lit.contains('\n'));
        }
    }
}
