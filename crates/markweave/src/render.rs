//! The seam between values and typed output streams.
//!
//! [`Render<C>`] means "this value can be written into a `C` stream". Each
//! implementation applies the one encoder that is correct for its pair of
//! value and dialect, so escaping happens exactly once, where data enters a
//! typed stream.
//!
//! | Value | Html | Plaintext | Css | Javascript |
//! |-------|------|-----------|-----|------------|
//! | integers, finite floats | decimal | decimal | decimal | decimal |
//! | `str`, `String`, `char` | entity-escaped | verbatim | CSS string literal | JS string literal |
//! | `bool` | - | - | - | `true` / `false` |
//! | [`serde_json::Value`], [`Json`] | - | - | - | JSON literal |
//! | [`CssUrl`] | - | - | escaped `url(...)` body | - |
//! | `Option<T>` | `T`, or an error when `None` | same | same | same |
//!
//! Pairs left blank have no implementation; writing e.g. a `bool` into HTML is
//! a compile error.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

use crate::buffer::OutputBuffer;
use crate::closure::Closure;
use crate::content::{ContentType, Css, Html, Javascript, Plaintext};
use crate::context::RenderContext;
use crate::error::{RenderError, Result};

/// A value that can be written into a stream of dialect `C`.
pub trait Render<C: ContentType> {
    /// Writes `self`, encoded for `C`, into `out`.
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()>;
}

// ============================================================================
// Closures
// ============================================================================

impl<C: ContentType> Render<C> for Closure<C> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        self.write(out, ctx)
    }
}

impl Render<Html> for Closure<Plaintext> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        let text = ctx.get_string(|buf, ctx| self.write(buf, ctx))?;
        markweave_escape::write_html(out.raw_mut(), &text);
        Ok(())
    }
}

impl Render<Html> for Closure<Css> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        out.push_str("<style type=\"text/css\">\n");
        self.write(out, ctx)?;
        out.push_str("\n</style>");
        Ok(())
    }
}

impl Render<Html> for Closure<Javascript> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        out.push_str("<script type=\"text/javascript\">\n");
        self.write(out, ctx)?;
        out.push_str("\n</script>");
        Ok(())
    }
}

// ============================================================================
// Numbers
// ============================================================================

macro_rules! render_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<C: ContentType> Render<C> for $ty {
                fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
                    markweave_escape::write_number(out.raw_mut(), self);
                    Ok(())
                }
            }
        )*
    };
}

render_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! render_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<C: ContentType> Render<C> for $ty {
                fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
                    if !self.is_finite() {
                        tracing::debug!(
                            value = %self,
                            content_type = C::NAME,
                            "rejecting non-finite number"
                        );
                        return Err(RenderError::InvalidArgument(format!(
                            "{} has no {} representation",
                            self,
                            C::NAME
                        )));
                    }
                    markweave_escape::write_number(out.raw_mut(), self);
                    Ok(())
                }
            }
        )*
    };
}

render_float!(f32, f64);

// ============================================================================
// Strings
// ============================================================================

impl Render<Html> for str {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        markweave_escape::write_html(out.raw_mut(), self);
        Ok(())
    }
}

impl Render<Plaintext> for str {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        markweave_escape::write_plaintext(out.raw_mut(), self);
        Ok(())
    }
}

impl Render<Css> for str {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        markweave_escape::write_css_string(out.raw_mut(), self);
        Ok(())
    }
}

impl Render<Javascript> for str {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        markweave_escape::write_javascript_string(out.raw_mut(), self);
        Ok(())
    }
}

impl<C: ContentType> Render<C> for String
where
    str: Render<C>,
{
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        Render::<C>::render(self.as_str(), out, ctx)
    }
}

impl<C: ContentType> Render<C> for Cow<'_, str>
where
    str: Render<C>,
{
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        Render::<C>::render(self.as_ref(), out, ctx)
    }
}

impl<C: ContentType> Render<C> for char
where
    str: Render<C>,
{
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        let mut buf = [0u8; 4];
        Render::<C>::render(&*self.encode_utf8(&mut buf), out, ctx)
    }
}

/// A string written as the body of a CSS `url(...)`.
///
/// ```rust
/// use markweave::{Css, CssUrl, Render, RenderContext};
///
/// let ctx = RenderContext::sgml();
/// let s = ctx
///     .get_string(|out, ctx| Render::<Css>::render(&CssUrl("a b.png"), out, ctx))
///     .unwrap();
/// assert_eq!(s, "a\\ b.png");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssUrl<'a>(pub &'a str);

impl Render<Css> for CssUrl<'_> {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        markweave_escape::write_css_url(out.raw_mut(), self.0);
        Ok(())
    }
}

// ============================================================================
// JavaScript literals
// ============================================================================

impl Render<Javascript> for bool {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        out.push_str(if *self { "true" } else { "false" });
        Ok(())
    }
}

/// Serializes any `Serialize` value as a JSON literal in script output.
///
/// `<`, `>` and `&` inside strings are written as `\u` escapes so the
/// literal cannot close an enclosing `<script>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize> Render<Javascript> for Json<T> {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        let json = serde_json::to_string(&self.0).map_err(|e| {
            tracing::debug!(error = %e, "value cannot be serialized as JSON");
            RenderError::InvalidArgument(format!("value cannot be serialized as JSON: {}", e))
        })?;
        write_script_safe_json(out, &json);
        Ok(())
    }
}

impl Render<Javascript> for serde_json::Value {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        Json(self).render(out, ctx)
    }
}

// Only string contents of serialized JSON can hold these characters.
fn write_script_safe_json(out: &mut OutputBuffer, json: &str) {
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        };
    }
}

// ============================================================================
// Wrappers
// ============================================================================

impl<C: ContentType, T: Render<C>> Render<C> for Option<T> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        match self {
            Some(value) => value.render(out, ctx),
            None => {
                tracing::debug!(content_type = C::NAME, "missing value");
                Err(RenderError::InvalidArgument(format!(
                    "missing value for {} output",
                    C::NAME
                )))
            }
        }
    }
}

impl<C: ContentType, T: Render<C> + ?Sized> Render<C> for &T {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        (**self).render(out, ctx)
    }
}

impl<C: ContentType, T: Render<C> + ?Sized> Render<C> for Box<T> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        (**self).render(out, ctx)
    }
}

impl<C: ContentType, T: Render<C> + ?Sized> Render<C> for Arc<T> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        (**self).render(out, ctx)
    }
}

impl<C: ContentType, T: Render<C> + ?Sized> Render<C> for Rc<T> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        (**self).render(out, ctx)
    }
}
