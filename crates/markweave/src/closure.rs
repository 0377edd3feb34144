//! Deferred, content-type-tagged render units.
//!
//! A [`Closure<C>`] wraps a render function together with the dialect `C` it
//! produces. Closures are immutable and cheap to clone (the function is
//! shared), so one closure can be cached for static content and rendered any
//! number of times.
//!
//! A closure renders into its own dialect through [`Closure::write`]. Placing
//! it inside a different dialect goes through [`Render`](crate::Render), which
//! only exists for the combinations that have a defined embedding:
//!
//! | Closure | Into `Html` |
//! |---------|-------------|
//! | `Closure<Html>` | verbatim |
//! | `Closure<Plaintext>` | rendered to a string, HTML-encoded once |
//! | `Closure<Css>` | wrapped in `<style type="text/css">` |
//! | `Closure<Javascript>` | wrapped in `<script type="text/javascript">` |
//!
//! # Example
//!
//! ```rust
//! use markweave::{Closure, Css, Html, Render, RenderContext};
//!
//! let style = Closure::<Css>::from_css("p { color: red }");
//! let page = Closure::<Html>::new(move |out, ctx| {
//!     out.push_str("<head>");
//!     Render::<Html>::render(&style, out, ctx)?;
//!     out.push_str("</head>");
//!     Ok(())
//! });
//!
//! let html = page.render_to_string(&RenderContext::sgml()).unwrap();
//! assert_eq!(
//!     html,
//!     "<head><style type=\"text/css\">\np { color: red }\n</style></head>"
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use crate::buffer::OutputBuffer;
use crate::content::{ContentType, Css, Html, Javascript, Plaintext};
use crate::context::RenderContext;
use crate::error::Result;

type RenderFn = dyn Fn(&mut OutputBuffer, &RenderContext) -> Result<()> + Send + Sync;

/// A deferred unit of content in dialect `C`.
pub struct Closure<C: ContentType> {
    render: Arc<RenderFn>,
    _content: PhantomData<fn() -> C>,
}

impl<C: ContentType> Closure<C> {
    /// Creates a closure from a render function.
    ///
    /// The function writes content that is already valid `C`; whatever it
    /// appends reaches the output unchanged.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&mut OutputBuffer, &RenderContext) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            _content: PhantomData,
        }
    }

    /// A closure that writes nothing.
    pub fn empty() -> Self {
        Self::new(|_, _| Ok(()))
    }

    /// Renders this closure as `C` into `out`.
    ///
    /// Errors raised by the render function are returned as-is.
    pub fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        (self.render)(out, ctx)
    }

    /// Renders this closure into a new string.
    pub fn render_to_string(&self, ctx: &RenderContext) -> Result<String> {
        ctx.get_string(|out, ctx| self.write(out, ctx))
    }

    /// Renders each closure of `closures` in order.
    pub fn concat<I>(closures: I) -> Self
    where
        I: IntoIterator<Item = Closure<C>>,
    {
        let closures: Vec<Closure<C>> = closures.into_iter().collect();
        Self::new(move |out, ctx| {
            for closure in &closures {
                closure.write(out, ctx)?;
            }
            Ok(())
        })
    }

    /// A closure that appends the contents of the file at `path`, read each
    /// time the closure is rendered.
    ///
    /// The file is trusted `C` content and is not escaped.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(move |out, _| {
            let content = std::fs::read_to_string(&path)?;
            out.push_str(&content);
            Ok(())
        })
    }

    fn from_trusted(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::new(move |out, _| {
            out.push_str(&content);
            Ok(())
        })
    }
}

impl Closure<Html> {
    /// Trusted markup, emitted without escaping.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self::from_trusted(html)
    }

    /// Text that is HTML-encoded when rendered.
    pub fn from_plaintext(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |out, _| {
            markweave_escape::write_html(out.raw_mut(), &text);
            Ok(())
        })
    }
}

impl Closure<Css> {
    /// Trusted style sheet source, emitted verbatim.
    pub fn from_css(css: impl Into<String>) -> Self {
        Self::from_trusted(css)
    }
}

impl Closure<Javascript> {
    /// Trusted script source, emitted verbatim.
    pub fn from_javascript(js: impl Into<String>) -> Self {
        Self::from_trusted(js)
    }
}

impl Closure<Plaintext> {
    /// Raw text.
    pub fn from_plaintext(text: impl Into<String>) -> Self {
        Self::from_trusted(text)
    }
}

impl<C: ContentType> Clone for Closure<C> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
            _content: PhantomData,
        }
    }
}

impl<C: ContentType> Default for Closure<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: ContentType> fmt::Debug for Closure<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("content_type", &C::NAME)
            .finish_non_exhaustive()
    }
}
