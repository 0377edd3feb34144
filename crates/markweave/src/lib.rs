//! # Markweave - Content-Type-Safe Markup Composition
//!
//! `markweave` is the runtime for compiled HTML templates. It composes
//! fragments of HTML, CSS, JavaScript and plain text while keeping track of
//! which dialect each fragment is in, so every value is escaped exactly once,
//! by the encoder of the stream it ends up in.
//!
//! ## Core Concepts
//!
//! - [`Closure`]: a deferred fragment tagged with its dialect ([`Html`],
//!   [`Css`], [`Javascript`] or [`Plaintext`])
//! - [`Render`]: "this value can be written into a `C` stream", implemented
//!   per value kind with the right encoder
//! - [`OutputBuffer`]: the append-only sink one render writes into
//! - [`RenderContext`]: SGML or XML serialization for one render
//! - [`AttrBundleBuilder`] / [`AttrBundle`]: ordered element attributes
//! - [`for_each`]: loop helper that flags the first iteration
//! - [`markup`]: doctypes, `xmlns` and void elements
//! - [`Template`]: entry points implemented by generated code
//!
//! ## Quick Start
//!
//! ```rust
//! use markweave::{AttrBundleBuilder, Closure, Css, Html, Render, RenderContext};
//! use markweave::markup;
//!
//! let style = Closure::<Css>::from_css("img { border: 0 }");
//! let attrs = AttrBundleBuilder::<Html>::new()
//!     .attr("alt", "Tom & Jerry")
//!     .attr("ismap", true)
//!     .build();
//!
//! let page = Closure::<Html>::new(move |out, ctx| {
//!     Render::<Html>::render(&style, out, ctx)?;
//!     markup::write_void_tag(out, ctx, "img", &attrs)
//! });
//!
//! assert_eq!(
//!     page.render_to_string(&RenderContext::sgml()).unwrap(),
//!     "<style type=\"text/css\">\nimg { border: 0 }\n</style><img alt=\"Tom &amp; Jerry\" ismap>"
//! );
//! assert!(page
//!     .render_to_string(&RenderContext::xml())
//!     .unwrap()
//!     .ends_with("ismap=\"ismap\" />"));
//! ```
//!
//! ## Errors
//!
//! Every render returns [`Result`]. A failed render leaves partial output in
//! the buffer; clear it before reusing the buffer. Errors raised by caller
//! code inside a closure travel back unchanged as
//! [`RenderError::Application`].
//!
//! The encoders themselves live in the `markweave-escape` crate and are
//! re-exported as [`escape`].

// Internal modules
mod attrs;
mod buffer;
mod closure;
mod color;
mod content;
mod context;
mod error;
mod iteration;
pub mod markup;
pub mod prelude;
mod render;
mod template;

pub use markweave_escape as escape;

// Error type
pub use error::{RenderError, Result};

// Output
pub use buffer::OutputBuffer;
pub use context::{RenderContext, SyntaxMode};

// Content types and composition
pub use closure::Closure;
pub use content::{ContentType, Css, Html, Javascript, Plaintext};
pub use render::{CssUrl, Json, Render};
pub use template::Template;

// Attributes
pub use attrs::{AttrBundle, AttrBundleBuilder, AttrValue};

// Values and helpers
pub use color::Color;
pub use iteration::{for_each, Iterable};
pub use markup::DocType;
