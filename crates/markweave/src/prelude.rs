//! Prelude for generated template code.
//!
//! ```rust
//! use markweave::prelude::*;
//!
//! let c = Closure::<Html>::from_plaintext("a < b");
//! assert_eq!(c.render_to_string(&RenderContext::sgml()).unwrap(), "a &lt; b");
//! ```

// Rendering
pub use crate::{Closure, OutputBuffer, Render, RenderContext, RenderError, Result, Template};

// Content types
pub use crate::{ContentType, Css, Html, Javascript, Plaintext};

// Attributes, loops and markup
pub use crate::markup::{self, DocType};
pub use crate::{for_each, AttrBundle, AttrBundleBuilder};
