//! Content-type tags.
//!
//! Each output dialect is an uninhabited marker type implementing
//! [`ContentType`]. Closures, attribute bundles and templates carry their
//! dialect as a type parameter, so content built for one dialect cannot be
//! rendered as another: the mismatch is a compile error, not a runtime check.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// An output dialect.
///
/// Sealed: the set of dialects is fixed.
pub trait ContentType: sealed::Sealed + Debug + Copy + Send + Sync + 'static {
    /// Short human-readable name, used in diagnostics.
    const NAME: &'static str;
    /// MIME type of the dialect.
    const MIME: &'static str;
}

/// HTML markup, serialized as SGML or XML depending on the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Html {}

/// Cascading style sheet source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Css {}

/// JavaScript source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Javascript {}

/// Raw text with no metacharacters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plaintext {}

macro_rules! content_type {
    ($ty:ty, $name:literal, $mime:literal) => {
        impl sealed::Sealed for $ty {}

        impl ContentType for $ty {
            const NAME: &'static str = $name;
            const MIME: &'static str = $mime;
        }
    };
}

content_type!(Html, "html", "text/html");
content_type!(Css, "css", "text/css");
content_type!(Javascript, "javascript", "text/javascript");
content_type!(Plaintext, "plaintext", "text/plain");
