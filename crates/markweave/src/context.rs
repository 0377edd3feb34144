//! Per-render serialization settings.
//!
//! A [`RenderContext`] is built once per top-level render and passed, by
//! reference and unchanged, to every nested render call. It carries the one
//! decision that changes serialized bytes without changing the logical
//! document: whether markup is written as SGML-style HTML or as strict XML.
//!
//! # Where the mode matters
//!
//! | Decision point | SGML | XML |
//! |----------------|------|-----|
//! | boolean attribute | ` checked` | ` checked="checked"` |
//! | void element end | `>` | ` />` |
//! | prolog | none | `<?xml version="1.0" ?>` before a doctype |
//! | doctype | SGML ids, upper-case root | XML ids |
//! | `xmlns` on the root element | omitted | emitted |
//!
//! # Configuration
//!
//! Contexts can be read from YAML, which is convenient when the mode comes
//! from application settings:
//!
//! ```rust
//! use markweave::{RenderContext, SyntaxMode};
//!
//! let ctx = RenderContext::from_yaml("syntax: xml").unwrap();
//! assert!(ctx.is_using_xml_syntax());
//! assert_eq!(RenderContext::default().syntax(), SyntaxMode::Sgml);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::OutputBuffer;
use crate::closure::Closure;
use crate::content::ContentType;
use crate::error::{RenderError, Result};

/// Markup serialization dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxMode {
    /// SGML-style HTML: minimized boolean attributes, `>`-terminated void
    /// elements, no XML prolog.
    #[default]
    Sgml,
    /// Strict XML/XHTML.
    Xml,
}

impl SyntaxMode {
    /// Returns `true` for [`SyntaxMode::Xml`].
    pub fn is_xml(self) -> bool {
        self == SyntaxMode::Xml
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxMode::Sgml => f.write_str("sgml"),
            SyntaxMode::Xml => f.write_str("xml"),
        }
    }
}

impl FromStr for SyntaxMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sgml" | "html" => Ok(SyntaxMode::Sgml),
            "xml" | "xhtml" => Ok(SyntaxMode::Xml),
            other => Err(RenderError::Configuration(format!(
                "unknown syntax mode '{}' (expected 'sgml' or 'xml')",
                other
            ))),
        }
    }
}

/// Immutable settings shared by every render call of one top-level render.
///
/// # Example
///
/// ```rust
/// use markweave::{OutputBuffer, RenderContext};
///
/// let ctx = RenderContext::xml();
/// let s = ctx
///     .get_string(|out, ctx| {
///         out.push_str(if ctx.is_using_xml_syntax() { "<br />" } else { "<br>" });
///         Ok(())
///     })
///     .unwrap();
/// assert_eq!(s, "<br />");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default)]
    syntax: SyntaxMode,
}

impl RenderContext {
    /// Creates a context; `xml_syntax` selects XML serialization.
    pub fn new(xml_syntax: bool) -> Self {
        Self::with_syntax(if xml_syntax {
            SyntaxMode::Xml
        } else {
            SyntaxMode::Sgml
        })
    }

    /// Creates a context for the given serialization mode.
    pub fn with_syntax(syntax: SyntaxMode) -> Self {
        Self { syntax }
    }

    /// SGML-style HTML context.
    pub fn sgml() -> Self {
        Self::with_syntax(SyntaxMode::Sgml)
    }

    /// XML/XHTML context.
    pub fn xml() -> Self {
        Self::with_syntax(SyntaxMode::Xml)
    }

    /// Parses a context from YAML (`syntax: xml` or `syntax: sgml`).
    ///
    /// A missing `syntax` key selects SGML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RenderError::Configuration(format!("invalid render context: {}", e)))
    }

    /// The serialization mode.
    pub fn syntax(&self) -> SyntaxMode {
        self.syntax
    }

    /// Returns `true` if markup must be written as strict XML.
    pub fn is_using_xml_syntax(&self) -> bool {
        self.syntax.is_xml()
    }

    /// Runs `render` against a fresh buffer and returns what it wrote.
    ///
    /// Used to materialize a nested render as a value, such as a computed
    /// attribute.
    pub fn get_string<F>(&self, render: F) -> Result<String>
    where
        F: FnOnce(&mut OutputBuffer, &RenderContext) -> Result<()>,
    {
        let mut out = OutputBuffer::new();
        render(&mut out, self)?;
        Ok(out.into_string())
    }

    /// Returns `true` if `closure` is absent or renders only whitespace.
    pub fn is_empty_or_whitespace<C: ContentType>(
        &self,
        closure: Option<&Closure<C>>,
    ) -> Result<bool> {
        match closure {
            None => Ok(true),
            Some(closure) => {
                let s = self.get_string(|out, ctx| closure.write(out, ctx))?;
                Ok(s.chars().all(char::is_whitespace))
            }
        }
    }
}
