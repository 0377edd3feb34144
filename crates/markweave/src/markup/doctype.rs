use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::buffer::OutputBuffer;
use crate::context::RenderContext;
use crate::error::{RenderError, Result};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" ?>\n";

/// The public and system identifiers of a document type definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalId {
    public: Option<Cow<'static, str>>,
    system: Cow<'static, str>,
}

impl ExternalId {
    /// An identifier with both a public and a system id.
    pub fn public(
        public: impl Into<Cow<'static, str>>,
        system: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            public: Some(public.into()),
            system: system.into(),
        }
    }

    /// An identifier with only a system id.
    pub fn system(system: impl Into<Cow<'static, str>>) -> Self {
        Self {
            public: None,
            system: system.into(),
        }
    }

    /// The public id, if any.
    pub fn public_id(&self) -> Option<&str> {
        self.public.as_deref()
    }

    /// The system id.
    pub fn system_id(&self) -> &str {
        &self.system
    }

    fn write_declaration(&self, out: &mut OutputBuffer, root: &str) {
        out.push_str("<!DOCTYPE ").push_str(root);
        match &self.public {
            Some(public) => {
                out.push_str(" PUBLIC \"").push_str(public).push('"');
            }
            None => {
                out.push_str(" SYSTEM");
            }
        }
        out.push_str(" \"").push_str(&self.system).push_str("\">");
    }
}

/// A document type, with separate identifiers for XML and SGML output.
///
/// A doctype without identifiers for one of the two syntaxes cannot be
/// rendered in that syntax; trying to is a configuration error.
///
/// ```rust
/// use markweave::{DocType, OutputBuffer, RenderContext};
///
/// let mut out = OutputBuffer::new();
/// DocType::STRICT.write(&mut out, &RenderContext::sgml(), "html").unwrap();
/// assert_eq!(
///     out.as_str(),
///     "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
/// );
///
/// let err = DocType::MOBILE
///     .write(&mut OutputBuffer::new(), &RenderContext::sgml(), "html")
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Doctype 'mobile' incompatible with non-XML syntax");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocType {
    name: Cow<'static, str>,
    xml: Option<ExternalId>,
    sgml: Option<ExternalId>,
}

macro_rules! builtin_id {
    ($public:literal, $system:literal) => {
        Some(ExternalId {
            public: Some(Cow::Borrowed($public)),
            system: Cow::Borrowed($system),
        })
    };
}

impl DocType {
    /// HTML 4.01 Strict / XHTML 1.0 Strict.
    pub const STRICT: DocType = DocType {
        name: Cow::Borrowed("strict"),
        xml: builtin_id!(
            "-//W3C//DTD XHTML 1.0 Strict//EN",
            "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"
        ),
        sgml: builtin_id!(
            "-//W3C//DTD HTML 4.01//EN",
            "http://www.w3.org/TR/html4/strict.dtd"
        ),
    };

    /// HTML 4.01 Transitional / XHTML 1.0 Transitional.
    pub const TRANSITIONAL: DocType = DocType {
        name: Cow::Borrowed("transitional"),
        xml: builtin_id!(
            "-//W3C//DTD XHTML 1.0 Transitional//EN",
            "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"
        ),
        sgml: builtin_id!(
            "-//W3C//DTD HTML 4.01 Transitional//EN",
            "http://www.w3.org/TR/html4/loose.dtd"
        ),
    };

    /// HTML 4.01 Frameset / XHTML 1.0 Frameset.
    pub const FRAMESET: DocType = DocType {
        name: Cow::Borrowed("frameset"),
        xml: builtin_id!(
            "-//W3C//DTD XHTML 1.0 Frameset//EN",
            "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd"
        ),
        sgml: builtin_id!(
            "-//W3C//DTD HTML 4.01 Frameset//EN",
            "http://www.w3.org/TR/html4/frameset.dtd"
        ),
    };

    /// XHTML Mobile 1.0. XML only.
    pub const MOBILE: DocType = DocType {
        name: Cow::Borrowed("mobile"),
        xml: builtin_id!(
            "-//WAPFORUM//DTD XHTML Mobile 1.0//EN",
            "http://www.wapforum.org/DTD/xhtml-mobile10.dtd"
        ),
        sgml: None,
    };

    /// Built-in doctypes, looked up by [`FromStr`].
    pub const BUILTIN: [DocType; 4] = [
        DocType::STRICT,
        DocType::TRANSITIONAL,
        DocType::FRAMESET,
        DocType::MOBILE,
    ];

    /// Creates a doctype with no identifiers. Add them with
    /// [`with_xml`](Self::with_xml) and [`with_sgml`](Self::with_sgml).
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            xml: None,
            sgml: None,
        }
    }

    /// Sets the identifiers used with XML syntax.
    pub fn with_xml(mut self, id: ExternalId) -> Self {
        self.xml = Some(id);
        self
    }

    /// Sets the identifiers used with SGML syntax.
    pub fn with_sgml(mut self, id: ExternalId) -> Self {
        self.sgml = Some(id);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xml_id(&self) -> Option<&ExternalId> {
        self.xml.as_ref()
    }

    pub fn sgml_id(&self) -> Option<&ExternalId> {
        self.sgml.as_ref()
    }

    pub fn is_xml_compatible(&self) -> bool {
        self.xml.is_some()
    }

    pub fn is_sgml_compatible(&self) -> bool {
        self.sgml.is_some()
    }

    /// Writes the declaration for `root` in the context's syntax.
    ///
    /// XML output is preceded by the XML declaration. SGML output upper-cases
    /// the root element name.
    pub fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext, root: &str) -> Result<()> {
        tracing::trace!(doctype = %self.name, syntax = %ctx.syntax(), root, "writing doctype");
        if ctx.is_using_xml_syntax() {
            let id = self.xml.as_ref().ok_or_else(|| self.incompatible("XML"))?;
            out.push_str(XML_DECLARATION);
            id.write_declaration(out, root);
        } else {
            let id = self.sgml.as_ref().ok_or_else(|| self.incompatible("non-XML"))?;
            id.write_declaration(out, &root.to_uppercase());
        }
        Ok(())
    }

    fn incompatible(&self, syntax: &str) -> RenderError {
        let message = format!("Doctype '{}' incompatible with {} syntax", self.name, syntax);
        tracing::debug!(doctype = %self.name, "{}", message);
        RenderError::Configuration(message)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for DocType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        DocType::BUILTIN
            .into_iter()
            .find(|doctype| doctype.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RenderError::Configuration(format!("unknown doctype '{}'", wanted)))
    }
}
