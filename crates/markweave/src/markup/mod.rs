//! Serialization details that differ between SGML and XML output.
//!
//! Generated template code calls these helpers at the points where the two
//! syntaxes diverge: the doctype and XML declaration, the `xmlns` attribute of
//! the root element, and the end of void elements.
//!
//! ```rust
//! use markweave::markup::{self, DocType, XHTML_NAMESPACE};
//! use markweave::{AttrBundle, Html, OutputBuffer, RenderContext};
//!
//! let ctx = RenderContext::xml();
//! let mut out = OutputBuffer::new();
//! markup::write_root_start(
//!     &mut out,
//!     &ctx,
//!     &DocType::STRICT,
//!     "html",
//!     XHTML_NAMESPACE,
//!     &AttrBundle::<Html>::empty(),
//! )
//! .unwrap();
//! markup::write_void_tag(&mut out, &ctx, "br", &AttrBundle::empty()).unwrap();
//! assert!(out.as_str().ends_with("<html xmlns=\"http://www.w3.org/1999/xhtml\"><br />"));
//! ```

mod doctype;

pub use doctype::{DocType, ExternalId};

use crate::attrs::AttrBundle;
use crate::buffer::OutputBuffer;
use crate::content::Html;
use crate::context::RenderContext;
use crate::error::Result;

/// Namespace of XHTML elements.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Terminator of a void element: `" />"` with XML syntax, `">"` otherwise.
pub fn void_end(ctx: &RenderContext) -> &'static str {
    if ctx.is_using_xml_syntax() {
        " />"
    } else {
        ">"
    }
}

/// Writes ` xmlns="uri"` (or ` xmlns:prefix="uri"`) with XML syntax; writes
/// nothing with SGML syntax.
pub fn write_xmlns(out: &mut OutputBuffer, ctx: &RenderContext, uri: &str, prefix: Option<&str>) {
    if !ctx.is_using_xml_syntax() {
        return;
    }
    out.push_str(" xmlns");
    if let Some(prefix) = prefix {
        out.push(':').push_str(prefix);
    }
    out.push_str("=\"");
    markweave_escape::write_html(out.raw_mut(), uri);
    out.push('"');
}

/// Writes `<name` followed by the attributes and `>`.
pub fn write_start_tag(
    out: &mut OutputBuffer,
    ctx: &RenderContext,
    name: &str,
    attrs: &AttrBundle<Html>,
) -> Result<()> {
    out.push('<').push_str(name);
    attrs.write(out, ctx)?;
    out.push('>');
    Ok(())
}

/// Writes a void element such as `<br>` / `<br />`.
pub fn write_void_tag(
    out: &mut OutputBuffer,
    ctx: &RenderContext,
    name: &str,
    attrs: &AttrBundle<Html>,
) -> Result<()> {
    out.push('<').push_str(name);
    attrs.write(out, ctx)?;
    out.push_str(void_end(ctx));
    Ok(())
}

/// Writes `</name>`.
pub fn write_end_tag(out: &mut OutputBuffer, name: &str) {
    out.push_str("</").push_str(name).push('>');
}

/// Writes the doctype and the start tag of a document's root element.
///
/// With XML syntax the start tag carries `xmlns="namespace"`.
pub fn write_root_start(
    out: &mut OutputBuffer,
    ctx: &RenderContext,
    doctype: &DocType,
    name: &str,
    namespace: &str,
    attrs: &AttrBundle<Html>,
) -> Result<()> {
    doctype.write(out, ctx, name)?;
    out.push('<').push_str(name);
    write_xmlns(out, ctx, namespace, None);
    attrs.write(out, ctx)?;
    out.push('>');
    Ok(())
}
