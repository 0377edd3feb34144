use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::value::SharedContent;
use crate::buffer::OutputBuffer;
use crate::content::ContentType;
use crate::context::RenderContext;
use crate::error::Result;
use crate::render::Render;

/// An immutable, ordered attribute list for a `C` stream.
///
/// Renders every named attribute as ` name="value"` in insertion order, then
/// every boolean attribute: ` name` with SGML syntax, ` name="name"` with XML
/// syntax. Values are encoded for `C` when the bundle renders.
pub struct AttrBundle<C: ContentType> {
    attrs: IndexMap<String, SharedContent<C>>,
    booleans: IndexSet<String>,
}

impl<C: ContentType> AttrBundle<C> {
    pub(crate) fn new(
        attrs: IndexMap<String, SharedContent<C>>,
        booleans: IndexSet<String>,
    ) -> Self {
        Self { attrs, booleans }
    }

    /// A bundle with no attributes.
    pub fn empty() -> Self {
        Self::new(IndexMap::new(), IndexSet::new())
    }

    /// Names of the named attributes, in render order.
    pub fn attrs(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Names of the boolean attributes that are on, in render order.
    pub fn boolean_attrs(&self) -> impl Iterator<Item = &str> {
        self.booleans.iter().map(String::as_str)
    }

    /// Returns `true` if `name` is set, as a named or a boolean attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name) || self.booleans.contains(name)
    }

    /// Number of attributes of both kinds.
    pub fn len(&self) -> usize {
        self.attrs.len() + self.booleans.len()
    }

    /// Returns `true` if the bundle renders nothing.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.booleans.is_empty()
    }

    /// Writes the attribute list into `out`.
    pub fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        for (name, value) in &self.attrs {
            out.push(' ').push_str(name).push_str("=\"");
            Render::<C>::render(&**value, out, ctx)?;
            out.push('"');
        }
        let xml = ctx.is_using_xml_syntax();
        for name in &self.booleans {
            out.push(' ').push_str(name);
            if xml {
                out.push_str("=\"").push_str(name).push('"');
            }
        }
        Ok(())
    }

    /// Renders the attribute list into a new string.
    pub fn render_to_string(&self, ctx: &RenderContext) -> Result<String> {
        ctx.get_string(|out, ctx| self.write(out, ctx))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &SharedContent<C>)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<C: ContentType> Render<C> for AttrBundle<C> {
    fn render(&self, out: &mut OutputBuffer, ctx: &RenderContext) -> Result<()> {
        self.write(out, ctx)
    }
}

impl<C: ContentType> Clone for AttrBundle<C> {
    fn clone(&self) -> Self {
        Self::new(self.attrs.clone(), self.booleans.clone())
    }
}

impl<C: ContentType> Default for AttrBundle<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: ContentType> fmt::Debug for AttrBundle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrBundle")
            .field("content_type", &C::NAME)
            .field("attrs", &self.attrs.keys().collect::<Vec<_>>())
            .field("booleans", &self.booleans)
            .finish()
    }
}
