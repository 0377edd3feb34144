use indexmap::{IndexMap, IndexSet};

use super::bundle::AttrBundle;
use super::value::{AttrValue, SharedContent};
use crate::content::ContentType;

/// Collects the attributes of one element.
///
/// Named attributes keep the position of their first insertion; setting the
/// same name again replaces the value in place. Boolean attributes are kept
/// in a separate ordered set and always render after the named ones.
///
/// Methods consume and return the builder so calls chain.
pub struct AttrBundleBuilder<C: ContentType> {
    allowed: Option<IndexSet<String>>,
    attrs: IndexMap<String, SharedContent<C>>,
    booleans: IndexSet<String>,
}

impl<C: ContentType> AttrBundleBuilder<C> {
    /// Creates a builder that accepts every attribute from merged bundles.
    pub fn new() -> Self {
        Self {
            allowed: None,
            attrs: IndexMap::new(),
            booleans: IndexSet::new(),
        }
    }

    /// Creates a builder that only accepts `names` from merged bundles.
    ///
    /// The allow-list applies to [`add_bundle`](Self::add_bundle). Attributes
    /// set directly with [`attr`](Self::attr) are not filtered.
    pub fn with_allowed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: Some(names.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }

    /// Returns `true` if `name` may be merged in from another bundle.
    pub fn include_attr(&self, name: &str) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |allowed| allowed.contains(name))
    }

    /// Sets an attribute.
    ///
    /// A `true` flag turns the boolean attribute `name` on; a `false` flag is
    /// ignored. Any other value is stored as the named attribute's value.
    pub fn attr(self, name: impl Into<String>, value: impl Into<AttrValue<C>>) -> Self {
        self.set(name.into(), value.into())
    }

    /// Sets an attribute when `condition` holds; otherwise does nothing.
    pub fn attr_if(
        self,
        name: impl Into<String>,
        value: impl Into<AttrValue<C>>,
        condition: bool,
    ) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Merges the attributes of `other` that pass [`include_attr`](Self::include_attr).
    ///
    /// `other` is left untouched. Merged named attributes override values
    /// already set under the same name.
    pub fn add_bundle(mut self, other: &AttrBundle<C>) -> Self {
        for (name, value) in other.entries() {
            if self.include_attr(name) {
                self.attrs.insert(name.to_owned(), value.clone());
            } else {
                tracing::trace!(attr = %name, "attribute not in allow-list, skipped");
            }
        }
        for name in other.boolean_attrs() {
            if self.include_attr(name) {
                self.booleans.insert(name.to_owned());
            } else {
                tracing::trace!(attr = %name, "boolean attribute not in allow-list, skipped");
            }
        }
        self
    }

    /// Snapshots the current attributes into a bundle.
    ///
    /// The builder is not modified, so building twice yields bundles that
    /// render identically.
    pub fn build(&self) -> AttrBundle<C> {
        tracing::trace!(
            content_type = C::NAME,
            attrs = self.attrs.len(),
            booleans = self.booleans.len(),
            "building attribute bundle"
        );
        AttrBundle::new(self.attrs.clone(), self.booleans.clone())
    }

    fn set(mut self, name: String, value: AttrValue<C>) -> Self {
        match value {
            AttrValue::Flag(true) => {
                self.booleans.insert(name);
            }
            AttrValue::Flag(false) => {}
            AttrValue::Content(content) => {
                self.attrs.insert(name, content);
            }
        }
        self
    }
}

impl<C: ContentType> Default for AttrBundleBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
