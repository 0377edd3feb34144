//! Values accepted by [`AttrBundleBuilder::attr`](super::AttrBundleBuilder::attr).

use std::fmt;
use std::sync::Arc;

use crate::closure::Closure;
use crate::content::ContentType;
use crate::render::Render;

/// Shared, renderable attribute content.
pub type SharedContent<C> = Arc<dyn Render<C> + Send + Sync>;

/// An attribute value bound for a `C` stream.
///
/// Boolean values toggle a boolean attribute; everything else is content that
/// is encoded for `C` when the bundle renders.
pub enum AttrValue<C: ContentType> {
    /// Turns a boolean attribute on (`true`) or leaves it off (`false`).
    Flag(bool),
    /// A named attribute's value.
    Content(SharedContent<C>),
}

impl<C: ContentType> AttrValue<C> {
    /// Wraps any value renderable as `C`.
    pub fn content<T>(value: T) -> Self
    where
        T: Render<C> + Send + Sync + 'static,
    {
        AttrValue::Content(Arc::new(value))
    }
}

impl<C: ContentType> Clone for AttrValue<C> {
    fn clone(&self) -> Self {
        match self {
            AttrValue::Flag(on) => AttrValue::Flag(*on),
            AttrValue::Content(content) => AttrValue::Content(Arc::clone(content)),
        }
    }
}

impl<C: ContentType> fmt::Debug for AttrValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag(on) => f.debug_tuple("Flag").field(on).finish(),
            AttrValue::Content(_) => f.write_str("Content(..)"),
        }
    }
}

impl<C: ContentType> From<bool> for AttrValue<C> {
    fn from(on: bool) -> Self {
        AttrValue::Flag(on)
    }
}

macro_rules! attr_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<C: ContentType> From<$ty> for AttrValue<C>
            where
                $ty: Render<C>,
            {
                fn from(value: $ty) -> Self {
                    AttrValue::content(value)
                }
            }
        )*
    };
}

attr_value_from!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
);

impl<C: ContentType> From<&str> for AttrValue<C>
where
    String: Render<C>,
{
    fn from(value: &str) -> Self {
        AttrValue::content(value.to_owned())
    }
}

impl<C, S> From<Closure<S>> for AttrValue<C>
where
    C: ContentType,
    S: ContentType,
    Closure<S>: Render<C>,
{
    fn from(closure: Closure<S>) -> Self {
        AttrValue::content(closure)
    }
}

impl<C, T> From<Option<T>> for AttrValue<C>
where
    C: ContentType,
    T: Render<C> + Send + Sync + 'static,
{
    fn from(value: Option<T>) -> Self {
        AttrValue::content(value)
    }
}
