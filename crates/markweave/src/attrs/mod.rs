//! Element attribute assembly.
//!
//! An [`AttrBundleBuilder`] collects the attributes of one element: named
//! attributes with values, and boolean attributes that are either present or
//! absent. [`build`](AttrBundleBuilder::build) freezes the builder's state into
//! an [`AttrBundle`], which renders as the attribute list of a start tag.
//!
//! Bundles compose. A template that declares a bundle of attributes it accepts
//! builds its own bundle, then merges the caller's bundle with
//! [`add_bundle`](AttrBundleBuilder::add_bundle). An allow-list fixed at
//! construction controls which of the caller's attributes get through.
//!
//! # Example
//!
//! ```rust
//! use markweave::{AttrBundleBuilder, Html, RenderContext};
//!
//! let caller = AttrBundleBuilder::<Html>::new()
//!     .attr("class", "wide")
//!     .attr("style", "color: red")
//!     .build();
//!
//! let bundle = AttrBundleBuilder::<Html>::with_allowed(["id", "class"])
//!     .attr("id", "main")
//!     .attr("hidden", true)
//!     .add_bundle(&caller)
//!     .build();
//!
//! assert_eq!(
//!     bundle.render_to_string(&RenderContext::sgml()).unwrap(),
//!     " id=\"main\" class=\"wide\" hidden"
//! );
//! assert_eq!(
//!     bundle.render_to_string(&RenderContext::xml()).unwrap(),
//!     " id=\"main\" class=\"wide\" hidden=\"hidden\""
//! );
//! ```

mod builder;
mod bundle;
mod value;

pub use builder::AttrBundleBuilder;
pub use bundle::AttrBundle;
pub use value::AttrValue;
