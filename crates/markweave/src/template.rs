//! Entry points for compiled templates.
//!
//! Generated code implements [`Template`] once per template. Parameters bound
//! at construction live in the implementing struct; parameters supplied per
//! call are the associated [`Params`](Template::Params) type. A template with
//! no constructor parameters is a unit struct.
//!
//! ```rust
//! use markweave::{Html, OutputBuffer, Render, RenderContext, Result, Template};
//!
//! #[derive(Clone)]
//! struct Greeting {
//!     salutation: String,
//! }
//!
//! impl Template for Greeting {
//!     type Content = Html;
//!     type Params = String;
//!
//!     fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext, name: &String) -> Result<()> {
//!         out.push_str("<p>");
//!         Render::<Html>::render(&self.salutation, out, ctx)?;
//!         out.push_str(", ");
//!         Render::<Html>::render(name, out, ctx)?;
//!         out.push_str("</p>");
//!         Ok(())
//!     }
//! }
//!
//! let greeting = Greeting { salutation: "Hello".into() };
//! let closure = greeting.closure("<world>".to_string());
//! assert_eq!(
//!     closure.render_to_string(&RenderContext::sgml()).unwrap(),
//!     "<p>Hello, &lt;world&gt;</p>"
//! );
//! ```

use crate::buffer::OutputBuffer;
use crate::closure::Closure;
use crate::content::ContentType;
use crate::context::RenderContext;
use crate::error::Result;

/// A compiled template producing `Content`.
pub trait Template {
    /// Dialect of the template's output.
    type Content: ContentType;
    /// Per-call parameters.
    type Params;

    /// Renders the template directly into `out`.
    fn write(
        &self,
        out: &mut OutputBuffer,
        ctx: &RenderContext,
        params: &Self::Params,
    ) -> Result<()>;

    /// Binds `params` and returns the unrendered result.
    fn closure(&self, params: Self::Params) -> Closure<Self::Content>
    where
        Self: Clone + Send + Sync + 'static,
        Self::Params: Send + Sync + 'static,
    {
        let template = self.clone();
        Closure::new(move |out, ctx| template.write(out, ctx, &params))
    }

    /// Renders the template into a new string.
    fn render_to_string(&self, ctx: &RenderContext, params: &Self::Params) -> Result<String> {
        ctx.get_string(|out, ctx| self.write(out, ctx, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{AttrBundle, AttrBundleBuilder};
    use crate::content::{Css, Html};
    use crate::error::RenderError;
    use crate::markup;
    use crate::render::Render;

    #[derive(Clone, Copy)]
    struct Rule;

    impl Template for Rule {
        type Content = Css;
        type Params = ();

        fn write(&self, out: &mut OutputBuffer, _ctx: &RenderContext, _: &()) -> Result<()> {
            out.push_str("foo { font-size:10 }");
            Ok(())
        }
    }

    #[derive(Clone)]
    struct Image {
        attrs: AttrBundle<Html>,
    }

    impl Template for Image {
        type Content = Html;
        type Params = Option<String>;

        fn write(
            &self,
            out: &mut OutputBuffer,
            ctx: &RenderContext,
            id: &Option<String>,
        ) -> Result<()> {
            let attrs = AttrBundleBuilder::<Html>::with_allowed(["alt", "ismap"])
                .attr_if("id", id.clone(), id.is_some())
                .add_bundle(&self.attrs)
                .build();
            markup::write_void_tag(out, ctx, "img", &attrs)
        }
    }

    #[test]
    fn test_static_template_closure_embeds() {
        let style = Rule.closure(());
        let html = RenderContext::sgml()
            .get_string(|out, ctx| Render::<Html>::render(&style, out, ctx))
            .unwrap();
        assert_eq!(html, "<style type=\"text/css\">\nfoo { font-size:10 }\n</style>");
    }

    #[test]
    fn test_bound_template_write_and_closure_agree() {
        let image = Image {
            attrs: AttrBundleBuilder::<Html>::new()
                .attr("alt", "hello, world!")
                .attr("ismap", true)
                .attr("style", "border: 0")
                .build(),
        };
        let ctx = RenderContext::xml();
        let direct = image.render_to_string(&ctx, &Some("optionalId".into())).unwrap();
        let deferred = image
            .closure(Some("optionalId".into()))
            .render_to_string(&ctx)
            .unwrap();
        assert_eq!(direct, deferred);
        assert_eq!(
            direct,
            "<img id=\"optionalId\" alt=\"hello, world!\" ismap=\"ismap\" />"
        );
        assert_eq!(
            image.render_to_string(&RenderContext::sgml(), &None).unwrap(),
            "<img alt=\"hello, world!\" ismap>"
        );
    }

    #[derive(Clone, Copy)]
    struct Failing;

    impl Template for Failing {
        type Content = Html;
        type Params = ();

        fn write(&self, _: &mut OutputBuffer, _: &RenderContext, _: &()) -> Result<()> {
            Err(RenderError::application("backend unavailable"))
        }
    }

    #[test]
    fn test_closure_propagates_application_error() {
        let err = Failing.closure(()).render_to_string(&RenderContext::sgml()).unwrap_err();
        assert_eq!(err.to_string(), "backend unavailable");
    }
}
