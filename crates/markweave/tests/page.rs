//! Whole-page renders through the public API, in both serialization modes.

use markweave::markup::{self, XHTML_NAMESPACE};
use markweave::prelude::*;
use markweave::{Color, CssUrl};

/// A page whose output differs between SGML and XML syntax at every point
/// where the two can differ.
#[derive(Clone, Copy)]
struct SyntaxDifferences;

impl Template for SyntaxDifferences {
    type Content = Html;
    type Params = ();

    fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext, _: &()) -> Result<()> {
        markup::write_root_start(
            out,
            ctx,
            &DocType::STRICT,
            "html",
            XHTML_NAMESPACE,
            &AttrBundle::empty(),
        )?;

        let div = AttrBundleBuilder::<Html>::new().attr("id", "snarf").build();
        markup::write_start_tag(out, ctx, "div", &div)?;
        let img = AttrBundleBuilder::<Html>::new()
            .attr("alt", "hello, world!")
            .attr("ismap", true)
            .build();
        markup::write_void_tag(out, ctx, "img", &img)?;
        out.push('\n');
        markup::write_void_tag(out, ctx, "br", &AttrBundle::empty())?;
        markup::write_end_tag(out, "div");
        out.push('\n');

        for_each(&["foo", "bar", "baz"], |_, word, first| {
            if !first {
                out.push(' ');
                markup::write_void_tag(out, ctx, "br", &AttrBundle::empty())?;
                out.push(' ');
            }
            Render::<Html>::render(word, out, ctx)
        })?;

        markup::write_end_tag(out, "html");
        Ok(())
    }
}

#[derive(Clone, Copy)]
struct MobilePage;

impl Template for MobilePage {
    type Content = Html;
    type Params = ();

    fn write(&self, out: &mut OutputBuffer, ctx: &RenderContext, _: &()) -> Result<()> {
        markup::write_root_start(
            out,
            ctx,
            &DocType::MOBILE,
            "html",
            XHTML_NAMESPACE,
            &AttrBundle::empty(),
        )?;
        markup::write_end_tag(out, "html");
        Ok(())
    }
}

#[test]
fn test_sgml_page() {
    let html = SyntaxDifferences
        .render_to_string(&RenderContext::sgml(), &())
        .unwrap();
    assert_eq!(
        html,
        concat!(
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
            "<html>",
            "<div id=\"snarf\">",
            "<img alt=\"hello, world!\" ismap>\n",
            "<br>",
            "</div>\n",
            "foo <br> bar <br> baz",
            "</html>",
        )
    );
}

#[test]
fn test_xml_page() {
    let xhtml = SyntaxDifferences
        .render_to_string(&RenderContext::xml(), &())
        .unwrap();
    insta::assert_snapshot!(xhtml, @r#"
<?xml version="1.0" ?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html xmlns="http://www.w3.org/1999/xhtml"><div id="snarf"><img alt="hello, world!" ismap="ismap" />
<br /></div>
foo <br /> bar <br /> baz</html>
"#);
}

#[test]
fn test_xml_only_doctype_in_xml() {
    let xhtml = MobilePage.render_to_string(&RenderContext::xml(), &()).unwrap();
    assert_eq!(
        xhtml,
        concat!(
            "<?xml version=\"1.0\" ?>\n",
            "<!DOCTYPE html PUBLIC \"-//WAPFORUM//DTD XHTML Mobile 1.0//EN\" \"http://www.wapforum.org/DTD/xhtml-mobile10.dtd\">",
            "<html xmlns=\"http://www.w3.org/1999/xhtml\"></html>",
        )
    );
}

#[test]
fn test_xml_only_doctype_in_sgml() {
    let err = MobilePage
        .render_to_string(&RenderContext::sgml(), &())
        .unwrap_err();
    assert!(matches!(err, RenderError::Configuration(_)));
    assert_eq!(
        err.to_string(),
        "Doctype 'mobile' incompatible with non-XML syntax"
    );
}

#[test]
fn test_failed_render_leaves_partial_output_until_cleared() {
    let page = Closure::<Html>::new(|out, ctx| {
        out.push_str("<p>");
        let missing: Option<&str> = None;
        Render::<Html>::render(&missing, out, ctx)
    });
    let mut out = OutputBuffer::new();
    let err = page.write(&mut out, &RenderContext::sgml()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(out.as_str(), "<p>");

    out.clear();
    Closure::<Html>::from_html("<p>retry</p>")
        .write(&mut out, &RenderContext::sgml())
        .unwrap();
    assert_eq!(out.into_string(), "<p>retry</p>");
}

#[test]
fn test_closure_embedding() {
    let page = Closure::<Html>::new(|out, ctx| {
        Render::<Html>::render(&Closure::<Css>::from_css("foo { font-size:10 }"), out, ctx)?;
        out.push('\n');
        Render::<Html>::render(
            &Closure::<Javascript>::from_javascript("var foo = \"bar\";"),
            out,
            ctx,
        )?;
        out.push('\n');
        Render::<Html>::render(&Closure::<Plaintext>::from_plaintext("foo < & >"), out, ctx)
    });
    assert_eq!(
        page.render_to_string(&RenderContext::sgml()).unwrap(),
        concat!(
            "<style type=\"text/css\">\nfoo { font-size:10 }\n</style>\n",
            "<script type=\"text/javascript\">\nvar foo = \"bar\";\n</script>\n",
            "foo &lt; &amp; &gt;",
        )
    );
}

#[test]
fn test_conditional_attribute_on_call() {
    #[derive(Clone)]
    struct Div;

    impl Template for Div {
        type Content = Html;
        type Params = AttrBundle<Html>;

        fn write(
            &self,
            out: &mut OutputBuffer,
            ctx: &RenderContext,
            caller: &AttrBundle<Html>,
        ) -> Result<()> {
            let attrs = AttrBundleBuilder::<Html>::with_allowed(["id"])
                .add_bundle(caller)
                .build();
            markup::write_start_tag(out, ctx, "div", &attrs)?;
            out.push_str("ImaDiv");
            markup::write_end_tag(out, "div");
            Ok(())
        }
    }

    let call = |with_id: bool| {
        let attrs = AttrBundleBuilder::<Html>::new()
            .attr_if("id", "optionalId", with_id)
            .build();
        Div.render_to_string(&RenderContext::sgml(), &attrs).unwrap()
    };
    assert_eq!(call(true), "<div id=\"optionalId\">ImaDiv</div>");
    assert_eq!(call(false), "<div>ImaDiv</div>");
}

#[test]
fn test_javascript_values() {
    let data = serde_json::json!({"name": "</script>", "tags": ["a", "b"]});
    let script = Closure::<Javascript>::new(move |out, ctx| {
        out.push_str("var data = ");
        Render::<Javascript>::render(&data, out, ctx)?;
        out.push_str("; var ready = ");
        Render::<Javascript>::render(&true, out, ctx)?;
        out.push_str("; var title = ");
        Render::<Javascript>::render("it's <b>", out, ctx)?;
        out.push(';');
        Ok(())
    });
    let html = RenderContext::sgml()
        .get_string(|out, ctx| Render::<Html>::render(&script, out, ctx))
        .unwrap();
    insta::assert_snapshot!(html, @r#"
<script type="text/javascript">
var data = {"name":"\u003c/script\u003e","tags":["a","b"]}; var ready = true; var title = "it\047s \074b\076";
</script>
"#);
}

#[test]
fn test_css_values() {
    let accent: Color = "orange".parse().unwrap();
    let css = Closure::<Css>::new(move |out, ctx| {
        out.push_str("a { color: ");
        Render::<Css>::render(&accent, out, ctx)?;
        out.push_str("; font-family: ");
        Render::<Css>::render("Helvetica Neue", out, ctx)?;
        out.push_str("; background: url(");
        Render::<Css>::render(&CssUrl("bg image.png"), out, ctx)?;
        out.push_str("); z-index: ");
        Render::<Css>::render(&10i32, out, ctx)?;
        out.push_str(" }");
        Ok(())
    });
    assert_eq!(
        css.render_to_string(&RenderContext::sgml()).unwrap(),
        "a { color: #ffa500; font-family: \"Helvetica Neue\"; background: url(bg\\ image.png); z-index: 10 }"
    );
}

#[test]
fn test_context_from_yaml_drives_render() {
    let ctx = RenderContext::from_yaml("syntax: xml").unwrap();
    let br = ctx
        .get_string(|out, ctx| markup::write_void_tag(out, ctx, "br", &AttrBundle::empty()))
        .unwrap();
    assert_eq!(br, "<br />");
}
