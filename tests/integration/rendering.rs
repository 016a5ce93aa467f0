//! Rendering slides through templates on disk.

use anyhow::Result;
use showoff::core::{SlideError, user_friendly_error};
use showoff::slide::{SectionRegistry, Slide};
use showoff::templating::TemplateError;
use showoff::test_utils::{ViewsFixture, init_test_logging};

fn sample_slide(sections: &mut SectionRegistry) -> Slide {
    let demo = sections.register("Demo");
    let mut slide = Slide::new();
    slide.set_metadata("!SLIDE transition=fade code small #demo-1");
    slide.set_content("# Ruby");
    slide <<= "";
    slide <<= "```ruby";
    slide <<= "puts 'hello'";
    slide <<= "```";
    slide.set_section(Some(demo));
    slide.set_sequence(4);
    slide
}

#[test]
fn test_render_with_default_template_copy() -> Result<()> {
    init_test_logging(None);

    let views = ViewsFixture::with_default_template()?;
    let mut sections = SectionRegistry::new();
    let slide = sample_slide(&mut sections);

    let html = views.renderer(false).render(&slide, &sections)?;
    assert!(html.contains(r#"<div id="demo-1" class="slide code small" data-transition="fade">"#));
    assert!(html.contains(r#"<div class="content code small" ref="Demo/4">"#));
    assert!(html.contains("<h1>Ruby</h1>"));
    assert!(html.contains("<pre><code class=\"language-ruby\">"));

    assert_eq!(html, slide.to_html(&sections)?);
    Ok(())
}

#[test]
fn test_template_sees_every_context_field() -> Result<()> {
    init_test_logging(None);

    let views = ViewsFixture::with_slide_template(
        "{{ id }}|{{ classes }}|{{ transition }}|{{ reference }}|{{ sequence }}|{{ section }}|{{ empty }}",
    )?;
    let mut sections = SectionRegistry::new();
    let slide = sample_slide(&mut sections);

    let html = views.renderer(false).render(&slide, &sections)?;
    assert_eq!(html, "demo-1|code small|fade|Demo/4|4|Demo|false");
    Ok(())
}

#[test]
fn test_empty_slide_renders_with_defaults() -> Result<()> {
    let views = ViewsFixture::with_slide_template(
        "{{ id }}|{{ classes }}|{{ transition }}|{{ reference }}|{{ empty }}",
    )?;
    let html = views.renderer(true).render(&Slide::new(), &SectionRegistry::new())?;
    assert_eq!(html, "||none|slide/0|true");
    Ok(())
}

#[test]
fn test_cached_renderer_follows_template_edits() -> Result<()> {
    let views = ViewsFixture::with_slide_template("<p>{{ id }}</p>")?;
    let mut renderer = views.renderer(true);

    let mut slide = Slide::new();
    slide.set_metadata("#one");
    let sections = SectionRegistry::new();

    assert_eq!(renderer.render(&slide, &sections)?, "<p>one</p>");
    assert_eq!(renderer.render(&slide, &sections)?, "<p>one</p>");
    assert_eq!(renderer.templates().cache_stats(), (1, 1));

    views.write_slide_template("<section>{{ id }}</section>")?;
    assert_eq!(renderer.render(&slide, &sections)?, "<section>one</section>");
    Ok(())
}

#[test]
fn test_missing_template_is_distinguishable() -> Result<()> {
    let views = ViewsFixture::empty()?;
    let err = views.renderer(false).render(&Slide::new(), &SectionRegistry::new()).unwrap_err();

    match &err {
        SlideError::Template(TemplateError::NotFound {
            path,
        }) => assert_eq!(path, &views.slide_template_path()),
        other => panic!("expected missing template, got {other:?}"),
    }

    let ctx = user_friendly_error(err.into());
    assert!(ctx.suggestion.is_some_and(|s| s.contains("slide.html")));
    Ok(())
}

#[test]
fn test_broken_template_is_syntax_error() -> Result<()> {
    let views = ViewsFixture::with_slide_template("{% for x in %}")?;
    let err = views.renderer(false).render(&Slide::new(), &SectionRegistry::new()).unwrap_err();
    assert!(matches!(err, SlideError::Template(TemplateError::Syntax { .. })), "got: {err:?}");
    Ok(())
}
