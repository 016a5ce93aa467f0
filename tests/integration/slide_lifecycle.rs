//! Building, mutating, and re-rendering slides.

use anyhow::Result;
use serde_json::json;
use showoff::core::{ErrorContext, SlideError};
use showoff::slide::{SectionId, SectionRegistry, Slide, SlideParams};
use showoff::test_utils::ViewsFixture;

#[test]
fn test_slide_built_from_fields_renders() -> Result<()> {
    let mut sections = SectionRegistry::new();
    let intro = sections.register("Intro");

    let slide = Slide::from_fields([
        ("content", json!("# Hi")),
        ("metadata", json!("transition=fade one two #id3 three")),
        ("sequence", json!(2)),
        ("section", json!(intro.index())),
    ])?;

    assert_eq!(slide.classes(), "one two three");
    assert_eq!(slide.transition(), "fade");
    assert_eq!(slide.id(), "id3");
    assert_eq!(slide.reference(&sections), "Intro/2");

    let views = ViewsFixture::with_slide_template("{{ reference }} {{ content_as_html | safe }}")?;
    let html = views.renderer(false).render(&slide, &sections)?;
    assert_eq!(html, "Intro/2 <h1>Hi</h1>\n");
    Ok(())
}

#[test]
fn test_unknown_field_reports_suggestion() {
    let err = Slide::from_fields([("metdata", json!("fade"))]).unwrap_err();
    let ctx = ErrorContext::from(err);

    assert!(matches!(ctx.error, SlideError::UnknownField { .. }));
    assert_eq!(ctx.suggestion.as_deref(), Some("Did you mean 'metadata'?"));
}

#[test]
fn test_params_from_json_document() -> Result<()> {
    let params: SlideParams = serde_json::from_str(r#"{ "content": "x", "section": 0 }"#)?;
    let slide = Slide::with_params(params);
    assert_eq!(slide.content(), "x\n");
    assert_eq!(slide.section(), Some(SectionId::new(0)));
    Ok(())
}

#[test]
fn test_accumulate_then_rerender() -> Result<()> {
    let views = ViewsFixture::with_slide_template("{{ content_as_html | safe }}")?;
    let mut renderer = views.renderer(true);
    let sections = SectionRegistry::new();

    let mut slide = Slide::new();
    assert!(slide.is_empty());
    assert_eq!(renderer.render(&slide, &sections)?, "");

    slide <<= "* one";
    slide <<= "* two";
    assert!(!slide.is_empty());
    assert_eq!(slide.content(), "* one\n* two\n");

    let html = renderer.render(&slide, &sections)?;
    assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
    assert_eq!(renderer.render(&slide, &sections)?, html);
    Ok(())
}

#[test]
fn test_slides_render_independently_across_threads() -> Result<()> {
    let sections = SectionRegistry::new();
    let slides: Vec<Slide> = (0..4)
        .map(|i| {
            let mut slide = Slide::new();
            slide.set_content(&format!("Slide {i}"));
            slide.set_sequence(i);
            slide
        })
        .collect();

    let sections = &sections;
    let rendered = std::thread::scope(|scope| {
        let handles: Vec<_> = slides
            .iter()
            .map(|slide| scope.spawn(move || slide.to_html(sections)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("render thread panicked"))
            .collect::<Result<Vec<_>, _>>()
    })?;

    for (i, html) in rendered.iter().enumerate() {
        assert!(html.contains(&format!("Slide {i}")));
        assert!(html.contains(&format!("slide/{i}")));
    }
    Ok(())
}
