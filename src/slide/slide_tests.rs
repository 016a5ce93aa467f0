//! Tests for slide content, metadata accessors, references, and rendering.

use crate::core::SlideError;
use crate::markdown::{CmarkRenderer, MarkdownOptions};
use crate::metadata::MetadataError;
use crate::slide::{SectionId, SectionRegistry, Slide, SlideParams, SlideRenderer};
use crate::templating::{TemplateError, TemplateRenderer};
use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_set_content_appends_single_newline() {
    for value in ["", "x", "a\n", "  spaced  ", "line one\nline two"] {
        let mut slide = Slide::new();
        slide.set_content(value);
        assert_eq!(slide.content(), format!("{value}\n"));
    }
}

#[test]
fn test_set_content_overwrites() {
    let mut slide = Slide::new();
    slide.set_content("first");
    slide.append("second");
    slide.set_content("third");
    assert_eq!(slide.content(), "third\n");
}

#[test]
fn test_append_preserves_previous_content() {
    let mut slide = Slide::new();
    slide.set_content("a");
    slide <<= "b";
    slide.append("");
    slide <<= "c\n";
    assert_eq!(slide.content(), "a\nb\n\nc\n\n");
}

#[test]
fn test_new_slide_is_empty() {
    let slide = Slide::new();
    assert_eq!(slide.content(), "");
    assert!(slide.is_empty());
    assert_eq!(slide.sequence(), 0);
    assert_eq!(slide.section(), None);
}

#[test]
fn test_empty_ignores_whitespace_and_metadata() {
    let mut slide = Slide::new();
    slide.set_content("x");
    assert!(!slide.is_empty());

    slide.set_content("   ");
    assert!(slide.is_empty());

    slide.set_metadata("center #title");
    assert!(slide.is_empty());
}

#[test]
fn test_defaults_without_metadata() {
    let slide = Slide::new();
    assert_eq!(slide.classes(), "");
    assert_eq!(slide.transition(), "none");
    assert_eq!(slide.id(), "");
    assert!(slide.metadata().is_empty());
}

#[test]
fn test_metadata_accessors() {
    let mut slide = Slide::new();
    slide.set_metadata("transition=fade one two #id3 three");
    assert_eq!(slide.classes(), "one two three");
    assert_eq!(slide.transition(), "fade");
    assert_eq!(slide.id(), "id3");
}

#[test]
fn test_set_metadata_replaces_previous() {
    let mut slide = Slide::new();
    slide.set_metadata("transition=fade big #first");
    slide.set_metadata("small");
    assert_eq!(slide.classes(), "small");
    assert_eq!(slide.transition(), "none");
    assert_eq!(slide.id(), "");
}

#[test]
fn test_malformed_metadata_keeps_valid_tokens() {
    let mut slide = Slide::new();
    slide.set_metadata("one #a #b transition=");
    assert_eq!(slide.classes(), "one");
    assert_eq!(slide.id(), "a");
    assert_eq!(slide.transition(), "none");

    slide.set_metadata("#");
    assert!(slide.metadata().is_empty());
}

#[test]
fn test_try_set_metadata_keeps_previous_on_error() {
    let mut slide = Slide::new();
    slide.try_set_metadata("keep #me").unwrap();

    let err = slide.try_set_metadata("transition=").unwrap_err();
    assert!(matches!(err, SlideError::Metadata(MetadataError::EmptyValue { .. })));
    assert_eq!(slide.classes(), "keep");
    assert_eq!(slide.id(), "me");
}

#[test]
fn test_reference_without_section() {
    let mut slide = Slide::new();
    slide.set_sequence(5);
    assert_eq!(slide.reference(&SectionRegistry::new()), "slide/5");
}

#[test]
fn test_reference_with_section() {
    let mut sections = SectionRegistry::new();
    let intro = sections.register("Intro");

    let mut slide = Slide::new();
    slide.set_section(Some(intro));
    slide.set_sequence(2);
    assert_eq!(slide.reference(&sections), "Intro/2");

    sections.rename(intro, "Opening");
    assert_eq!(slide.reference(&sections), "Opening/2");
}

#[test]
fn test_reference_with_dangling_section_falls_back() {
    let mut slide = Slide::new();
    slide.set_section(Some(SectionId::new(9)));
    slide.set_sequence(1);
    assert_eq!(slide.reference(&SectionRegistry::new()), "slide/1");
}

#[test]
fn test_with_params_runs_setters() {
    let slide = Slide::with_params(SlideParams {
        content: Some("# Title".to_string()),
        metadata: Some("transition=zoom wide".to_string()),
        sequence: Some(7),
        section: Some(SectionId::new(0)),
    });

    assert_eq!(slide.content(), "# Title\n");
    assert_eq!(slide.transition(), "zoom");
    assert_eq!(slide.classes(), "wide");
    assert_eq!(slide.sequence(), 7);
    assert_eq!(slide.section(), Some(SectionId::new(0)));
}

#[test]
fn test_from_fields() {
    let slide = Slide::from_fields([("content", json!("hello")), ("sequence", json!(3))]).unwrap();
    assert_eq!(slide.content(), "hello\n");
    assert_eq!(slide.sequence(), 3);

    let err = Slide::from_fields([("sequense", json!(3))]).unwrap_err();
    assert!(matches!(
        err,
        SlideError::UnknownField { ref suggestion, .. } if suggestion.as_deref() == Some("sequence")
    ));
}

#[test]
fn test_content_as_html_renders_code_block() {
    let mut slide = Slide::new();
    slide.set_content("# Code");
    slide.append("");
    slide.append("```ruby");
    slide.append("puts 'hello'");
    slide.append("```");

    let html = slide.content_as_html();
    assert!(html.contains("<h1>Code</h1>"));
    assert!(html.contains("<pre><code"), "got: {html}");
}

#[test]
fn test_content_as_html_reflects_latest_content() {
    let mut slide = Slide::new();
    slide.set_content("first");
    assert!(slide.content_as_html().contains("first"));

    slide.set_content("second");
    let html = slide.content_as_html();
    assert!(html.contains("second"));
    assert!(!html.contains("first"));
}

#[test]
fn test_content_as_html_with_custom_options() {
    let mut slide = Slide::new();
    slide.set_content("one\ntwo");

    let plain = CmarkRenderer::new(MarkdownOptions::none());
    assert!(!slide.content_as_html_with(&plain).contains("<br"));
    assert!(slide.content_as_html().contains("<br />"));
}

#[test]
fn test_to_html_with_default_template() -> Result<()> {
    let mut sections = SectionRegistry::new();
    let intro = sections.register("Intro");

    let mut slide = Slide::new();
    slide.set_content("# Hello");
    slide.set_metadata("transition=fade center #hello");
    slide.set_section(Some(intro));
    slide.set_sequence(1);

    let html = slide.to_html(&sections)?;
    assert!(html.contains(r#"id="hello""#), "got: {html}");
    assert!(html.contains(r#"class="slide center""#));
    assert!(html.contains(r#"data-transition="fade""#));
    assert!(html.contains(r#"ref="Intro/1""#));
    assert!(html.contains("<h1>Hello</h1>"));
    Ok(())
}

#[test]
fn test_to_html_is_deterministic() -> Result<()> {
    let sections = SectionRegistry::new();
    let mut slide = Slide::new();
    slide.set_content("* a\n* b https://example.com");
    slide.set_metadata("bullets");

    assert_eq!(slide.to_html(&sections)?, slide.to_html(&sections)?);
    Ok(())
}

#[test]
fn test_render_does_not_freeze_slide() -> Result<()> {
    let sections = SectionRegistry::new();
    let mut slide = Slide::new();
    slide.set_content("before");
    let first = slide.to_html(&sections)?;

    slide <<= "after";
    let second = slide.to_html(&sections)?;
    assert_ne!(first, second);
    assert!(second.contains("after"));
    Ok(())
}

#[test]
fn test_attribute_values_are_escaped() -> Result<()> {
    let mut slide = Slide::new();
    slide.set_metadata("a\"b");
    let html = slide.to_html(&SectionRegistry::new())?;
    assert!(html.contains("a&quot;b"), "got: {html}");
    Ok(())
}

#[test]
fn test_missing_template_surfaces_as_template_error() {
    let dir = TempDir::new().unwrap();
    let mut renderer = SlideRenderer::new(
        Box::new(CmarkRenderer::default()),
        TemplateRenderer::new(dir.path().join("nowhere"), true),
    );

    let err = renderer.render(&Slide::new(), &SectionRegistry::new()).unwrap_err();
    assert!(matches!(err, SlideError::Template(TemplateError::NotFound { .. })), "got: {err:?}");
}

#[test]
fn test_caching_renderer_matches_fresh_renderer() -> Result<()> {
    let sections = SectionRegistry::new();
    let mut slide = Slide::new();
    slide.set_content("Some *text*");

    let mut cached = SlideRenderer::new(
        Box::new(CmarkRenderer::default()),
        TemplateRenderer::new(TemplateRenderer::default_views_dir(), true),
    );

    let first = cached.render(&slide, &sections)?;
    let second = cached.render(&slide, &sections)?;
    assert_eq!(first, second);
    assert_eq!(first, slide.to_html(&sections)?);
    assert_eq!(cached.templates().cache_stats(), (1, 1));
    Ok(())
}
