//! Renderers configured from `showoff.toml`.

use anyhow::Result;
use showoff::config::ShowoffConfig;
use showoff::slide::{SectionRegistry, Slide, SlideRenderer};
use showoff::test_utils::ViewsFixture;
use std::fs;

#[test]
fn test_config_selects_views_and_markdown_options() -> Result<()> {
    let views = ViewsFixture::with_slide_template("{{ content_as_html | safe }}")?;
    let config_path = views.path().join("showoff.toml");
    fs::write(
        &config_path,
        r#"
views_dir = "."
cache_templates = false

[markdown]
hard_wrap = false
xhtml = false
"#,
    )?;

    let config = ShowoffConfig::load(&config_path)?;
    let mut renderer = SlideRenderer::from_config(&config);
    assert!(!renderer.templates().cache_enabled());
    assert!(!renderer.markdown().options().hard_wrap);

    let mut slide = Slide::new();
    slide.set_content("one\ntwo\n\n---");
    let html = renderer.render(&slide, &SectionRegistry::new())?;

    assert!(html.contains("<p>one\ntwo</p>"), "got: {html}");
    assert!(html.contains("<hr>"));
    Ok(())
}

#[test]
fn test_default_config_renders_like_to_html() -> Result<()> {
    let mut slide = Slide::new();
    slide.set_content("Plain ^text and www.example.com");
    let sections = SectionRegistry::new();

    let config = ShowoffConfig {
        views_dir: Some(showoff::templating::TemplateRenderer::default_views_dir()),
        ..ShowoffConfig::default()
    };
    let mut renderer = SlideRenderer::from_config(&config);
    let html = renderer.render(&slide, &sections)?;

    assert_eq!(html, slide.to_html(&sections)?);
    assert!(html.contains("<sup>text</sup>"));
    assert!(html.contains(r#"<a href="http://www.example.com">"#));
    Ok(())
}
