//! `pulldown-cmark` backed [`MarkdownRenderer`].
//!
//! Strikethrough and tables are parser extensions. Everything else in
//! [`MarkdownOptions`] is applied by rewriting the event stream before it
//! reaches the HTML writer:
//!
//! 1. demote intra-word emphasis and (optionally) fenced code blocks
//! 2. merge adjacent text runs, then expand bare URLs and `^superscripts`
//! 3. turn soft breaks into hard breaks
//!
//! The HTML writer always emits self-closing void tags, so the `xhtml` option
//! is honored by rewriting them when it is off.

use std::ops::Range;
use std::sync::OnceLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Parser, Tag, TagEnd, html};
use regex::Regex;

use super::{MarkdownOptions, MarkdownRenderer};

/// Trailing characters that end a sentence rather than a URL. A closing
/// parenthesis is handled separately by [`trim_url`].
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '"', '\'', ']'];

fn url_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:(?:https?|ftp)://|www\.)[^\s<>]+").ok()).as_ref()
}

fn superscript_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\^(?:\(([^)]*)\)|([^\s^()]+))").ok()).as_ref()
}

fn void_tag_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(br|hr|img\b[^>]*?)\s*/>").ok()).as_ref()
}

/// Markdown renderer built on `pulldown-cmark`.
#[derive(Debug, Clone, Default)]
pub struct CmarkRenderer {
    options: MarkdownOptions,
}

impl CmarkRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
        }
    }

    /// First pass: needs source offsets to recover the delimiters of demoted
    /// emphasis and the raw text of demoted fences.
    fn rewrite_blocks<'a>(&self, source: &'a str) -> Vec<Event<'a>> {
        let parser = Parser::new_ext(source, self.options.parser_options());
        let mut events: Vec<Event<'a>> = Vec::new();
        // (marker width, span of the opening tag, demoted?)
        let mut emphasis_stack: Vec<(usize, Range<usize>, bool)> = Vec::new();
        let mut literal_fence: Option<LiteralFence> = None;

        for (event, range) in parser.into_offset_iter() {
            if literal_fence.is_some() {
                match event {
                    Event::Text(text) => {
                        if let Some(fence) = literal_fence.as_mut() {
                            fence.body.push_str(&text);
                        }
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some(fence) = literal_fence.take() {
                            fence.push_paragraph(&mut events);
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                    if !self.options.fenced_code_blocks =>
                {
                    literal_fence = Some(LiteralFence {
                        marker: fence_marker(&source[range]),
                        info: info.to_string(),
                        body: String::new(),
                    });
                }
                Event::Start(tag @ (Tag::Emphasis | Tag::Strong)) => {
                    let width = if matches!(tag, Tag::Strong) {
                        2
                    } else {
                        1
                    };
                    let demote = self.options.no_intra_emphasis
                        && source[..range.start].chars().next_back().is_some_and(char::is_alphanumeric);
                    if demote {
                        events.push(Event::Text(delimiter(source, range.start..range.start + width)));
                    } else {
                        events.push(Event::Start(tag));
                    }
                    emphasis_stack.push((width, range, demote));
                }
                Event::End(end @ (TagEnd::Emphasis | TagEnd::Strong)) => {
                    match emphasis_stack.pop() {
                        Some((width, open, true)) => {
                            events.push(Event::Text(delimiter(
                                source,
                                open.end.saturating_sub(width)..open.end,
                            )));
                        }
                        _ => events.push(Event::End(end)),
                    }
                }
                other => events.push(other),
            }
        }

        events
    }

    /// Second pass: text-level rewrites outside code, images and links, both
    /// markdown links and raw `<a>` tags.
    fn rewrite_inline<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut pending = String::new();
        let mut verbatim_depth = 0usize;

        for event in events {
            if let Event::Text(text) = event {
                pending.push_str(&text);
                continue;
            }

            if !pending.is_empty() {
                let text = std::mem::take(&mut pending);
                if verbatim_depth > 0 {
                    out.push(Event::Text(CowStr::from(text)));
                } else {
                    out.extend(self.expand_text(&text));
                }
            }

            match event {
                Event::Start(Tag::CodeBlock(_) | Tag::Link { .. } | Tag::Image { .. }) => {
                    verbatim_depth += 1;
                    out.push(event);
                }
                Event::End(TagEnd::CodeBlock | TagEnd::Link | TagEnd::Image) => {
                    verbatim_depth = verbatim_depth.saturating_sub(1);
                    out.push(event);
                }
                Event::InlineHtml(html) if opens_anchor(&html) => {
                    verbatim_depth += 1;
                    out.push(Event::InlineHtml(html));
                }
                Event::InlineHtml(html) if closes_anchor(&html) => {
                    verbatim_depth = verbatim_depth.saturating_sub(1);
                    out.push(Event::InlineHtml(html));
                }
                Event::SoftBreak if self.options.hard_wrap => out.push(Event::HardBreak),
                other => out.push(other),
            }
        }

        if !pending.is_empty() {
            out.extend(self.expand_text(&pending));
        }

        out
    }

    fn expand_text<'a>(&self, text: &str) -> Vec<Event<'a>> {
        let mut out = Vec::new();

        let Some(urls) = url_regex().filter(|_| self.options.autolink) else {
            self.push_superscripts(&mut out, text);
            return out;
        };

        let mut last = 0;
        for m in urls.find_iter(text) {
            if m.start() < last {
                continue;
            }
            let url = trim_url(m.as_str());
            if url.is_empty() {
                continue;
            }
            self.push_superscripts(&mut out, &text[last..m.start()]);

            let href = if url.starts_with("www.") {
                format!("http://{url}")
            } else {
                url.to_string()
            };
            out.push(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: CowStr::from(href),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            out.push(Event::Text(CowStr::from(url.to_string())));
            out.push(Event::End(TagEnd::Link));

            last = m.start() + url.len();
        }
        self.push_superscripts(&mut out, &text[last..]);

        out
    }

    fn push_superscripts<'a>(&self, out: &mut Vec<Event<'a>>, text: &str) {
        if text.is_empty() {
            return;
        }

        let Some(sup) = superscript_regex().filter(|_| self.options.superscript) else {
            out.push(Event::Text(CowStr::from(text.to_string())));
            return;
        };

        let mut last = 0;
        for caps in sup.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2)))
            else {
                continue;
            };
            if inner.as_str().is_empty() {
                continue;
            }
            if whole.start() > last {
                out.push(Event::Text(CowStr::from(text[last..whole.start()].to_string())));
            }
            out.push(Event::InlineHtml(CowStr::Borrowed("<sup>")));
            out.push(Event::Text(CowStr::from(inner.as_str().to_string())));
            out.push(Event::InlineHtml(CowStr::Borrowed("</sup>")));
            last = whole.end();
        }
        if last < text.len() {
            out.push(Event::Text(CowStr::from(text[last..].to_string())));
        }
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, text: &str) -> String {
        let events = self.rewrite_blocks(text);
        let events = self.rewrite_inline(events);

        let mut output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());

        if self.options.xhtml {
            return output;
        }
        match void_tag_regex() {
            Some(re) => re.replace_all(&output, "<$1>").into_owned(),
            None => output,
        }
    }

    fn options(&self) -> &MarkdownOptions {
        &self.options
    }
}

/// Strip sentence punctuation from the end of a matched URL. A trailing `)`
/// is only stripped while it has no matching `(` inside the URL.
fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    loop {
        let trimmed = url.trim_end_matches(URL_TRAILING_PUNCTUATION);
        match trimmed.strip_suffix(')') {
            Some(shorter) if trimmed.matches(')').count() > trimmed.matches('(').count() => {
                url = shorter;
            }
            _ => return trimmed,
        }
    }
}

/// Raw `<a ...>` tag written inline in the markdown.
fn opens_anchor(html: &str) -> bool {
    let tag = html.trim_start().get(..3).map(str::to_ascii_lowercase);
    matches!(tag.as_deref(), Some("<a " | "<a>"))
}

fn closes_anchor(html: &str) -> bool {
    html.trim().eq_ignore_ascii_case("</a>")
}

/// Source text of an emphasis delimiter, with a fallback for spans that do
/// not line up on character boundaries.
fn delimiter(source: &str, range: Range<usize>) -> CowStr<'_> {
    let width = range.len();
    match source.get(range) {
        Some(marker) => CowStr::Borrowed(marker),
        None => CowStr::from("*".repeat(width)),
    }
}

/// A fenced block being collected for output as plain text.
///
/// Built from the parsed info string and body rather than the source span, so
/// container prefixes (`> `, list indentation) do not leak into the text.
struct LiteralFence {
    marker: String,
    info: String,
    body: String,
}

impl LiteralFence {
    /// Emit the fence as an ordinary paragraph, one soft break per line.
    fn push_paragraph(self, events: &mut Vec<Event<'_>>) {
        let opening = format!("{}{}", self.marker, self.info);
        let lines = std::iter::once(opening.as_str())
            .chain(self.body.lines())
            .chain(std::iter::once(self.marker.as_str()));

        events.push(Event::Start(Tag::Paragraph));
        for (i, line) in lines.enumerate() {
            if i > 0 {
                events.push(Event::SoftBreak);
            }
            events.push(Event::Text(CowStr::from(line.to_string())));
        }
        events.push(Event::End(TagEnd::Paragraph));
    }
}

/// The backtick or tilde run that opens the fence at the start of `raw`.
fn fence_marker(raw: &str) -> String {
    let Some(start) = raw.find(['`', '~']) else {
        return "```".to_string();
    };
    let rest = &raw[start..];
    let fence_char = if rest.starts_with('~') {
        '~'
    } else {
        '`'
    };
    rest.chars().take_while(|&c| c == fence_char).collect()
}
