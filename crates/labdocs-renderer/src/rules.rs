//! The ordered rewrite rules that make up the render pipeline.
//!
//! Every rule is a single global, non-iterative pass over the output of the
//! previous rule. Later rules see the markup emitted by earlier ones, so the
//! order is part of the output format.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::styles::{
    BULLET_CLASS, CODE_BLOCK_PRE_CLASS, CODE_BLOCK_WRAPPER_CLASS, EM_CLASS, GLYPH_STYLES,
    HEADING_STYLES, HeadingStyle, INLINE_CODE_CLASS, LINK_CLASS, ORDERED_ITEM_CLASS,
    PARAGRAPH_CLASS, RULE_CLASS, STATUS_ITEM_CLASS, STRONG_CLASS, UNORDERED_ITEM_CLASS,
};

/// Pipeline rules in application order.
static PIPELINE: LazyLock<Vec<Rule>> = LazyLock::new(build_pipeline);

/// Ordered rules applied by [`MarkdownRenderer`](crate::MarkdownRenderer).
#[must_use]
pub fn pipeline() -> &'static [Rule] {
    &PIPELINE
}

/// A single rewrite pass.
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    action: Action,
}

#[derive(Debug)]
enum Action {
    /// Regex with a `$n` replacement template.
    Template { pattern: Regex, replacement: String },
    /// Plain substring replacement.
    Literal {
        needle: &'static str,
        replacement: String,
    },
    /// Restyle unordered list items carrying status glyphs.
    StatusGlyphs { pattern: Regex },
}

impl Rule {
    fn template(name: &'static str, pattern: &str, replacement: String) -> Self {
        Self {
            name,
            action: Action::Template {
                pattern: compile(name, pattern),
                replacement,
            },
        }
    }

    /// Rule identifier, e.g. `"bold"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to `input`, borrowing when nothing matched.
    #[must_use]
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.action {
            Action::Template {
                pattern,
                replacement,
            } => pattern.replace_all(input, replacement.as_str()),
            Action::Literal {
                needle,
                replacement,
            } => {
                if input.contains(needle) {
                    Cow::Owned(input.replace(needle, replacement))
                } else {
                    Cow::Borrowed(input)
                }
            }
            Action::StatusGlyphs { pattern } => pattern.replace_all(input, restyle_status_item),
        }
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid regex for rule {name}: {e}"))
}

fn build_pipeline() -> Vec<Rule> {
    let mut rules: Vec<Rule> = HEADING_STYLES.iter().map(heading_rule).collect();

    rules.push(Rule::template(
        "code_block",
        r"(?s)```(.*?)```",
        format!(
            r#"<div class="{CODE_BLOCK_WRAPPER_CLASS}"><pre class="{CODE_BLOCK_PRE_CLASS}">${{1}}</pre></div>"#
        ),
    ));
    rules.push(Rule::template(
        "inline_code",
        r"`([^`]+)`",
        format!(r#"<code class="{INLINE_CODE_CLASS}">${{1}}</code>"#),
    ));
    rules.push(Rule::template(
        "unordered_item",
        r"(?mR)^- (.*)$",
        format!(
            r#"<li class="{UNORDERED_ITEM_CLASS}"><div class="{BULLET_CLASS}"></div><span>${{1}}</span></li>"#
        ),
    ));
    // The numeral is captured but not emitted.
    rules.push(Rule::template(
        "ordered_item",
        r"(?mR)^([0-9]+)\. (.*)$",
        format!(r#"<li class="{ORDERED_ITEM_CLASS}">${{2}}</li>"#),
    ));
    rules.push(Rule::template(
        "bold",
        r"(?R)\*\*(.*?)\*\*",
        format!(r#"<strong class="{STRONG_CLASS}">${{1}}</strong>"#),
    ));
    rules.push(Rule::template(
        "italic",
        r"(?R)\*(.*?)\*",
        format!(r#"<em class="{EM_CLASS}">${{1}}</em>"#),
    ));
    rules.push(Rule::template(
        "link",
        r"\[([^\]]+)\]\(([^)]+)\)",
        format!(r#"<a href="${{2}}" class="{LINK_CLASS}">${{1}}</a>"#),
    ));
    rules.push(Rule::template(
        "horizontal_rule",
        r"(?mR)^---$",
        format!(r#"<hr class="{RULE_CLASS}" />"#),
    ));
    rules.push(Rule {
        name: "paragraph",
        action: Action::Literal {
            needle: "\n\n",
            replacement: format!(r#"</p><p class="{PARAGRAPH_CLASS}">"#),
        },
    });
    rules.push(Rule {
        name: "status_glyphs",
        action: Action::StatusGlyphs {
            pattern: compile("status_glyphs", &status_item_pattern()),
        },
    });

    rules
}

fn heading_rule(style: &HeadingStyle) -> Rule {
    let HeadingStyle {
        level,
        class,
        prefix,
    } = *style;
    let hashes = "#".repeat(usize::from(level));
    let name = match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        _ => "h4",
    };
    Rule::template(
        name,
        &format!(r"(?mR)^{hashes} (.*)$"),
        format!(r#"<h{level} class="{class}">{prefix}${{1}}</h{level}>"#),
    )
}

/// Matches an unordered item whose span holds plain text with a status glyph.
fn status_item_pattern() -> String {
    let glyphs: String = GLYPH_STYLES
        .iter()
        .map(|g| regex::escape(g.glyph.encode_utf8(&mut [0; 4])))
        .collect();
    format!(r"<li([^>]*)>(<div[^>]*></div>)<span>([^<]*[{glyphs}][^<]*)</span></li>")
}

fn restyle_status_item(caps: &Captures<'_>) -> String {
    let (attrs, bullet, text) = (&caps[1], &caps[2], &caps[3]);

    let mut html = String::with_capacity(caps[0].len() + 64);
    html.push_str("<li");
    html.push_str(attrs);
    html.push('>');
    html.push_str(bullet);
    html.push_str(r#"<span class=""#);
    html.push_str(STATUS_ITEM_CLASS);
    html.push_str(r#"">"#);
    for c in text.chars() {
        match GLYPH_STYLES.iter().find(|g| g.glyph == c) {
            Some(style) => {
                html.push_str(r#"<span class=""#);
                html.push_str(style.class);
                html.push_str(r#"">"#);
                html.push(c);
                html.push_str("</span>");
            }
            None => html.push(c),
        }
    }
    html.push_str("</span></li>");
    html
}
