//! Tailwind class tables for rendered elements.

/// Markup emitted for one heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle {
    /// Heading level (1-4).
    pub level: u8,
    /// Class attribute of the `<hN>` element.
    pub class: &'static str,
    /// Markup inserted before the heading text.
    pub prefix: &'static str,
}

/// Heading styles in level order. Levels 5 and 6 are not rendered.
pub const HEADING_STYLES: [HeadingStyle; 4] = [
    HeadingStyle {
        level: 1,
        class: "text-4xl font-bold text-slate-900 mb-6 pb-4 border-b border-slate-200",
        prefix: "",
    },
    HeadingStyle {
        level: 2,
        class: "text-2xl font-semibold text-slate-800 mt-8 mb-4 flex items-center gap-2",
        prefix: r#"<div class="w-1 h-6 bg-blue-500 rounded"></div>"#,
    },
    HeadingStyle {
        level: 3,
        class: "text-xl font-semibold text-slate-700 mt-6 mb-3",
        prefix: "",
    },
    HeadingStyle {
        level: 4,
        class: "text-lg font-medium text-slate-600 mt-4 mb-2",
        prefix: "",
    },
];

/// Status glyph and the text colour applied to it inside list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub glyph: char,
    pub class: &'static str,
}

/// Status glyphs recognised in unordered list items.
pub const GLYPH_STYLES: [GlyphStyle; 3] = [
    GlyphStyle {
        glyph: '✅',
        class: "text-green-500",
    },
    GlyphStyle {
        glyph: '⭐',
        class: "text-red-500",
    },
    GlyphStyle {
        glyph: '🟡',
        class: "text-yellow-500",
    },
];

pub(crate) const CODE_BLOCK_WRAPPER_CLASS: &str =
    "relative bg-slate-900 rounded-lg p-4 mb-6 overflow-x-auto";
pub(crate) const CODE_BLOCK_PRE_CLASS: &str = "text-slate-100 text-sm";
pub(crate) const INLINE_CODE_CLASS: &str =
    "bg-slate-100 text-slate-800 px-1.5 py-0.5 rounded text-sm font-mono";
pub(crate) const UNORDERED_ITEM_CLASS: &str = "flex items-start gap-2 text-slate-700 mb-2";
pub(crate) const BULLET_CLASS: &str = "w-2 h-2 bg-blue-400 rounded-full mt-2.5 flex-shrink-0";
pub(crate) const ORDERED_ITEM_CLASS: &str = "text-slate-700 mb-2 ml-4";
pub(crate) const STRONG_CLASS: &str = "font-semibold text-slate-900";
pub(crate) const EM_CLASS: &str = "italic text-slate-600";
pub(crate) const LINK_CLASS: &str =
    "text-blue-600 hover:text-blue-800 underline decoration-2 underline-offset-2";
pub(crate) const RULE_CLASS: &str = "my-8 border-t border-slate-200";
pub(crate) const PARAGRAPH_CLASS: &str = "text-slate-700 leading-relaxed mb-4";
pub(crate) const STATUS_ITEM_CLASS: &str = "inline-flex items-center gap-2";
