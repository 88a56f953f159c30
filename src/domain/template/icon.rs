use std::fmt;

/// Display tag for a template, resolved to a terminal glyph through a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Anchor,
    Sun,
    Trophy,
    Zap,
    Mountain,
    PenTool,
    Palette,
    Smile,
    Sparkles,
    Paintbrush,
    Eraser,
    Sticker,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Anchor,
        Icon::Sun,
        Icon::Trophy,
        Icon::Zap,
        Icon::Mountain,
        Icon::PenTool,
        Icon::Palette,
        Icon::Smile,
        Icon::Sparkles,
        Icon::Paintbrush,
        Icon::Eraser,
        Icon::Sticker,
    ];

    /// Stable tag name.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Anchor => "anchor",
            Icon::Sun => "sun",
            Icon::Trophy => "trophy",
            Icon::Zap => "zap",
            Icon::Mountain => "mountain",
            Icon::PenTool => "pen-tool",
            Icon::Palette => "palette",
            Icon::Smile => "smile",
            Icon::Sparkles => "sparkles",
            Icon::Paintbrush => "paintbrush",
            Icon::Eraser => "eraser",
            Icon::Sticker => "sticker",
        }
    }

    /// Glyph shown next to the template name in listings.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Anchor => "⚓",
            Icon::Sun => "☀️",
            Icon::Trophy => "🏆",
            Icon::Zap => "⚡",
            Icon::Mountain => "⛰️",
            Icon::PenTool => "✒️",
            Icon::Palette => "🎨",
            Icon::Smile => "🙂",
            Icon::Sparkles => "✨",
            Icon::Paintbrush => "🖌️",
            Icon::Eraser => "🧽",
            Icon::Sticker => "🏷️",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
