//! Display attributes per resource kind.

use comfy_table::Color;

use khatwa_model::ResourceKind;

/// Shown next to anything the viewer cannot open yet.
pub const LOCK_GLYPH: &str = "🔒";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub glyph: &'static str,
    pub color: Color,
    /// Arabic display label.
    pub label: &'static str,
}

/// The one mapping from kind to glyph, color and label.
pub fn kind_style(kind: ResourceKind) -> KindStyle {
    match kind {
        ResourceKind::Video => KindStyle {
            glyph: "▶",
            color: Color::Red,
            label: "فيديو",
        },
        ResourceKind::Audio => KindStyle {
            glyph: "♫",
            color: Color::Magenta,
            label: "صوت",
        },
        ResourceKind::Pdf => KindStyle {
            glyph: "📕",
            color: Color::DarkRed,
            label: "ملف PDF",
        },
        ResourceKind::Word => KindStyle {
            glyph: "📝",
            color: Color::Blue,
            label: "مستند Word",
        },
        ResourceKind::Excel => KindStyle {
            glyph: "📊",
            color: Color::Green,
            label: "جدول Excel",
        },
        ResourceKind::Other => KindStyle {
            glyph: "📎",
            color: Color::Grey,
            label: "ملف",
        },
    }
}
