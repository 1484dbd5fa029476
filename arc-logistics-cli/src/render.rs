//! Shared terminal formatting: rarity colors, icons, and verdict banners.

use arc_logistics_lib::ItemVerdict;
use arc_logistics_lib::catalog::Rarity;
use owo_colors::{OwoColorize, Style};
use owo_colors::Stream::Stdout;

/// Shown when an item has no icon.
pub(crate) const FALLBACK_ICON: &str = "\u{1F4E6}";

/// Stand-in for image icons, which a terminal cannot draw.
pub(crate) const IMAGE_ICON: &str = "\u{25A3}";

/// How an icon string should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconKind<'a> {
    Glyph(&'a str),
    Image(&'a str),
    Missing,
}

/// Icons containing a path separator or a dot are image references.
pub(crate) fn classify_icon(icon: Option<&str>) -> IconKind<'_> {
    match icon.map(str::trim) {
        None | Some("") => IconKind::Missing,
        Some(icon) if icon.contains('/') || icon.contains('.') => IconKind::Image(icon),
        Some(icon) => IconKind::Glyph(icon),
    }
}

pub(crate) fn icon_text(icon: Option<&str>) -> &str {
    match classify_icon(icon) {
        IconKind::Glyph(glyph) => glyph,
        IconKind::Image(_) => IMAGE_ICON,
        IconKind::Missing => FALLBACK_ICON,
    }
}

/// Color `text` with the palette for `rarity`.
pub(crate) fn paint(text: &str, rarity: Rarity) -> String {
    match rarity {
        Rarity::Common => text.if_supports_color(Stdout, |t| t.white()).to_string(),
        Rarity::Uncommon => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        Rarity::Rare => text.if_supports_color(Stdout, |t| t.blue()).to_string(),
        Rarity::Epic => text.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        Rarity::Legendary => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
    }
}

pub(crate) fn rarity_tag(rarity: Rarity) -> String {
    paint(rarity.as_str(), rarity)
}

/// Banner text for a verdict, without color. Untracked items are safe to sell.
pub(crate) fn verdict_text(verdict: ItemVerdict) -> String {
    match verdict {
        ItemVerdict::Keep(n) => format!("KEEP x{}", n),
        ItemVerdict::SafeToSell | ItemVerdict::Unknown => "SAFE TO SELL".to_string(),
    }
}

pub(crate) fn verdict_description(verdict: ItemVerdict) -> &'static str {
    match verdict {
        ItemVerdict::Keep(_) => "Required for future upgrades.",
        ItemVerdict::SafeToSell => "All requirements for this item are already met.",
        ItemVerdict::Unknown => "Not found in any project or workshop requirements.",
    }
}

pub(crate) fn verdict_banner(verdict: ItemVerdict) -> String {
    let text = verdict_text(verdict);
    match verdict {
        ItemVerdict::Keep(_) => text
            .if_supports_color(Stdout, |t| t.style(Style::new().bright_red().bold()))
            .to_string(),
        ItemVerdict::SafeToSell => text
            .if_supports_color(Stdout, |t| t.style(Style::new().green().bold()))
            .to_string(),
        ItemVerdict::Unknown => text.if_supports_color(Stdout, |t| t.green()).to_string(),
    }
}

/// A text progress bar such as `[####------]`.
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
