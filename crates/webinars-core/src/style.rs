//! Card color schemes
//!
//! Cards pick a scheme by position. The palette currently holds a single
//! blue scheme, so every card looks the same.

use serde::Serialize;

/// CSS classes for the colored parts of one card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    pub top_border: &'static str,
    pub badge: &'static str,
    pub avatar: &'static str,
    pub date_icon: &'static str,
    pub button: &'static str,
    pub hover_badge: &'static str,
}

impl CardStyle {
    /// Badge classes for the current hover state
    pub const fn badge_class(&self, hovered: bool) -> &'static str {
        if hovered { self.hover_badge } else { self.badge }
    }
}

const PALETTE: &[CardStyle] = &[CardStyle {
    top_border: "bg-blue-600",
    badge: "bg-blue-600",
    avatar: "bg-blue-600",
    date_icon: "bg-blue-600",
    button: "bg-blue-600 hover:bg-blue-700",
    hover_badge: "bg-blue-700",
}];

/// Scheme for the card at `index`, rotating through the palette
pub const fn card_style(index: usize) -> &'static CardStyle {
    &PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_card_gets_same_style() {
        let first = card_style(0);
        for i in 0..12 {
            assert_eq!(card_style(i), first);
        }
    }

    #[test]
    fn test_badge_class_follows_hover() {
        let style = card_style(3);
        assert_eq!(style.badge_class(false), "bg-blue-600");
        assert_eq!(style.badge_class(true), "bg-blue-700");
    }
}
