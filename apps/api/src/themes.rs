//! Theme catalog — the 10 fixed visual themes available on the form flow.
//!
//! The catalog is a compile-time table; `lookup` is total over all string
//! inputs and resolves anything unknown to the default theme. Nothing here
//! mutates after process start.

use serde::Serialize;

/// How the portfolio page arranges its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Grid,
    Sidebar,
    Centered,
    Terminal,
}

/// Style and layout tokens for one theme. Serialized straight into the
/// template context, so field names are the template-facing contract.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub layout: LayoutKind,
    pub animation: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub font_heading: &'static str,
    pub font_body: &'static str,
    pub radius: &'static str,
    pub card_bg: &'static str,
}

/// The catalog key used when the caller omits or misspells a theme.
pub const DEFAULT_THEME_KEY: &str = "minimalist";

/// All themes, in display order. The default theme is index 0.
pub static THEMES: [ThemeDescriptor; 10] = [
    ThemeDescriptor {
        key: "minimalist",
        name: "Modern Minimal",
        layout: LayoutKind::Grid,
        animation: "fade-up",
        bg: "#ffffff",
        text: "#121212",
        accent: "#000000",
        font_heading: "'Inter', sans-serif",
        font_body: "'Inter', sans-serif",
        radius: "0px",
        card_bg: "#f9f9f9",
    },
    ThemeDescriptor {
        key: "cyberpunk",
        name: "Neon Future",
        layout: LayoutKind::Sidebar,
        animation: "flip-left",
        bg: "#050505",
        text: "#e0e0e0",
        accent: "#00ff9d",
        font_heading: "'Orbitron', sans-serif",
        font_body: "'Rajdhani', sans-serif",
        radius: "4px",
        card_bg: "rgba(0, 255, 157, 0.05)",
    },
    ThemeDescriptor {
        key: "luxury",
        name: "Golden Luxury",
        layout: LayoutKind::Centered,
        animation: "zoom-in",
        bg: "#0f0f0f",
        text: "#f0f0f0",
        accent: "#d4af37",
        font_heading: "'Playfair Display', serif",
        font_body: "'Lato', sans-serif",
        radius: "2px",
        card_bg: "#1a1a1a",
    },
    ThemeDescriptor {
        key: "nature",
        name: "Organic Earth",
        layout: LayoutKind::Grid,
        animation: "fade-right",
        bg: "#f4f1ea",
        text: "#2c3e2e",
        accent: "#4a6741",
        font_heading: "'DM Serif Display', serif",
        font_body: "'Nunito', sans-serif",
        radius: "20px",
        card_bg: "#e9e5db",
    },
    ThemeDescriptor {
        key: "terminal",
        name: "Hacker Console",
        layout: LayoutKind::Terminal,
        animation: "slide-up",
        bg: "#000000",
        text: "#00ff00",
        accent: "#00aa00",
        font_heading: "'Fira Code', monospace",
        font_body: "'Fira Code', monospace",
        radius: "0px",
        card_bg: "#111",
    },
    ThemeDescriptor {
        key: "retro",
        name: "Retro 90s",
        layout: LayoutKind::Centered,
        animation: "flip-up",
        bg: "#2b0f3a",
        text: "#ffe6f2",
        accent: "#ff00ff",
        font_heading: "'Press Start 2P', cursive",
        font_body: "'VT323', monospace",
        radius: "0px",
        card_bg: "rgba(255, 0, 255, 0.1)",
    },
    ThemeDescriptor {
        key: "corporate",
        name: "Corporate Pro",
        layout: LayoutKind::Grid,
        animation: "fade-up",
        bg: "#ffffff",
        text: "#2d3436",
        accent: "#0984e3",
        font_heading: "'Roboto', sans-serif",
        font_body: "'Open Sans', sans-serif",
        radius: "6px",
        card_bg: "#f1f2f6",
    },
    ThemeDescriptor {
        key: "brutalist",
        name: "Neo-Brutalist",
        layout: LayoutKind::Sidebar,
        animation: "zoom-out-right",
        bg: "#e0e0e0",
        text: "#000000",
        accent: "#ff4757",
        font_heading: "'Archivo Black', sans-serif",
        font_body: "'Courier Prime', monospace",
        radius: "0px",
        card_bg: "#ffffff",
    },
    ThemeDescriptor {
        key: "pastel",
        name: "Soft Pastel",
        layout: LayoutKind::Grid,
        animation: "fade-down",
        bg: "#fff0f5",
        text: "#5e548e",
        accent: "#9f86c0",
        font_heading: "'Quicksand', sans-serif",
        font_body: "'Mulish', sans-serif",
        radius: "30px",
        card_bg: "#ffffff",
    },
    ThemeDescriptor {
        key: "saas",
        name: "Dark SaaS",
        layout: LayoutKind::Grid,
        animation: "fade-up",
        bg: "#0b0c15",
        text: "#a0a0b0",
        accent: "#7c3aed",
        font_heading: "'Inter', sans-serif",
        font_body: "'Inter', sans-serif",
        radius: "12px",
        card_bg: "#151621",
    },
];

/// Resolves a theme key to its descriptor. Unknown keys resolve to the
/// default theme, so this never fails.
pub fn lookup(key: &str) -> &'static ThemeDescriptor {
    THEMES.iter().find(|t| t.key == key).unwrap_or(&THEMES[0])
}

/// The full catalog in display order, for the index page.
pub fn all() -> &'static [ThemeDescriptor] {
    &THEMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_themes_with_unique_keys() {
        assert_eq!(THEMES.len(), 10);
        let mut keys: Vec<_> = THEMES.iter().map(|t| t.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 10, "theme keys must be unique");
    }

    #[test]
    fn test_lookup_known_key() {
        let theme = lookup("cyberpunk");
        assert_eq!(theme.name, "Neon Future");
        assert_eq!(theme.layout, LayoutKind::Sidebar);
        assert_eq!(theme.accent, "#00ff9d");
    }

    #[test]
    fn test_lookup_unknown_key_returns_default() {
        for key in ["", "vaporwave", "MINIMALIST", "🦀"] {
            let theme = lookup(key);
            assert_eq!(theme.key, DEFAULT_THEME_KEY, "unknown key {key:?} must fall back");
        }
    }

    #[test]
    fn test_default_theme_is_first_entry() {
        assert_eq!(THEMES[0].key, DEFAULT_THEME_KEY);
        assert_eq!(lookup(DEFAULT_THEME_KEY).bg, "#ffffff");
    }

    #[test]
    fn test_terminal_theme_uses_terminal_layout() {
        assert_eq!(lookup("terminal").layout, LayoutKind::Terminal);
    }

    #[test]
    fn test_descriptor_serializes_layout_lowercase() {
        let json = serde_json::to_value(lookup("terminal")).unwrap();
        assert_eq!(json["layout"], "terminal");
        assert_eq!(json["animation"], "slide-up");
    }
}
