//! Brand palettes for the light and dark themes.
//!
//! Emitted as CSS custom properties scoped to the site root, so switching
//! theme is a class change on that element only.

/// One theme's colours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub destructive: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    foreground: "#0f172a",
    muted: "#f1f5f9",
    muted_foreground: "#64748b",
    card: "#ffffff",
    border: "#e2e8f0",
    primary: "#2563eb",
    secondary: "#7c3aed",
    accent: "#0891b2",
    destructive: "#dc2626",
};

pub const DARK: Palette = Palette {
    background: "#0b1120",
    foreground: "#e2e8f0",
    muted: "#111a2e",
    muted_foreground: "#94a3b8",
    card: "#0f172a",
    border: "#1e293b",
    primary: "#60a5fa",
    secondary: "#a78bfa",
    accent: "#22d3ee",
    destructive: "#f87171",
};

impl Palette {
    /// Custom property declarations
    pub fn css_vars(&self) -> String {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("card", self.card),
            ("border", self.border),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("destructive", self.destructive),
        ]
        .iter()
        .map(|(name, value)| format!("--{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Rules binding both palettes to the site root
pub fn theme_variables() -> String {
    format!(
        ".site-root {{ {} }}\n.site-root.dark {{ {} }}\n",
        LIGHT.css_vars(),
        DARK.css_vars()
    )
}
