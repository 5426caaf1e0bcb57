/// A named palette and font bundle applied across the whole UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub font: &'static str,
}

pub static THEMES: [Theme; 4] = [
    Theme {
        name: "Classic",
        primary: "#3b82f6",
        secondary: "#f3f4f6",
        accent: "#111827",
        background: "#ffffff",
        text: "#1f2937",
        font: "Poppins, sans-serif",
    },
    Theme {
        name: "Dark Mode",
        primary: "#8b5cf6",
        secondary: "#1f2937",
        accent: "#f3f4f6",
        background: "#111827",
        text: "#f9fafb",
        font: "Inter, sans-serif",
    },
    Theme {
        name: "Vibrant",
        primary: "#ec4899",
        secondary: "#fdf2f8",
        accent: "#6d28d9",
        background: "#fffbeb",
        text: "#4c1d95",
        font: "Lobster, cursive",
    },
    Theme {
        name: "Ocean",
        primary: "#0ea5e9",
        secondary: "#f0f9ff",
        accent: "#0369a1",
        background: "#f0fdfa",
        text: "#0c4a6e",
        font: "Roboto Slab, serif",
    },
];

/// Index into [`THEMES`]. Always in range; arithmetic wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeIndex(usize);

impl ThemeIndex {
    pub fn new(index: usize) -> Self {
        Self(index % THEMES.len())
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    pub fn theme(self) -> &'static Theme {
        &THEMES[self.0]
    }
}
