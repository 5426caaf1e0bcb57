use crate::model::{ShirtColor, Theme, BLACK, MAX_SHIRT_TEXT_LINES, WHITE};

/// Everything needed to draw the garment preview.
///
/// Built fresh from state each frame; holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewScene<'a> {
    pub theme: &'static Theme,
    pub fill: &'static str,
    pub outline: &'static str,
    pub fold_stroke: &'static str,
    pub image: Option<&'a str>,
    /// Every `\n`-separated segment of the print text
    pub all_lines: Vec<&'a str>,
    pub text_color: &'static str,
}

impl<'a> PreviewScene<'a> {
    pub fn build(
        theme: &'static Theme,
        color: ShirtColor,
        image: Option<&'a str>,
        shirt_text: &'a str,
    ) -> Self {
        Self {
            theme,
            fill: color.hex(),
            outline: theme.accent,
            fold_stroke: fold_stroke(color),
            image,
            all_lines: shirt_text.split('\n').collect(),
            text_color: text_color(theme, color),
        }
    }

    /// Lines actually printed on the garment
    pub fn lines(&self) -> &[&'a str] {
        let shown = self.all_lines.len().min(MAX_SHIRT_TEXT_LINES);
        &self.all_lines[..shown]
    }
}

/// Print text color: theme text on white, white on black, black otherwise
pub fn text_color(theme: &'static Theme, color: ShirtColor) -> &'static str {
    if color.is_white() {
        theme.text
    } else if color.is_black() {
        WHITE
    } else {
        BLACK
    }
}

pub fn fold_stroke(color: ShirtColor) -> &'static str {
    if color.is_white() {
        "#EFEFEF"
    } else if color.is_black() {
        "#222222"
    } else {
        color.hex()
    }
}
