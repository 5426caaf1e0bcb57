use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length of the print text, in characters
pub const MAX_SHIRT_TEXT_CHARS: usize = 100;
/// Number of print text lines that make it onto the garment
pub const MAX_SHIRT_TEXT_LINES: usize = 3;

pub const HEIGHT_RANGE_CM: (i32, i32) = (120, 220);
pub const WEIGHT_RANGE_KG: (i32, i32) = (30, 200);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("unknown build option: {0}")]
    UnknownBuild(String),
}

/// A body measurement as typed by the user.
///
/// Values are never clamped; the input widget's range only guides entry.
/// Text that doesn't start with an integer is kept as `Invalid` until corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Value(i32),
    Invalid,
}

impl Measurement {
    /// Parse with integer-prefix semantics: leading whitespace and sign are
    /// accepted, digits are read until the first non-digit ("175cm" -> 175).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits_len == 0 {
            return Measurement::Invalid;
        }
        match rest[..digits_len].parse::<i64>() {
            Ok(value) => {
                let value = if negative { -value } else { value };
                i32::try_from(value)
                    .map(Measurement::Value)
                    .unwrap_or(Measurement::Invalid)
            }
            Err(_) => Measurement::Invalid,
        }
    }

}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Value(v) => write!(f, "{}", v),
            Measurement::Invalid => Ok(()),
        }
    }
}

/// Body type category. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    pub fn label(self) -> &'static str {
        match self {
            Build::Lean => "lean",
            Build::Regular => "regular",
            Build::Athletic => "athletic",
            Build::Big => "big",
        }
    }
}

impl FromStr for Build {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Build::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| FormError::UnknownBuild(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub height: Measurement,
    pub weight: Measurement,
    pub build: Build,
    pub shirt_text: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            height: Measurement::Value(180),
            weight: Measurement::Value(80),
            build: Build::Athletic,
            shirt_text: String::new(),
        }
    }
}

/// A replacement value for exactly one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Height(Measurement),
    Weight(Measurement),
    Build(Build),
    ShirtText(String),
}

impl FieldUpdate {
    /// Build an update from a field name and the raw widget text
    pub fn parse(field: &str, raw: &str) -> Result<Self, FormError> {
        match field {
            "height" => Ok(FieldUpdate::Height(Measurement::parse(raw))),
            "weight" => Ok(FieldUpdate::Weight(Measurement::parse(raw))),
            "build" => Ok(FieldUpdate::Build(raw.parse()?)),
            "shirtText" | "shirt_text" => Ok(FieldUpdate::ShirtText(raw.to_string())),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl FormValues {
    /// Replace one field, leaving the rest untouched. Print text is cut at
    /// [`MAX_SHIRT_TEXT_CHARS`].
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Height(m) => self.height = m,
            FieldUpdate::Weight(m) => self.weight = m,
            FieldUpdate::Build(b) => self.build = b,
            FieldUpdate::ShirtText(text) => self.shirt_text = truncate_chars(text, MAX_SHIRT_TEXT_CHARS),
        }
    }

    pub fn shirt_text_chars(&self) -> usize {
        self.shirt_text.chars().count()
    }

    /// Lines counter shown under the text box
    pub fn visible_line_count(&self) -> usize {
        self.shirt_text.split('\n').count().min(MAX_SHIRT_TEXT_LINES)
    }
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
