//! Immutable catalogs and form data behind the customizer

mod form;
mod palette;
mod theme;

pub use form::{
    Build, FieldUpdate, FormError, FormValues, Measurement, HEIGHT_RANGE_CM, MAX_SHIRT_TEXT_CHARS,
    MAX_SHIRT_TEXT_LINES, WEIGHT_RANGE_KG,
};
pub use palette::{parse_hex_rgb, ShirtColor, BLACK, SHIRT_COLORS, WHITE};
pub use theme::{Theme, ThemeIndex, THEMES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_index_wraps() {
        let mut index = ThemeIndex::default();
        for i in 0..10 {
            assert_eq!(index.get(), i % THEMES.len());
            index = index.next();
        }
        assert_eq!(ThemeIndex::new(7).get(), 3);
        assert_eq!(ThemeIndex::new(4).theme().name, "Classic");
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(ShirtColor::default().hex(), "#FFFFFF");
        assert_eq!(ShirtColor::from_hex("#1abc9c").map(|c| c.hex()), Some("#1ABC9C"));
        assert!(ShirtColor::from_hex("#123456").is_none());
        assert_eq!(ShirtColor::all().count(), 12);
        assert!(ShirtColor::from_hex(BLACK).is_some_and(|c| c.is_black()));
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#FFA500"), Some((255, 165, 0)));
        assert_eq!(parse_hex_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_rgb("FFA500"), None);
        assert_eq!(parse_hex_rgb("#GGGGGG"), None);
        assert_eq!(parse_hex_rgb("#éé"), None);
    }

    #[test]
    fn test_measurement_prefix_parsing() {
        assert_eq!(Measurement::parse("175"), Measurement::Value(175));
        assert_eq!(Measurement::parse("  175cm"), Measurement::Value(175));
        assert_eq!(Measurement::parse("-5"), Measurement::Value(-5));
        assert_eq!(Measurement::parse(""), Measurement::Invalid);
        assert_eq!(Measurement::parse("abc"), Measurement::Invalid);
        assert_eq!(Measurement::parse("99999999999"), Measurement::Invalid);
        // Out-of-range values are kept as typed
        assert_eq!(Measurement::parse("500"), Measurement::Value(500));
    }

    #[test]
    fn test_apply_replaces_single_field() {
        let mut form = FormValues::default();
        form.apply(FieldUpdate::Height(Measurement::Value(150)));
        assert_eq!(form.height, Measurement::Value(150));
        assert_eq!(form.weight, Measurement::Value(80));
        assert_eq!(form.build, Build::Athletic);

        form.apply(FieldUpdate::Build(Build::Big));
        assert_eq!(form.build, Build::Big);
        assert_eq!(form.height, Measurement::Value(150));
    }

    #[test]
    fn test_shirt_text_is_truncated() {
        let mut form = FormValues::default();
        form.apply(FieldUpdate::ShirtText("é".repeat(150)));
        assert_eq!(form.shirt_text_chars(), MAX_SHIRT_TEXT_CHARS);
    }

    #[test]
    fn test_field_update_parse() {
        assert_eq!(
            FieldUpdate::parse("weight", "72"),
            Ok(FieldUpdate::Weight(Measurement::Value(72)))
        );
        assert_eq!(FieldUpdate::parse("build", "lean"), Ok(FieldUpdate::Build(Build::Lean)));
        assert_eq!(
            FieldUpdate::parse("build", "huge"),
            Err(FormError::UnknownBuild("huge".to_string()))
        );
        assert_eq!(
            FieldUpdate::parse("color", "#FFF"),
            Err(FormError::UnknownField("color".to_string()))
        );
    }

    #[test]
    fn test_visible_line_count() {
        let mut form = FormValues::default();
        assert_eq!(form.visible_line_count(), 1);
        form.apply(FieldUpdate::ShirtText("A\nB".into()));
        assert_eq!(form.visible_line_count(), 2);
        form.apply(FieldUpdate::ShirtText("A\nB\nC\nD\nE".into()));
        assert_eq!(form.visible_line_count(), 3);
    }
}
