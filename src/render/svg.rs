use std::fmt::Write;

use super::geometry::{
    line_baselines, FoldShape, Point, BODY_OUTLINE, COLLAR, FOLDS, IMAGE_BOX, OUTLINE_WIDTH,
    SLEEVE_SEAMS, TEXT_CENTER, TEXT_SIZE, VIEW_BOX,
};
use super::PreviewScene;

impl PreviewScene<'_> {
    /// Standalone SVG markup for the preview
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writing into a String can't fail
        let _ = self.write_svg(&mut svg);
        svg
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            VIEW_BOX.0, VIEW_BOX.1
        )?;

        writeln!(
            out,
            r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            closed_path(&BODY_OUTLINE),
            self.fill,
            self.outline,
            OUTLINE_WIDTH
        )?;
        let [start, control, end] = COLLAR;
        writeln!(
            out,
            r#"  <path d="M{} Q{} {}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            pt(start),
            pt(control),
            pt(end),
            self.outline,
            OUTLINE_WIDTH
        )?;
        for seam in &SLEEVE_SEAMS {
            writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                open_path(seam),
                self.outline,
                OUTLINE_WIDTH
            )?;
        }

        for fold in &FOLDS {
            let d = match fold.shape {
                FoldShape::Line(a, b) => format!("M{} L{}", pt(a), pt(b)),
                FoldShape::Cubic([a, b, c, d]) => {
                    format!("M{} C{} {} {}", pt(a), pt(b), pt(c), pt(d))
                }
            };
            writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="1" stroke-dasharray="{},{}" opacity="{}"/>"#,
                d, self.fold_stroke, fold.dash.0, fold.dash.1, fold.opacity
            )?;
        }

        if let Some(uri) = self.image {
            let (x, y, w, h) = IMAGE_BOX;
            writeln!(
                out,
                r#"  <image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/>"#,
                escape_xml(uri),
                x,
                y,
                w,
                h
            )?;
        }

        let lines = self.lines();
        if lines.iter().any(|l| !l.is_empty()) {
            writeln!(
                out,
                r#"  <g font-family="{}" font-size="{}" font-weight="600" fill="{}" text-anchor="middle" dominant-baseline="middle">"#,
                escape_xml(self.theme.font),
                TEXT_SIZE,
                self.text_color
            )?;
            for (line, y) in lines.iter().zip(line_baselines(lines.len())) {
                writeln!(
                    out,
                    r#"    <text x="{}" y="{}">{}</text>"#,
                    TEXT_CENTER.0,
                    y,
                    escape_xml(line)
                )?;
            }
            writeln!(out, "  </g>")?;
        }

        writeln!(out, "</svg>")
    }
}

fn pt((x, y): Point) -> String {
    format!("{},{}", x, y)
}

fn open_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, &p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&pt(p));
    }
    d
}

fn closed_path(points: &[Point]) -> String {
    format!("{} Z", open_path(points))
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShirtColor, THEMES};

    #[test]
    fn test_outline_path_matches_silhouette() {
        assert_eq!(
            closed_path(&BODY_OUTLINE),
            "M40,40 L70,10 L130,10 L160,40 L150,60 L140,50 L140,200 L60,200 L60,50 L50,60 Z"
        );
    }

    #[test]
    fn test_svg_contains_fill_and_lines() {
        let color = ShirtColor::from_hex("#FF0000").unwrap();
        let scene = PreviewScene::build(&THEMES[0], color, None, "HELLO\nWORLD\nFOO\nBAR");
        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#FF0000""##));
        assert!(svg.contains(">HELLO</text>"));
        assert!(svg.contains(">FOO</text>"));
        assert!(!svg.contains("BAR"));
        assert_eq!(svg.matches("<text ").count(), 3);
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_svg_escapes_text_and_includes_image() {
        let scene = PreviewScene::build(
            &THEMES[1],
            ShirtColor::default(),
            Some("data:image/png;base64,AA=="),
            "<b>&",
        );
        let svg = scene.to_svg();
        assert!(svg.contains(">&lt;b&gt;&amp;</text>"));
        assert!(svg.contains(r#"<image href="data:image/png;base64,AA==""#));
    }

    #[test]
    fn test_empty_text_renders_no_text_group() {
        let scene = PreviewScene::build(&THEMES[0], ShirtColor::default(), None, "");
        assert!(!scene.to_svg().contains("<text"));
    }

    #[test]
    fn test_baselines_are_centered() {
        let ys: Vec<f32> = line_baselines(3).collect();
        assert_eq!(ys, vec![92.0, 110.0, 128.0]);
        let single: Vec<f32> = line_baselines(1).collect();
        assert_eq!(single, vec![110.0]);
    }
}
