//! Garment drawing in a 200x220 view box

pub type Point = (f32, f32);

pub const VIEW_BOX: (f32, f32) = (200.0, 220.0);

/// Closed outline of body and sleeves
pub const BODY_OUTLINE: [Point; 10] = [
    (40.0, 40.0),
    (70.0, 10.0),
    (130.0, 10.0),
    (160.0, 40.0),
    (150.0, 60.0),
    (140.0, 50.0),
    (140.0, 200.0),
    (60.0, 200.0),
    (60.0, 50.0),
    (50.0, 60.0),
];

/// The outline split into convex pieces for fill-only painters
pub const TORSO: [Point; 6] = [
    (70.0, 10.0),
    (130.0, 10.0),
    (140.0, 50.0),
    (140.0, 200.0),
    (60.0, 200.0),
    (60.0, 50.0),
];
pub const LEFT_SLEEVE: [Point; 4] = [(70.0, 10.0), (60.0, 50.0), (50.0, 60.0), (40.0, 40.0)];
pub const RIGHT_SLEEVE: [Point; 4] = [(130.0, 10.0), (160.0, 40.0), (150.0, 60.0), (140.0, 50.0)];

/// Quadratic collar curve: start, control, end
pub const COLLAR: [Point; 3] = [(70.0, 10.0), (100.0, 30.0), (130.0, 10.0)];

pub const SLEEVE_SEAMS: [[Point; 3]; 2] = [
    [(70.0, 10.0), (40.0, 40.0), (50.0, 60.0)],
    [(130.0, 10.0), (160.0, 40.0), (150.0, 60.0)],
];

pub const OUTLINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoldShape {
    Line(Point, Point),
    Cubic([Point; 4]),
}

/// Dashed fabric fold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fold {
    pub shape: FoldShape,
    /// Dash and gap length
    pub dash: (f32, f32),
    pub opacity: f32,
}

pub const FOLDS: [Fold; 3] = [
    Fold {
        shape: FoldShape::Line((100.0, 50.0), (100.0, 160.0)),
        dash: (2.0, 8.0),
        opacity: 0.5,
    },
    Fold {
        shape: FoldShape::Cubic([(80.0, 50.0), (90.0, 70.0), (90.0, 100.0), (80.0, 120.0)]),
        dash: (1.0, 10.0),
        opacity: 0.3,
    },
    Fold {
        shape: FoldShape::Cubic([(120.0, 50.0), (110.0, 70.0), (110.0, 100.0), (120.0, 120.0)]),
        dash: (1.0, 10.0),
        opacity: 0.3,
    },
];

/// Centered box the uploaded design is fitted into: (x, y, width, height)
pub const IMAGE_BOX: (f32, f32, f32, f32) = (64.0, 74.0, 72.0, 72.0);

/// Anchor the print text block is centered on
pub const TEXT_CENTER: Point = (100.0, 110.0);
pub const TEXT_SIZE: f32 = 14.0;
pub const LINE_HEIGHT: f32 = 18.0;

/// Baseline y for each of `count` centered lines
pub fn line_baselines(count: usize) -> impl Iterator<Item = f32> {
    let block = LINE_HEIGHT * count.saturating_sub(1) as f32;
    let first = TEXT_CENTER.1 - block / 2.0;
    (0..count).map(move |i| first + LINE_HEIGHT * i as f32)
}
