//! Proportional layout of the fork glyph.
//!
//! Every coordinate is derived from the canvas `size` alone: positions are
//! `floor(size * fraction)` and thicknesses are `max(floor, size / divisor)`,
//! so a given `(variant, size)` always yields the same primitives.

use crate::palette::{self, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconVariant {
    /// App icon on an opaque background
    Standard,
    /// Larger glyph for transparent splash screens and adaptive icons
    Splash,
    /// Simplified glyph with one uniform stroke
    Favicon,
}

impl IconVariant {
    pub const ALL: [IconVariant; 3] = [Self::Standard, Self::Splash, Self::Favicon];

    /// Smallest stroke width this variant ever draws.
    pub fn min_thickness(&self) -> u32 {
        match self {
            Self::Standard => STANDARD.trunk.min,
            Self::Splash => SPLASH.trunk.min,
            Self::Favicon => FAVICON_THICKNESS.min,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Splash => "splash",
            Self::Favicon => "favicon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A thick line segment, drawn with flat ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeSpec {
    pub from: Point,
    pub to: Point,
    pub width: u32,
    pub color: Rgba,
}

/// A filled circle that rounds off a stroke tip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscSpec {
    pub center: Point,
    pub radius: u32,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug)]
struct Thickness {
    min: u32,
    divisor: u32,
}

impl Thickness {
    fn at(&self, size: u32) -> u32 {
        self.min.max(size / self.divisor)
    }
}

#[derive(Clone, Copy, Debug)]
struct Proportions {
    top: f64,
    fork: f64,
    left: f64,
    right: f64,
    bottom: f64,
    trunk: Thickness,
    branch: Thickness,
    trunk_color: Rgba,
    branch_color: Rgba,
}

const STANDARD: Proportions = Proportions {
    top: 0.22,
    fork: 0.45,
    left: 0.28,
    right: 0.72,
    bottom: 0.78,
    trunk: Thickness { min: 20, divisor: 20 },
    branch: Thickness { min: 25, divisor: 18 },
    trunk_color: palette::BLUE_DARK,
    branch_color: palette::BLUE,
};

const SPLASH: Proportions = Proportions {
    top: 0.15,
    fork: 0.45,
    left: 0.20,
    right: 0.80,
    bottom: 0.85,
    trunk: Thickness { min: 30, divisor: 16 },
    branch: Thickness { min: 35, divisor: 14 },
    trunk_color: palette::BLUE,
    branch_color: palette::BLUE_LIGHT,
};

const FAVICON_THICKNESS: Thickness = Thickness { min: 6, divisor: 8 };
const FAVICON_MARGIN_DIVISOR: u32 = 6;

fn scaled(size: u32, fraction: f64) -> u32 {
    (size as f64 * fraction).floor() as u32
}

/// Strokes (drawn first) and discs (drawn on top) for one icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub strokes: Vec<StrokeSpec>,
    pub discs: Vec<DiscSpec>,
}

impl Layout {
    pub fn compute(variant: IconVariant, size: u32) -> Self {
        match variant {
            IconVariant::Standard => Self::forked(&STANDARD, size),
            IconVariant::Splash => Self::forked(&SPLASH, size),
            IconVariant::Favicon => Self::favicon(size),
        }
    }

    fn forked(p: &Proportions, size: u32) -> Self {
        let center_x = size / 2;
        let top = Point::new(center_x, scaled(size, p.top));
        let fork = Point::new(center_x, scaled(size, p.fork));
        let left = Point::new(scaled(size, p.left), scaled(size, p.bottom));
        let right = Point::new(scaled(size, p.right), scaled(size, p.bottom));

        let trunk_width = p.trunk.at(size);
        let branch_width = p.branch.at(size);

        let trunk = |from, to| StrokeSpec { from, to, width: trunk_width, color: p.trunk_color };
        let branch = |from, to| StrokeSpec { from, to, width: branch_width, color: p.branch_color };

        Self {
            strokes: vec![trunk(top, fork), branch(fork, left), branch(fork, right)],
            discs: vec![
                DiscSpec { center: top, radius: trunk_width / 2, color: p.trunk_color },
                DiscSpec { center: left, radius: branch_width / 2, color: p.branch_color },
                DiscSpec { center: right, radius: branch_width / 2, color: p.branch_color },
            ],
        }
    }

    fn favicon(size: u32) -> Self {
        let center_x = size / 2;
        let margin = size / FAVICON_MARGIN_DIVISOR;
        let width = FAVICON_THICKNESS.at(size);
        let color = palette::BLUE;

        let top = Point::new(center_x, margin);
        let fork = Point::new(center_x, size / 2);
        let left = Point::new(margin, size - margin);
        let right = Point::new(size - margin, size - margin);

        let stroke = |from, to| StrokeSpec { from, to, width, color };
        let disc = |center| DiscSpec { center, radius: width / 2, color };

        Self {
            strokes: vec![stroke(top, fork), stroke(fork, left), stroke(fork, right)],
            discs: vec![disc(top), disc(left), disc(right)],
        }
    }

    /// Width of the trunk, the first stroke drawn.
    pub fn trunk_width(&self) -> u32 {
        self.strokes.first().map(|s| s.width).unwrap_or_default()
    }

    /// Where the trunk meets the branches.
    pub fn fork_point(&self) -> Option<Point> {
        self.strokes.first().map(|s| s.to)
    }
}
