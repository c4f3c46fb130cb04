//! Gallows geometry.
//!
//! Every drawing stage maps to a fixed set of rectangles in canvas
//! units, origin at the top-left corner and y growing downward. The
//! table is the single source of truth for what each stage draws.

use serde::{Deserialize, Serialize};

/// Minimum canvas width the gallows fits in.
pub const MIN_CANVAS_WIDTH: u32 = 410;

/// Minimum canvas height the gallows fits in.
pub const MIN_CANVAS_HEIGHT: u32 = 420;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {}) {}x{}", x, y, width, height)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// One step of the gallows drawing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Stage {
    /// Top beam, noose, main beam and platform; drawn at round start.
    Base,
    /// First wrong guess.
    Head,
    /// Second wrong guess.
    Body,
    /// Third wrong guess.
    LeftArm,
    /// Fourth wrong guess.
    RightArm,
    /// Fifth wrong guess.
    LeftLeg,
    /// Sixth wrong guess; the round is lost.
    RightLeg,
}

const BASE: [Rect; 4] = [
    Rect::new(95, 10, 150, 10),  // top
    Rect::new(245, 10, 10, 50),  // noose
    Rect::new(95, 10, 10, 400),  // main beam
    Rect::new(10, 410, 175, 10), // platform
];
const HEAD: [Rect; 1] = [Rect::new(230, 60, 40, 40)];
const BODY: [Rect; 1] = [Rect::new(245, 60, 10, 200)];
const LEFT_ARM: [Rect; 1] = [Rect::new(155, 120, 90, 10)];
const RIGHT_ARM: [Rect; 1] = [Rect::new(245, 120, 90, 10)];
const LEFT_LEG: [Rect; 1] = [Rect::new(155, 250, 90, 10)];
const RIGHT_LEG: [Rect; 1] = [Rect::new(245, 250, 90, 10)];

impl Stage {
    /// Body-part stages in the order wrong guesses reveal them.
    pub const WRONG_GUESS_ORDER: [Stage; 6] = [
        Stage::Head,
        Stage::Body,
        Stage::LeftArm,
        Stage::RightArm,
        Stage::LeftLeg,
        Stage::RightLeg,
    ];

    /// Rectangles filled for this stage, in draw order.
    pub fn rects(self) -> &'static [Rect] {
        match self {
            Stage::Base => &BASE,
            Stage::Head => &HEAD,
            Stage::Body => &BODY,
            Stage::LeftArm => &LEFT_ARM,
            Stage::RightArm => &RIGHT_ARM,
            Stage::LeftLeg => &LEFT_LEG,
            Stage::RightLeg => &RIGHT_LEG,
        }
    }

    /// Stage drawn when the wrong-guess counter first reaches `count`.
    ///
    /// Returns `None` for zero and for anything past six.
    pub fn for_wrong_guess(count: u8) -> Option<Stage> {
        let index = usize::from(count).checked_sub(1)?;
        Self::WRONG_GUESS_ORDER.get(index).copied()
    }
}
