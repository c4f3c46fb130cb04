//! Drawing surface abstraction.

use super::geometry::{Rect, Stage};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A 2-D surface the gallows is drawn on.
///
/// Coordinates are canvas units with the origin at the top-left.
pub trait Canvas {
    /// Surface width.
    fn width(&self) -> u32;

    /// Surface height.
    fn height(&self) -> u32;

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect);

    /// Clears an axis-aligned rectangle.
    fn clear_rect(&mut self, rect: Rect);

    /// The whole drawable area.
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Clears the whole surface.
    fn clear(&mut self) {
        let bounds = self.bounds();
        self.clear_rect(bounds);
    }

    /// Fills every rectangle of a stage, in table order.
    fn draw_stage(&mut self, stage: Stage) {
        for rect in stage.rects() {
            self.fill_rect(*rect);
        }
    }
}

/// A single call made against a [`DisplayList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCall {
    /// `fill_rect` was called.
    Fill(Rect),
    /// `clear_rect` was called.
    Clear(Rect),
}

/// In-memory canvas that records draw calls.
///
/// Keeps the full call history alongside the rectangles that are still
/// visible, so front-ends can render it and tests can assert on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayList {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    visible: Vec<Rect>,
}

impl DisplayList {
    /// Creates an empty display list of the given size.
    #[instrument]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Filled rectangles not yet covered by a clear.
    pub fn visible(&self) -> &[Rect] {
        &self.visible
    }

    /// Filled rectangles, oldest first.
    pub fn fills(&self) -> impl Iterator<Item = Rect> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Fill(rect) => Some(*rect),
            DrawCall::Clear(_) => None,
        })
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(super::geometry::MIN_CANVAS_WIDTH, super::geometry::MIN_CANVAS_HEIGHT)
    }
}

impl Canvas for DisplayList {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect) {
        trace!(%rect, "fill");
        self.calls.push(DrawCall::Fill(rect));
        self.visible.push(rect);
    }

    fn clear_rect(&mut self, rect: Rect) {
        trace!(%rect, "clear");
        self.calls.push(DrawCall::Clear(rect));
        // Partially covered fills stay; the list has no pixel model.
        self.visible.retain(|fill| !rect.contains(fill));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_removes_covered_fills() {
        let mut list = DisplayList::default();
        list.draw_stage(Stage::Base);
        list.draw_stage(Stage::Head);
        assert_eq!(list.visible().len(), 5);

        list.clear();
        assert!(list.visible().is_empty());
        assert_eq!(list.calls().last(), Some(&DrawCall::Clear(Rect::new(0, 0, 410, 420))));
    }

    #[test]
    fn test_partial_clear_keeps_outside_fills() {
        let mut list = DisplayList::default();
        list.draw_stage(Stage::Head);
        list.draw_stage(Stage::RightLeg);

        list.clear_rect(Rect::new(200, 50, 100, 100));
        assert_eq!(list.visible(), Stage::RightLeg.rects());
    }

    #[test]
    fn test_repeated_draw_is_additive() {
        let mut list = DisplayList::default();
        list.draw_stage(Stage::Body);
        list.draw_stage(Stage::Body);
        assert_eq!(list.fills().count(), 2);
        assert_eq!(list.visible().len(), 2);
    }
}
