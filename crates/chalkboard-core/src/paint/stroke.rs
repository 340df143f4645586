use crate::paint::style::StrokeStyle;
use glam::Vec3;

/// One freehand gesture. Points are append-only until the stroke is sealed.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Vec3>,
    style: StrokeStyle,
    sealed: bool,
}

impl Stroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
            sealed: false,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub(crate) fn push(&mut self, point: Vec3) -> bool {
        if self.sealed {
            return false;
        }
        self.points.push(point);
        true
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }
}

/// Every sealed stroke on the board, oldest first.
#[derive(Clone, Debug, Default)]
pub struct StrokeBoard {
    strokes: Vec<Stroke>,
    revision: u64,
}

impl StrokeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Bumped on every visible change, including edits to the active stroke.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn push(&mut self, stroke: Stroke) -> usize {
        debug_assert!(stroke.is_sealed());
        self.strokes.push(stroke);
        self.touch();
        self.strokes.len() - 1
    }

    /// Remove everything; returns how many strokes were dropped.
    pub(crate) fn clear(&mut self) -> usize {
        let n = self.strokes.len();
        self.strokes.clear();
        self.touch();
        n
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
