//! Stroke capture: pointer/touch gestures in, sealed strokes out.
//!
//! `PaintSession` is the single drawing context of the app. The input layer
//! and the control panel both receive it by `&mut` instead of sharing
//! module-level state.

use crate::config::PaintConfig;
use crate::paint::projection::RayProjector;
use crate::paint::stroke::{Stroke, StrokeBoard};
use crate::paint::style::LineStyle;
use crate::theme::ChalkColor;
use glam::{Vec2, Vec3};

/// UI controls that must not react while a stroke is being drawn.
pub trait ChalkControls {
    fn set_enabled(&mut self, enabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeginOutcome {
    Started,
    MultiTouchRejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtendOutcome {
    Appended,
    RayMiss,
    NoActiveStroke,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndOutcome {
    Sealed { index: usize, points: usize },
    NoActiveStroke,
}

pub struct PaintSession {
    config: PaintConfig,
    style: LineStyle,
    board: StrokeBoard,
    active: Option<Stroke>,
}

impl PaintSession {
    pub fn new(config: PaintConfig) -> Self {
        Self {
            style: LineStyle::new(&config),
            config,
            board: StrokeBoard::new(),
            active: None,
        }
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn board(&self) -> &StrokeBoard {
        &self.board
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.board.revision()
    }

    /// Sealed strokes followed by the one being drawn, in paint order.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.board.strokes().iter().chain(self.active.as_ref())
    }

    /// Start a gesture with the style in effect right now. A gesture that
    /// reports more than one touch point is a pinch/zoom and is ignored.
    pub fn begin_stroke<C: ChalkControls + ?Sized>(
        &mut self,
        touch_count: usize,
        controls: &mut C,
    ) -> BeginOutcome {
        if touch_count > 1 {
            log::debug!("[paint] ignoring {}-finger gesture", touch_count);
            return BeginOutcome::MultiTouchRejected;
        }
        if self.active.is_some() {
            // Missed end event; close the dangling gesture first.
            self.end_stroke(controls);
        }
        self.active = Some(Stroke::new(self.style.snapshot()));
        self.board.touch();
        controls.set_enabled(false);
        BeginOutcome::Started
    }

    pub fn extend_stroke<P: RayProjector + ?Sized>(
        &mut self,
        ndc: Vec2,
        projector: &P,
    ) -> ExtendOutcome {
        let Some(stroke) = self.active.as_mut() else {
            return ExtendOutcome::NoActiveStroke;
        };
        let Some(hit) = projector.project(ndc) else {
            log::trace!("[paint] sample ({:.3},{:.3}) missed the board", ndc.x, ndc.y);
            return ExtendOutcome::RayMiss;
        };
        stroke.push(Vec3::new(hit.x, hit.y, self.config.stroke_z));
        self.board.touch();
        ExtendOutcome::Appended
    }

    /// Seal the active stroke (pointer up, touch end or pointer leaving the
    /// surface). Strokes without points are kept as empty strokes.
    pub fn end_stroke<C: ChalkControls + ?Sized>(&mut self, controls: &mut C) -> EndOutcome {
        let Some(mut stroke) = self.active.take() else {
            return EndOutcome::NoActiveStroke;
        };
        stroke.seal();
        let points = stroke.points().len();
        let index = self.board.push(stroke);
        controls.set_enabled(true);
        log::debug!("[paint] sealed stroke #{} with {} points", index, points);
        EndOutcome::Sealed { index, points }
    }

    /// Erase the whole board. An in-progress gesture keeps going on a blank
    /// stroke with the same style.
    pub fn clear_all(&mut self) -> usize {
        if let Some(active) = self.active.as_mut() {
            *active = Stroke::new(*active.style());
        }
        let removed = self.board.clear();
        log::info!("[paint] cleared {} strokes", removed);
        removed
    }

    pub fn set_width(&mut self, width: f32) -> f32 {
        self.style.set_width(width)
    }

    pub fn set_color(&mut self, color: ChalkColor) {
        self.style.set_color(color);
    }

    pub fn set_eraser(&mut self, on: bool) {
        self.style.set_eraser(on);
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.style.toggle_eraser()
    }
}
