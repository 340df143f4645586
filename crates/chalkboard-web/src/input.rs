use chalkboard_core::{PanelEvent, ThemeColor};
use glam::Vec2;
use web_sys as web;

const ERASER_BUTTON_ID: &str = "eraser";

/// Canvas placement in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    #[inline]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn of(canvas: &web::HtmlCanvasElement) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Client (CSS pixel) position to normalised device coordinates of the
/// canvas: x right, y up. Positions outside the canvas map outside -1..=1
/// and are left for the ray cast to reject.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, rect: &CanvasRect) -> Option<Vec2> {
    if rect.is_empty() || !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = (client_y - rect.top) / rect.height;
    Some(Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

/// Pointer events that end a mouse/pen stroke. Leaving the canvas seals the
/// stroke like a release; coming back starts nothing until the next press.
pub const POINTER_SEAL_EVENTS: [&str; 3] = ["pointerup", "pointerleave", "pointercancel"];

/// Pointer events with this type are handled by the touch listeners.
#[inline]
pub fn is_touch_pointer(pointer_type: &str) -> bool {
    pointer_type == "touch"
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        &CanvasRect::of(canvas),
    )
}

#[inline]
pub fn touch_ndc(touch: &web::Touch, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    client_to_ndc(
        touch.client_x() as f32,
        touch.client_y() as f32,
        &CanvasRect::of(canvas),
    )
}

/// Backing-store size for a CSS size at the given device pixel ratio.
#[inline]
pub fn backing_size(css: Vec2, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css.x as f64 * dpr) as u32;
    let h = (css.y as f64 * dpr) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn is_landscape(width: f64, height: f64) -> bool {
    height <= width
}

/// Map a chalk button id to its panel event.
#[inline]
pub fn chalk_button_event(id: &str) -> Option<PanelEvent> {
    if id == ERASER_BUTTON_ID {
        return Some(PanelEvent::ToggleEraser);
    }
    ThemeColor::from_id(id).map(PanelEvent::ChalkPicked)
}
