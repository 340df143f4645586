use crate::app::{self, App};
use crate::dom;
use crate::input;
use crate::player::PlayerHandle;
use chalkboard_core::{BeginOutcome, ChalkControls};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The chalk tray; it ignores pointer input while a stroke is drawn so a
/// gesture that slides over it keeps painting.
pub struct DomChalkControls {
    tray: web::Element,
}

impl DomChalkControls {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            tray: dom::require_element(document, "chalks")?,
        })
    }
}

impl ChalkControls for DomChalkControls {
    fn set_enabled(&mut self, enabled: bool) {
        dom::set_style(
            &self.tray,
            "pointer-events",
            if enabled { "auto" } else { "none" },
        );
    }
}

/// Every `.chalk` button in the tray must be a known colour or the eraser.
pub fn wire_chalk_buttons(
    document: &web::Document,
    app: &Rc<RefCell<App>>,
    player: &Rc<PlayerHandle>,
) -> anyhow::Result<()> {
    let tray = dom::require_element(document, "chalks")?;
    let buttons = tray
        .query_selector_all(".chalk")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..buttons.length() {
        let Some(el) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let id = el.id();
        let event = input::chalk_button_event(&id)
            .ok_or_else(|| anyhow::anyhow!("unknown chalk button #{:?}", id))?;
        let app = app.clone();
        let player = player.clone();
        dom::add_click_listener(&el, move || app::dispatch(&app, &player, event));
    }
    log::info!("[paint] {} chalk buttons wired", buttons.length());
    Ok(())
}

/// Mouse and pen. Touch pointers are left to the touch listeners so a
/// finger never starts two strokes.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    // pointerdown
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        dom::add_active_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            if input::is_touch_pointer(&ev.pointer_type()) || ev.button() != 0 {
                return;
            }
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.paint.begin_stroke(1, &mut a.controls);
            if let Some(ndc) = input::pointer_ndc(&ev, &canvas_c) {
                a.paint.extend_stroke(ndc, &a.board);
            }
            // No pointer capture: it would hold back pointerleave until release.
            ev.prevent_default();
        });
    }

    // pointermove
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        dom::add_active_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            if input::is_touch_pointer(&ev.pointer_type()) {
                return;
            }
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            if !a.paint.is_drawing() {
                return;
            }
            if let Some(ndc) = input::pointer_ndc(&ev, &canvas_c) {
                a.paint.extend_stroke(ndc, &a.board);
            }
        });
    }

    for name in input::POINTER_SEAL_EVENTS {
        let app = app.clone();
        dom::add_active_listener(canvas, name, move |ev: web::PointerEvent| {
            if input::is_touch_pointer(&ev.pointer_type()) {
                return;
            }
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.paint.end_stroke(&mut a.controls);
        });
    }
}

fn first_changed_touch(ev: &web::TouchEvent) -> Option<web::Touch> {
    ev.changed_touches().get(0)
}

pub fn wire_touch_handlers(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    // touchstart: more than one finger is a pinch, not a stroke
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        dom::add_active_listener(canvas, "touchstart", move |ev: web::TouchEvent| {
            ev.prevent_default();
            let touches = ev.touches().length() as usize;
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            if a.paint.begin_stroke(touches, &mut a.controls) == BeginOutcome::MultiTouchRejected {
                return;
            }
            if let Some(ndc) =
                first_changed_touch(&ev).and_then(|t| input::touch_ndc(&t, &canvas_c))
            {
                a.paint.extend_stroke(ndc, &a.board);
            }
        });
    }

    // touchmove
    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        dom::add_active_listener(canvas, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if ev.touches().length() > 1 {
                return;
            }
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            if !a.paint.is_drawing() {
                return;
            }
            if let Some(ndc) =
                first_changed_touch(&ev).and_then(|t| input::touch_ndc(&t, &canvas_c))
            {
                a.paint.extend_stroke(ndc, &a.board);
            }
        });
    }

    // touchend anywhere on the page seals, the finger may have left the canvas
    if let Some(window) = web::window() {
        for name in ["touchend", "touchcancel"] {
            let app = app.clone();
            dom::add_listener(&window, name, move |_ev| {
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                a.paint.end_stroke(&mut a.controls);
            });
        }
    }
}
