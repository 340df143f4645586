use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element every part of the page depends on. A missing anchor
/// is a broken page, so initialisation stops here.
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn require_as<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    require_element(document, id)?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(element: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listen for `input`/`change` style events that carry no payload of interest.
#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Non-passive listener, needed wherever the handler calls `preventDefault`
/// on touch input.
pub fn add_active_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn set_text(element: &web::Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = input::CanvasRect::of(canvas);
        let (w_px, h_px) = input::backing_size(rect.size(), w.device_pixel_ratio());
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

/// The board is laid out for landscape screens; portrait only gets a warning.
pub fn check_orientation() -> bool {
    let Some(w) = web::window() else {
        return true;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let landscape = input::is_landscape(width, height);
    if !landscape {
        log::warn!(
            "[dom] portrait viewport {}x{}; rotate the device to landscape",
            width,
            height
        );
    }
    landscape
}
