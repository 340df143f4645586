use crate::app::{self, App};
use crate::dom;
use crate::player::PlayerHandle;
use chalkboard_core::{
    ChalkColor, ControlPanel, PaintSession, PanelEvent, LINE_WIDTH_MAX, LINE_WIDTH_MIN,
    LINE_WIDTH_STEP, SONGS, VOLUME_MAX,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inputs of the control panel whose value mirrors engine state.
pub struct PanelWidgets {
    volume: web::HtmlInputElement,
    line_width: web::HtmlInputElement,
    color: web::HtmlInputElement,
    eraser: web::HtmlInputElement,
}

impl PanelWidgets {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let song_select: web::HtmlSelectElement = dom::require_as(document, "song-select")?;
        let widgets = Self {
            volume: dom::require_as(document, "volume")?,
            line_width: dom::require_as(document, "line-width")?,
            color: dom::require_as(document, "line-color")?,
            eraser: dom::require_as(document, "eraser-mode")?,
        };
        for (i, song) in SONGS.iter().enumerate() {
            let option = document
                .create_element("option")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            option
                .set_attribute("value", &i.to_string())
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            option.set_text_content(Some(song.title));
            song_select
                .append_child(&option)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        widgets.volume.set_min("0");
        widgets.volume.set_max(&VOLUME_MAX.to_string());
        widgets.volume.set_step("1");
        widgets.line_width.set_min(&LINE_WIDTH_MIN.to_string());
        widgets.line_width.set_max(&LINE_WIDTH_MAX.to_string());
        widgets.line_width.set_step(&LINE_WIDTH_STEP.to_string());
        widgets.eraser.set_type("checkbox");
        Ok(widgets)
    }

    pub fn refresh(&self, panel: &ControlPanel, paint: &PaintSession) {
        self.volume.set_value(&panel.volume().to_string());
        self.line_width.set_value(&paint.style().width().to_string());
        self.color.set_value(&panel.color().to_hex());
        self.eraser.set_checked(panel.eraser());
    }
}

fn wire_button(
    document: &web::Document,
    id: &str,
    app: &Rc<RefCell<App>>,
    player: &Rc<PlayerHandle>,
    event: PanelEvent,
) -> anyhow::Result<()> {
    let el = dom::require_element(document, id)?;
    let app = app.clone();
    let player = player.clone();
    dom::add_click_listener(&el, move || app::dispatch(&app, &player, event));
    Ok(())
}

fn wire_input(
    target: &web::HtmlElement,
    event_name: &str,
    app: &Rc<RefCell<App>>,
    player: &Rc<PlayerHandle>,
    to_event: impl Fn(&web::Event) -> Option<PanelEvent> + 'static,
) {
    let app = app.clone();
    let player = player.clone();
    dom::add_listener(target, event_name, move |ev| {
        if let Some(event) = to_event(&ev) {
            app::dispatch(&app, &player, event);
        }
    });
}

fn input_of(ev: &web::Event) -> Option<web::HtmlInputElement> {
    ev.target()?.dyn_into::<web::HtmlInputElement>().ok()
}

/// Hook the panel's buttons and inputs to [`ControlPanel::handle`].
pub fn wire_panel(
    document: &web::Document,
    app: &Rc<RefCell<App>>,
    player: &Rc<PlayerHandle>,
) -> anyhow::Result<()> {
    wire_button(document, "play", app, player, PanelEvent::Play)?;
    wire_button(document, "pause", app, player, PanelEvent::Pause)?;
    wire_button(document, "stop", app, player, PanelEvent::Stop)?;
    wire_button(document, "jump", app, player, PanelEvent::Jump)?;
    wire_button(document, "clear-board", app, player, PanelEvent::ClearBoard)?;

    let select: web::HtmlSelectElement = dom::require_as(document, "song-select")?;
    wire_input(&select, "change", app, player, |ev| {
        let select = ev.target()?.dyn_into::<web::HtmlSelectElement>().ok()?;
        select.value().parse().ok().map(PanelEvent::SelectSong)
    });

    let volume: web::HtmlInputElement = dom::require_as(document, "volume")?;
    wire_input(&volume, "input", app, player, |ev| {
        Some(PanelEvent::Volume(input_of(ev)?.value_as_number()))
    });

    let width: web::HtmlInputElement = dom::require_as(document, "line-width")?;
    wire_input(&width, "input", app, player, |ev| {
        Some(PanelEvent::LineWidth(input_of(ev)?.value_as_number() as f32))
    });

    let color: web::HtmlInputElement = dom::require_as(document, "line-color")?;
    wire_input(&color, "input", app, player, |ev| {
        let value = input_of(ev)?.value();
        match value.parse::<ChalkColor>() {
            Ok(c) => Some(PanelEvent::Color(c)),
            Err(e) => {
                log::warn!("[panel] {}", e);
                None
            }
        }
    });

    let eraser: web::HtmlInputElement = dom::require_as(document, "eraser-mode")?;
    wire_input(&eraser, "change", app, player, |ev| {
        Some(PanelEvent::EraserMode(input_of(ev)?.checked()))
    });

    log::info!("[panel] controls wired");
    Ok(())
}
