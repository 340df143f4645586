#![cfg(target_arch = "wasm32")]
use chalkboard_core::{BoardConfig, PanelEvent, Timeline};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod dom;
mod events;
mod frame;
mod info;
mod input;
mod lyrics;
mod panel;
mod player;
mod render;

use app::App;
pub use player::PlayerHandle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chalkboard-web starting");
    Ok(())
}

/// Wire the page to `player` and start drawing. The page glue forwards the
/// player's listener callbacks to the returned [`Board`].
#[wasm_bindgen(js_name = createBoard)]
pub async fn create_board(player: PlayerHandle) -> Result<Board, JsValue> {
    init(player)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

async fn init(player: PlayerHandle) -> anyhow::Result<Board> {
    let config = BoardConfig::default();
    config.validate()?;
    dom::check_orientation();

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::require_as(&document, "board-canvas")?;
    dom::sync_canvas_backing_size(&canvas);
    let size = input::CanvasRect::of(&canvas).size();

    let app = Rc::new(RefCell::new(App::new(&document, config, size.x, size.y)?));
    let player = Rc::new(player);

    panel::wire_panel(&document, &app, &player)?;
    events::wire_chalk_buttons(&document, &app, &player)?;
    events::wire_pointer_handlers(&canvas, &app);
    events::wire_touch_handlers(&canvas, &app);

    {
        let mut a = app.borrow_mut();
        a.info.show_today();
        // nothing is loaded until the glue selects the first song
        a.panel.set_music_changed(true);
        a.show_loading();
        a.widgets.refresh(&a.panel, &a.paint);
    }

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[frame] no WebGPU; strokes are captured but not drawn");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        app.clone(),
        canvas,
        gpu,
    )));
    frame::start_loop(frame_ctx);

    log::info!("chalkboard-web ready");
    Ok(Board { app, player })
}

/// Handle the page glue drives from the player's listeners.
#[wasm_bindgen]
pub struct Board {
    app: Rc<RefCell<App>>,
    player: Rc<PlayerHandle>,
}

#[wasm_bindgen]
impl Board {
    /// `phrases`: `[{ text, startTime, endTime, children: [word, ..] }, ..]`.
    #[wasm_bindgen(js_name = loadTimeline)]
    pub fn load_timeline(&self, phrases: JsValue) -> Result<(), JsValue> {
        let timeline = lyrics::parse_phrases(&phrases)
            .and_then(|p| Timeline::new(p).map_err(anyhow::Error::from))
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        self.app.borrow_mut().load_timeline(timeline);
        Ok(())
    }

    /// Same as picking the song in the panel's list.
    #[wasm_bindgen(js_name = selectSong)]
    pub fn select_song(&self, index: usize) {
        app::dispatch(&self.app, &self.player, PanelEvent::SelectSong(index));
    }

    #[wasm_bindgen(js_name = timeUpdate)]
    pub fn time_update(&self, position_ms: f64) {
        self.app.borrow_mut().time_update(position_ms);
    }

    pub fn play(&self) {
        self.app.borrow_mut().resume();
    }

    pub fn pause(&self) {
        self.app.borrow_mut().pause();
    }

    pub fn stop(&self) {
        self.app.borrow_mut().stop();
    }

    #[wasm_bindgen(js_name = showSong)]
    pub fn show_song(&self, title: &str, artist: &str) {
        self.app.borrow().info.show_song(title, artist);
    }

    #[wasm_bindgen(js_name = showBeat)]
    pub fn show_beat(&self, position: u32, length: u32, progress: f64) {
        self.app.borrow().info.show_beat(position, length, progress);
    }

    #[wasm_bindgen(js_name = showChord)]
    pub fn show_chord(&self, name: &str) {
        self.app.borrow().info.show_chord(name);
    }

    #[wasm_bindgen(js_name = showValenceArousal)]
    pub fn show_valence_arousal(&self, valence: f64, arousal: f64) {
        self.app.borrow().info.show_valence_arousal(valence, arousal);
    }

    #[wasm_bindgen(js_name = showAmplitude)]
    pub fn show_amplitude(&self, amplitude: f64) {
        self.app.borrow().info.show_amplitude(amplitude);
    }
}
