use chalkboard_core::PlayerCommands;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The JS-side music player. Anything exposing these members works; the
    /// page glue usually passes the player SDK instance straight through.
    pub type PlayerHandle;

    #[wasm_bindgen(method, js_name = requestPlay)]
    fn request_play(this: &PlayerHandle);

    #[wasm_bindgen(method, js_name = requestPause)]
    fn request_pause(this: &PlayerHandle);

    #[wasm_bindgen(method, js_name = requestStop)]
    fn request_stop(this: &PlayerHandle);

    #[wasm_bindgen(method, js_name = requestMediaSeek)]
    fn request_media_seek(this: &PlayerHandle, position_ms: f64);

    #[wasm_bindgen(method, setter = volume)]
    fn set_volume(this: &PlayerHandle, volume: u32);

    #[wasm_bindgen(method, js_name = createFromSongUrl)]
    fn create_from_song_url(this: &PlayerHandle, url: &str);
}

/// Command for the JS player, queued while the board state is borrowed and
/// sent once the borrow is released. The player may call back into the
/// board synchronously (e.g. `requestStop` firing its stop listener).
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Stop,
    Seek(f64),
    Volume(u32),
    Load(String),
}

impl PlayerCommand {
    pub fn send(&self, player: &PlayerHandle) {
        log::debug!("[player] {:?}", self);
        match self {
            PlayerCommand::Play => player.request_play(),
            PlayerCommand::Pause => player.request_pause(),
            PlayerCommand::Stop => player.request_stop(),
            PlayerCommand::Seek(ms) => player.request_media_seek(*ms),
            PlayerCommand::Volume(v) => player.set_volume(*v),
            PlayerCommand::Load(url) => player.create_from_song_url(url),
        }
    }
}

#[derive(Debug, Default)]
pub struct CommandQueue(Vec<PlayerCommand>);

impl CommandQueue {
    pub fn drain(&mut self) -> Vec<PlayerCommand> {
        std::mem::take(&mut self.0)
    }
}

impl PlayerCommands for CommandQueue {
    fn request_play(&mut self) {
        self.0.push(PlayerCommand::Play);
    }

    fn request_pause(&mut self) {
        self.0.push(PlayerCommand::Pause);
    }

    fn request_stop(&mut self) {
        self.0.push(PlayerCommand::Stop);
    }

    fn request_media_seek(&mut self, position_ms: f64) {
        self.0.push(PlayerCommand::Seek(position_ms));
    }

    fn set_volume(&mut self, volume: u32) {
        self.0.push(PlayerCommand::Volume(volume));
    }

    fn create_from_song_url(&mut self, url: &str) {
        self.0.push(PlayerCommand::Load(url.to_string()));
    }
}
