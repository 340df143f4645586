use crate::events::DomChalkControls;
use crate::info::InfoLabels;
use crate::lyrics::DomTextSink;
use crate::panel::PanelWidgets;
use crate::player::{CommandQueue, PlayerHandle};
use chalkboard_core::{
    BoardConfig, BoardSurface, ControlPanel, LyricStage, LyricSync, PaintSession, PanelEvent,
    PlaybackState, SyncEvent, Timeline, TimeUpdateThrottle, TIME_UPDATE_THROTTLE_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page mutates, behind one `Rc<RefCell<_>>`.
pub struct App {
    pub sync: LyricSync,
    pub stage: LyricStage,
    pub text: DomTextSink,
    pub paint: PaintSession,
    pub panel: ControlPanel,
    pub commands: CommandQueue,
    pub playback: PlaybackState,
    pub throttle: TimeUpdateThrottle,
    pub board: BoardSurface,
    pub controls: DomChalkControls,
    pub widgets: PanelWidgets,
    pub info: InfoLabels,
}

impl App {
    pub fn new(
        document: &web::Document,
        config: BoardConfig,
        width: f32,
        height: f32,
    ) -> anyhow::Result<Self> {
        let paint = PaintSession::new(config.paint);
        let panel = ControlPanel::new(&paint);
        Ok(Self {
            sync: LyricSync::new(Timeline::empty(), config.sync),
            stage: LyricStage::new(config.layout),
            text: DomTextSink::new(document)?,
            paint,
            panel,
            commands: CommandQueue::default(),
            playback: PlaybackState::default(),
            throttle: TimeUpdateThrottle::new(TIME_UPDATE_THROTTLE_MS),
            board: BoardSurface::screen_board(width, height),
            controls: DomChalkControls::new(document)?,
            widgets: PanelWidgets::new(document)?,
            info: InfoLabels::new(document)?,
        })
    }

    /// Once per frame: follow the player's last reported position.
    pub fn tick_lyrics(&mut self) {
        let events = self.sync.tick(&self.playback);
        self.apply_sync_events(&events);
    }

    pub fn apply_sync_events(&mut self, events: &[SyncEvent]) {
        if events.is_empty() {
            return;
        }
        if let Err(e) = self
            .stage
            .apply(self.sync.timeline(), events, &mut self.text)
        {
            log::error!("[lyrics] {}", e);
        }
    }

    pub fn load_timeline(&mut self, timeline: Timeline) {
        log::info!("[lyrics] timeline loaded: {} phrases", timeline.len());
        let events = self.sync.load(timeline);
        self.apply_sync_events(&events);
        self.panel.set_music_changed(false);
        self.show_loading();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
        let events = self.sync.pause();
        self.apply_sync_events(&events);
    }

    pub fn resume(&mut self) {
        self.sync.resume();
        self.playback.play();
    }

    pub fn stop(&mut self) {
        let events = self.sync.stop();
        self.apply_sync_events(&events);
        self.playback.stop();
        self.throttle.reset();
        self.info.show_position(0.0);
    }

    /// Returns whether the position read-out was refreshed.
    pub fn time_update(&mut self, position_ms: f64) -> bool {
        self.playback.set_position(position_ms);
        let emit = self.throttle.should_emit(position_ms);
        if emit {
            self.info.show_position(position_ms);
        }
        emit
    }

    pub fn handle_panel(&mut self, event: PanelEvent) {
        let jump = self.sync.timeline().first_start_ms();
        let outcome = self
            .panel
            .handle(event, &mut self.paint, &mut self.commands, jump);
        if outcome.refresh_widgets {
            self.widgets.refresh(&self.panel, &self.paint);
        }
        self.show_loading();
    }

    /// The indicator spins while a selected song has no lyrics yet.
    pub fn show_loading(&self) {
        self.info.set_loading(self.panel.music_changed());
    }
}

/// Route a panel event through the app, then hand the queued player
/// commands over once the borrow is gone.
pub fn dispatch(app: &Rc<RefCell<App>>, player: &PlayerHandle, event: PanelEvent) {
    let commands = {
        let mut a = app.borrow_mut();
        a.handle_panel(event);
        a.commands.drain()
    };
    for command in &commands {
        command.send(player);
    }
}
