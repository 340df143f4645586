use crate::dom;
use chalkboard_core::info::{
    beat_label, position_label, to_vertical, valence_arousal_ratio, vertical_date,
};
use chalkboard_core::EMPTY_LABEL;
use web_sys as web;

/// Music-analysis read-outs, song info and the loading indicator.
pub struct InfoLabels {
    song: web::Element,
    artist: web::Element,
    side_title: web::Element,
    side_date: web::Element,
    beats: web::Element,
    chords: web::Element,
    valence: web::Element,
    arousal: web::Element,
    va_ratio: web::Element,
    amplitude: web::Element,
    position: web::Element,
    loading: web::Element,
}

impl InfoLabels {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let el = |id: &str| dom::require_element(document, id);
        Ok(Self {
            song: el("song")?,
            artist: el("artist")?,
            side_title: el("side-title")?,
            side_date: el("side-date")?,
            beats: el("beats")?,
            chords: el("chords")?,
            valence: el("va-valence")?,
            arousal: el("va-arousal")?,
            va_ratio: el("va-result")?,
            amplitude: el("amplitude")?,
            position: el("position")?,
            loading: el("loading")?,
        })
    }

    pub fn show_song(&self, title: &str, artist: &str) {
        dom::set_text(&self.song, title);
        dom::set_text(&self.artist, artist);
        let side = format!("{}\n\n{}", to_vertical(title), to_vertical(artist));
        dom::set_text(&self.side_title, &side);
    }

    pub fn show_today(&self) {
        let now = js_sys::Date::new_0();
        let text = vertical_date(now.get_month() + 1, now.get_date(), now.get_day());
        dom::set_text(&self.side_date, &text);
    }

    pub fn show_beat(&self, position: u32, length: u32, progress: f64) {
        dom::set_text(&self.beats, &beat_label(position, length, progress));
    }

    pub fn show_chord(&self, name: &str) {
        let name = if name.is_empty() { EMPTY_LABEL } else { name };
        dom::set_text(&self.chords, name);
    }

    pub fn show_valence_arousal(&self, valence: f64, arousal: f64) {
        dom::set_text(&self.valence, &valence.to_string());
        dom::set_text(&self.arousal, &arousal.to_string());
        let ratio = valence_arousal_ratio(valence, arousal)
            .map_or_else(|| EMPTY_LABEL.to_string(), |r| format!("{:.3}", r));
        dom::set_text(&self.va_ratio, &ratio);
    }

    pub fn show_amplitude(&self, amplitude: f64) {
        dom::set_text(&self.amplitude, &format!("{:.0}", amplitude));
    }

    pub fn show_position(&self, position_ms: f64) {
        dom::set_text(&self.position, &position_label(position_ms));
    }

    /// The indicator spins until the element carries the `loaded` class.
    pub fn set_loading(&self, loading: bool) {
        let classes = self.loading.class_list();
        let _ = if loading {
            classes.remove_1("loaded")
        } else {
            classes.add_1("loaded")
        };
    }
}
