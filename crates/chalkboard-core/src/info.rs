//! Text for the music-analysis read-outs and the vertical side info.

/// Circular ease-in, `t` clamped to 0..=1.
#[inline]
pub fn circ_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t * t).sqrt()
}

/// `"{position} / {length} [{pct}%]"` where pct is the eased beat progress.
pub fn beat_label(position: u32, length: u32, progress: f64) -> String {
    let pct = (circ_in(progress) * 100.0).ceil() as u32;
    format!("{} / {} [{}%]", position, length, pct)
}

/// Valence over arousal; `None` when arousal is zero or either is non-finite.
pub fn valence_arousal_ratio(valence: f64, arousal: f64) -> Option<f64> {
    (valence.is_finite() && arousal.is_finite() && arousal != 0.0).then(|| valence / arousal)
}

/// One character per line.
pub fn to_vertical(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Vertical Japanese date, `weekday` counted from Sunday = 0.
pub fn vertical_date(month: u32, day: u32, weekday: u32) -> String {
    let wd = WEEKDAYS[(weekday % 7) as usize];
    format!("{}\n月\n{}\n日\n({})", month, day, wd)
}

/// Playback position as `m:ss`; negative or non-finite input reads `0:00`.
pub fn position_label(position_ms: f64) -> String {
    let secs = if position_ms.is_finite() && position_ms > 0.0 {
        (position_ms / 1000.0).floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", secs / 60, secs % 60)
}
