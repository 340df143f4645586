use crate::dom;
use chalkboard_core::{TextInterval, TextSink};
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Lyric overlay: the wrapped phrase text in one element whose opacity
/// follows the fade, plus the phrase/word read-outs of the info panel.
pub struct DomTextSink {
    lyric: web::HtmlElement,
    phrase_label: web::Element,
    word_label: web::Element,
}

impl DomTextSink {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            lyric: dom::require_as(document, "lyric")?,
            phrase_label: dom::require_element(document, "phrase")?,
            word_label: dom::require_element(document, "word")?,
        })
    }
}

impl TextSink for DomTextSink {
    fn set_text(&mut self, text: &str) {
        // innerText turns the line breaks of the wrapped phrase into <br>.
        self.lyric.set_inner_text(text);
    }

    fn set_opacity(&mut self, opacity: f32) {
        let _ = self
            .lyric
            .style()
            .set_property("opacity", &format!("{:.3}", opacity));
    }

    fn set_phrase_label(&mut self, label: &str) {
        dom::set_text(&self.phrase_label, label);
    }

    fn set_word_label(&mut self, label: &str) {
        dom::set_text(&self.word_label, label);
    }
}

fn get(obj: &JsValue, key: &str) -> anyhow::Result<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key)).map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn get_f64(obj: &JsValue, key: &str) -> anyhow::Result<f64> {
    get(obj, key)?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("`{}` is not a number", key))
}

fn parse_unit(obj: &JsValue, depth: usize) -> anyhow::Result<TextInterval> {
    let text = get(obj, "text")?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("`text` is not a string"))?;
    let mut unit = TextInterval::new(text, get_f64(obj, "startTime")?, get_f64(obj, "endTime")?);
    if depth == 0 {
        let children = get(obj, "children")?;
        if !children.is_undefined() && !children.is_null() {
            unit.children = parse_list(&children, depth + 1)?;
        }
    }
    Ok(unit)
}

fn parse_list(value: &JsValue, depth: usize) -> anyhow::Result<Vec<TextInterval>> {
    let array = value
        .dyn_ref::<Array>()
        .ok_or_else(|| anyhow::anyhow!("expected an array of text units"))?;
    array
        .iter()
        .enumerate()
        .map(|(i, v)| parse_unit(&v, depth).map_err(|e| anyhow::anyhow!("unit {}: {}", i, e)))
        .collect()
}

/// Phrases as plain objects `{ text, startTime, endTime, children }`, where
/// children are words of the same shape (times in milliseconds).
pub fn parse_phrases(value: &JsValue) -> anyhow::Result<Vec<TextInterval>> {
    parse_list(value, 0)
}
