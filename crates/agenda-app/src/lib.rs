//! Agenda App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It builds the store and the briefing adapter and hands them to the egui UI.

mod app;

use agenda_types::config::AppConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "agenda_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Agenda WASM starting...");

    let config = AppConfig::from_build_env();

    let canvas = gloo_utils::document()
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(app::AgendaApp::new(cc, config)))),
        )
        .await
}
