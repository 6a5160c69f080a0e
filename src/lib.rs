#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod backdrop;
mod config;
mod content;
mod dom;
mod markup;
mod scheduler;
mod surface;
mod viewport;

pub use backdrop::Backdrop;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("code-rain starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount the backdrop on another canvas by id. The caller owns the handle.
#[wasm_bindgen]
pub fn mount_backdrop(canvas_id: &str, seed: Option<u64>) -> Result<Backdrop, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    backdrop::mount(&window, canvas, seed.unwrap_or_else(rand::random::<u64>))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, config::CANVAS_ID)?;
    let seed = config::parse_seed(canvas.get_attribute(config::SEED_ATTR).as_deref())
        .unwrap_or_else(rand::random::<u64>);
    let backdrop = backdrop::mount(&window, canvas, seed)?;
    // Hand ownership to the page so scripts can call `window.codeRain.stop()`.
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(config::HANDLE_PROPERTY),
        &JsValue::from(backdrop),
    )
    .map_err(|e| anyhow!("{:?}", e))?;

    let api = config::api_base(dom::body_attribute(&document, config::API_URL_ATTR).as_deref());
    let page = content::load(&window, &api).await;
    content::render(&document, &page);
    Ok(())
}
