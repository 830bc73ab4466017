#![cfg(target_arch = "wasm32")]
use crate::core::{ExperienceSettings, ScrollSignal, SmokeSystem};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ascent-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Load persisted settings, falling back to defaults. A parse failure logs
/// the normalized message and commits nothing.
fn load_settings_or_default() -> ExperienceSettings {
    match storage::load_settings() {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            let defaults = ExperienceSettings::default();
            if let Err(e) = storage::save_settings(&defaults) {
                log::warn!("settings: {}", e);
            }
            defaults
        }
        Err(e) => {
            log::warn!("settings: {}", e);
            ExperienceSettings::default()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let settings = load_settings_or_default();
    if !settings.show_hud {
        overlay::hide_hud(&document);
    }

    // One clock for scroll timestamps and the frame loop
    let epoch = Instant::now();

    let scroll = Rc::new(RefCell::new(ScrollSignal::new()));
    events::wire_scroll(scroll.clone(), epoch);
    // Initial sample so a reloaded mid-page document starts at the right pose
    if let Some((top, height, viewport)) = dom::scroll_metrics() {
        scroll.borrow_mut().on_scroll(top, height, viewport, 0.0);
    }

    let gpu = frame::init_gpu(&canvas, &settings).await;
    let smoke = SmokeSystem::new(settings.particle_count, settings.seed);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scroll,
        smoke,
        settings,
        canvas,
        document,
        gpu,
        epoch,
        last_instant: Instant::now(),
        star_rot: [0.0, 0.0],
        smoke_visuals: Vec::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
