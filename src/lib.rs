#![cfg(target_arch = "wasm32")]
use field_core::{Clock, FieldConfig, FieldController, QualitySetting};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod chart;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod notify;
mod page;
mod probe;
mod render;

use constants::{CANVAS_ID, QUALITY_ATTRIBUTE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn quality_setting(canvas: &web::HtmlCanvasElement) -> QualitySetting {
    let raw = canvas.get_attribute(QUALITY_ATTRIBUTE).unwrap_or_default();
    raw.parse().unwrap_or_else(|e| {
        log::warn!("[config] {}; falling back to auto", e);
        QualitySetting::Auto
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // page behaviour does not depend on the hero field
    notify::ensure_container(&document);
    cursor::wire_cursor(&document);
    page::wire_page(&window, &document);

    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("[field] missing #{}; hero field disabled", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = FieldConfig::resolve(
        quality_setting(&canvas),
        &probe::WebProbe::new(window.clone()),
    );
    let Some(gpu) = render::init_gpu(&canvas).await else {
        return Ok(());
    };

    let (w, h) = dom::backing_size(&canvas);
    let mut controller = FieldController::new(w, h);
    controller.activate(
        config,
        render::WebSurface::new(canvas.clone(), gpu),
        &mut StdRng::from_entropy(),
    )?;
    let controller = Rc::new(RefCell::new(controller));
    let clock = Clock::start();

    events::wire_field_events(events::FieldWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        controller: controller.clone(),
        clock,
    });

    let mut frame_ctx = frame::FrameContext { controller, clock };
    frame::start_loop(move || frame_ctx.frame());
    Ok(())
}
