#![cfg(target_arch = "wasm32")]
use folio_core::{CameraState, RigConfig, ScrollDamper, SlideRig, ViewTable, SCROLL_DAMPING_SEC};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let table = ViewTable::portfolio()?;
    overlay::build_slides(&document, &table)?;
    overlay::set_active(&document, &table, 0);

    let first = CameraState::from_view(table.first());
    let rig = SlideRig::new(table, RigConfig::default());
    let view = render::ViewParams::new(first.position, first.look_at);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("rendering disabled; overlay still follows scroll");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rig,
        damper: ScrollDamper::new(SCROLL_DAMPING_SEC, 0.0),
        view,
        document,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
