use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Page scroll offset, total scrollable height and viewport height, in CSS px.
#[derive(Clone, Copy, Debug)]
pub struct ScrollMetrics {
    pub top: f32,
    pub height: f32,
    pub viewport: f32,
}

#[inline]
pub fn read_scroll(document: &web::Document) -> Option<ScrollMetrics> {
    let el = document.scrolling_element()?;
    Some(ScrollMetrics {
        top: el.scroll_top() as f32,
        height: el.scroll_height() as f32,
        viewport: el.client_height() as f32,
    })
}
