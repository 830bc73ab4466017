use web_sys as web;

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

/// Raw scroll inputs: (scroll_top, scroll_height, viewport_height).
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let scroll_top = window.scroll_y().ok()?;
    let scroll_height = f64::from(root.scroll_height());
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_top, scroll_height, viewport_height))
}
