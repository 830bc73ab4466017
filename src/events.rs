use crate::core::ScrollSignal;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the window scroll listener into the shared scroll signal.
///
/// `epoch` anchors event timestamps to the same clock the frame loop uses
/// for the quiescence window.
pub fn wire_scroll(scroll: Rc<RefCell<ScrollSignal>>, epoch: Instant) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some((top, height, viewport)) = dom::scroll_metrics() {
            let now_sec = epoch.elapsed().as_secs_f64();
            scroll.borrow_mut().on_scroll(top, height, viewport, now_sec);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store sized to CSS size * devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
