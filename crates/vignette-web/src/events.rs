use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use vignette_core::SceneState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the pointermove handler. Every event converts CSS coordinates to NDC
/// and pushes them through the selection tracker; the cursor follows the
/// hover state.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        let Some([ndc_x, ndc_y]) =
            input::pointer_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
        else {
            return;
        };

        let mut scene = scene.borrow_mut();
        scene.on_pointer_move(ndc_x, ndc_y);

        let cursor = if scene.hovering().is_some() {
            "pointer"
        } else {
            "default"
        };
        _ = canvas.style().set_property("cursor", cursor);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
