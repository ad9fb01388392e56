use field_core::{CursorTrail, MAX_CURSOR_TRAILS};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CURSOR_DOT_ID, CURSOR_TRAIL_SELECTOR};
use crate::dom;
use crate::frame;

/// Custom cursor: the dot follows the mouse once per animation frame and the
/// trails ease after it continuously.
pub fn wire_cursor(document: &web::Document) {
    let Some(dot) = document.get_element_by_id(CURSOR_DOT_ID) else {
        return;
    };
    let trail_elements = dom::query_all(document, CURSOR_TRAIL_SELECTOR);
    if trail_elements.is_empty() {
        return;
    }
    for extra in trail_elements.iter().skip(MAX_CURSOR_TRAILS) {
        dom::set_style(extra, "display", "none");
    }
    let trails: Vec<web::Element> = trail_elements
        .into_iter()
        .take(MAX_CURSOR_TRAILS)
        .collect();

    let state = Rc::new(RefCell::new(CursorTrail::new(trails.len())));
    let latest: Rc<Cell<Option<Vec2>>> = Rc::new(Cell::new(None));

    {
        let state = state.clone();
        let latest = latest.clone();
        dom::listen(document, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let scheduled = latest.get().is_some();
            latest.set(Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32)));
            if scheduled {
                return;
            }
            let state = state.clone();
            let latest = latest.clone();
            let dot = dot.clone();
            frame::next_frame(move || {
                if let Some(p) = latest.take() {
                    let mut s = state.borrow_mut();
                    s.set_pointer(p);
                    let t = s.dot_translation();
                    dom::set_translate(&dot, t.x, t.y);
                }
            });
        });
    }

    frame::start_loop(move || {
        let mut s = state.borrow_mut();
        s.step();
        for (el, t) in trails.iter().zip(s.trail_translations()) {
            dom::set_translate(el, t.x, t.y);
        }
        true
    });
}
