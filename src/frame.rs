use field_core::{Clock, FieldController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::WebSurface;

pub type SharedController = Rc<RefCell<FieldController<WebSurface>>>;

pub struct FrameContext {
    pub controller: SharedController,
    pub clock: Clock,
}

impl FrameContext {
    /// Run one field frame. Returns `false` once the field is gone.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.controller.borrow_mut().on_frame(now).is_some()
    }
}

/// Drive `step` from requestAnimationFrame until it returns `false`.
pub fn start_loop(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}
