use field_core::{Clock, FieldEvent};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::SharedController;

#[derive(Clone)]
pub struct FieldWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub controller: SharedController,
    pub clock: Clock,
}

impl FieldWiring {
    fn send(&self, event: FieldEvent) {
        let now = self.clock.now_ms();
        self.controller.borrow_mut().handle(event, now);
    }
}

pub fn wire_field_events(w: FieldWiring) {
    wire_pointermove(&w);
    wire_scroll(&w);
    wire_resize(&w);
    wire_teardown(&w);
}

fn wire_pointermove(w: &FieldWiring) {
    let w2 = w.clone();
    dom::listen(&w.canvas, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = dom::canvas_viewport(&w2.canvas);
        w2.send(FieldEvent::PointerMoved { client, viewport });
    });
}

fn wire_scroll(w: &FieldWiring) {
    let w2 = w.clone();
    dom::listen(&w.window, "scroll", move |_| w2.send(FieldEvent::Scrolled));
}

fn wire_resize(w: &FieldWiring) {
    let w2 = w.clone();
    dom::listen(&w.window, "resize", move |_| {
        let (width, height) = dom::backing_size(&w2.canvas);
        w2.send(FieldEvent::Resized { width, height });
    });
}

fn wire_teardown(w: &FieldWiring) {
    let w2 = w.clone();
    dom::listen(&w.window, "beforeunload", move |_| {
        log::info!("[field] page unloading");
        w2.send(FieldEvent::Teardown);
    });
}
