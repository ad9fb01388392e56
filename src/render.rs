use field_core::{RenderError, RenderSink, Scene};
use field_render::GpuState;
use web_sys as web;

use crate::dom;

/// The GPU renderer plus the canvas it draws into. Resizes go to the canvas
/// backing store first so the surface and the element agree.
pub struct WebSurface {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState<'static>,
}

impl WebSurface {
    pub fn new(canvas: web::HtmlCanvasElement, gpu: GpuState<'static>) -> Self {
        Self { canvas, gpu }
    }
}

impl RenderSink for WebSurface {
    fn resize(&mut self, width: u32, height: u32) {
        dom::sync_canvas_backing_size(&self.canvas, width, height);
        self.gpu.resize(width, height);
    }

    fn draw(&mut self, scene: &Scene<'_>) -> Result<(), RenderError> {
        self.gpu.draw(scene)
    }

    fn release(&mut self) {
        self.gpu.release();
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    let (w, h) = dom::backing_size(canvas);
    dom::sync_canvas_backing_size(canvas, w, h);
    match GpuState::new(wgpu::SurfaceTarget::Canvas(canvas.clone()), w, h).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init error, hero field disabled: {}", e);
            None
        }
    }
}
