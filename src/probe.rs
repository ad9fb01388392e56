use field_core::{CapabilityProbe, DeviceSignals, GraphicsCapability};
use wasm_bindgen::JsCast;
use web_sys as web;

// WEBGL_debug_renderer_info.UNMASKED_RENDERER_WEBGL
const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

/// Reads the browser's graphics and device signals for tier detection.
pub struct WebProbe {
    window: web::Window,
}

impl WebProbe {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }

    fn graphics(&self) -> GraphicsCapability {
        let Some(document) = self.window.document() else {
            return GraphicsCapability::Unavailable;
        };
        let Some(canvas) = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            return GraphicsCapability::Unavailable;
        };
        let gl = ["webgl", "experimental-webgl"].iter().find_map(|kind| {
            canvas
                .get_context(kind)
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<web::WebGlRenderingContext>().ok())
        });
        let Some(gl) = gl else {
            return GraphicsCapability::Unavailable;
        };
        let renderer = match gl.get_extension("WEBGL_debug_renderer_info") {
            Ok(Some(_)) => gl
                .get_parameter(UNMASKED_RENDERER_WEBGL)
                .ok()
                .and_then(|v| v.as_string()),
            _ => None,
        };
        GraphicsCapability::Available { renderer }
    }
}

impl CapabilityProbe for WebProbe {
    fn signals(&self) -> DeviceSignals {
        DeviceSignals {
            graphics: self.graphics(),
            user_agent: self.window.navigator().user_agent().unwrap_or_default(),
            device_pixel_ratio: self.window.device_pixel_ratio(),
        }
    }
}
