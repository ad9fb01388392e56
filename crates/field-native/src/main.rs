use field_core::{
    CapabilityProbe, Clock, DeviceSignals, FieldConfig, FieldController, GraphicsCapability,
    QualitySetting, Viewport,
};
use field_render::GpuState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

/// Desktop stand-in for the browser probe: the adapter name plays the role of
/// the WebGL renderer string.
struct NativeProbe {
    adapter_name: String,
    scale_factor: f64,
}

impl CapabilityProbe for NativeProbe {
    fn signals(&self) -> DeviceSignals {
        DeviceSignals {
            graphics: GraphicsCapability::Available {
                renderer: Some(self.adapter_name.clone()),
            },
            user_agent: format!("field-native ({})", std::env::consts::OS),
            device_pixel_ratio: self.scale_factor,
        }
    }
}

fn quality_from_env() -> QualitySetting {
    match std::env::var("FIELD_QUALITY") {
        Ok(v) => v.parse().unwrap_or_else(|e| {
            log::warn!("[config] {e}; falling back to auto");
            QualitySetting::Auto
        }),
        Err(_) => QualitySetting::Auto,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hero particle field (native)")
        .build(&event_loop)?;
    let size = window.inner_size();

    let gpu = match pollster::block_on(GpuState::new(&window, size.width, size.height)) {
        Ok(g) => g,
        Err(e) => {
            // decorative only: no GPU means no field, not a crash
            log::error!("[gpu] init failed, field disabled: {e}");
            return Ok(());
        }
    };
    let probe = NativeProbe {
        adapter_name: gpu.adapter_name().to_string(),
        scale_factor: window.scale_factor(),
    };
    let config = FieldConfig::resolve(quality_from_env(), &probe);

    // the window surface must follow the window at once, so no resize debounce here
    let mut controller =
        FieldController::new(size.width, size.height).with_resize_debounce_ms(0.0);
    controller.activate(config, gpu, &mut StdRng::from_entropy())?;

    let clock = Clock::start();
    let mut viewport = Viewport::sized(size.width as f32, size.height as f32);
    let window = &window;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CursorMoved { position, .. } => {
                    let client = Vec2::new(position.x as f32, position.y as f32);
                    controller.on_pointer_move(client, &viewport, clock.now_ms());
                }
                WindowEvent::MouseWheel { .. } => controller.on_scroll(clock.now_ms()),
                WindowEvent::Resized(size) => {
                    viewport = Viewport::sized(size.width as f32, size.height as f32);
                    controller.on_resize(size.width, size.height, clock.now_ms());
                }
                WindowEvent::CloseRequested => {
                    controller.dispose();
                    elwt.exit();
                }
                _ => {}
            },
            Event::AboutToWait => match controller.on_frame(clock.now_ms()) {
                Some(_) => window.request_redraw(),
                None => {
                    if !elwt.exiting() {
                        log::warn!("[field] no longer active; closing preview");
                    }
                    elwt.exit();
                }
            },
            _ => {}
        }
    })?;
    Ok(())
}
