//! Project-mix doughnut drawn by the page's Chart.js, when the page loads it.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::constants::*;

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web::Element, config: &JsValue) -> Result<Chart, JsValue>;
}

fn object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

fn array<T: Copy>(items: &[T], to_js: impl Fn(T) -> JsValue) -> JsValue {
    items.iter().map(|&v| to_js(v)).collect::<Array>().into()
}

fn chart_library_loaded() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Chart")).is_ok_and(|c| c.is_function())
}

fn doughnut_config() -> JsValue {
    let dataset = object(&[
        ("data", array(&CHART_VALUES, JsValue::from)),
        ("backgroundColor", array(&CHART_COLORS, JsValue::from_str)),
        ("borderWidth", CHART_BORDER_WIDTH.into()),
        ("borderColor", CHART_BORDER_COLOR.into()),
    ]);
    let legend = object(&[
        ("position", "bottom".into()),
        (
            "labels",
            object(&[
                ("color", CHART_LEGEND_COLOR.into()),
                ("font", object(&[("size", CHART_LEGEND_FONT_SIZE.into())])),
            ]),
        ),
    ]);
    object(&[
        ("type", "doughnut".into()),
        (
            "data",
            object(&[
                ("labels", array(&CHART_LABELS, JsValue::from_str)),
                ("datasets", Array::of1(&dataset).into()),
            ]),
        ),
        (
            "options",
            object(&[
                ("responsive", true.into()),
                ("maintainAspectRatio", false.into()),
                ("animation", object(&[("duration", CHART_ANIMATION_MS.into())])),
                ("plugins", object(&[("legend", legend)])),
            ]),
        ),
    ])
}

/// Does nothing unless the page has both the canvas and the library.
pub fn wire_project_chart(document: &web::Document) {
    let Some(canvas) = document.get_element_by_id(CHART_CANVAS_ID) else {
        return;
    };
    if !chart_library_loaded() {
        log::debug!("[chart] Chart.js not loaded; skipping #{}", CHART_CANVAS_ID);
        return;
    }
    if let Err(e) = Chart::new(&canvas, &doughnut_config()) {
        log::warn!("[chart] failed to draw project chart: {:?}", e);
    }
}
