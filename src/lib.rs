use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod render;

pub use config::SceneConfig;
pub use error::BootstrapError;
pub use render::{initialize, RenderResult, RenderedScene};

use render::CanvasSurface;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Already installed when the module is instantiated twice
    let _ = logging::init();
}

/// Draw the built-in triangle on the canvas with the given element id
#[wasm_bindgen]
pub fn init_demo(canvas_id: &str) -> Result<(), JsValue> {
    run_demo(canvas_id, &SceneConfig::default())
}

/// Draw a scene described by a YAML config
#[wasm_bindgen]
pub fn init_demo_with_config(canvas_id: &str, yaml: &str) -> Result<(), JsValue> {
    let config = SceneConfig::from_yaml(yaml).map_err(to_js)?;
    run_demo(canvas_id, &config)
}

fn run_demo(canvas_id: &str, config: &SceneConfig) -> Result<(), JsValue> {
    let surface = CanvasSurface::from_id(canvas_id).map_err(to_js)?;
    initialize(&surface, config).map(|_| ()).map_err(to_js)
}

fn to_js(err: BootstrapError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
