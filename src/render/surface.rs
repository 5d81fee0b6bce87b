use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext, Window};

use crate::error::BootstrapError;
use super::backend::GraphicsBackend;
use super::webgl::WebGLContext;

/// Context type names, in the order they are negotiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    WebGl,
    /// Legacy name used by older browsers
    ExperimentalWebGl,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
        }
    }
}

/// Something a graphics context can be bound to
pub trait DrawingSurface {
    type Backend: GraphicsBackend;

    /// Request a context of the given kind; `None` when unsupported
    fn context(&self, kind: ContextKind) -> Option<Self::Backend>;

    /// Blocking, user-visible notification
    fn notify_user(&self, message: &str);
}

/// A `<canvas>` element in the current document
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        Self { window, canvas }
    }

    /// Look up a canvas element by id
    pub fn from_id(id: &str) -> Result<Self, BootstrapError> {
        let not_found = || BootstrapError::SurfaceNotFound(id.to_string());

        let window = web_sys::window().ok_or_else(not_found)?;
        let canvas = window
            .document()
            .and_then(|doc| doc.get_element_by_id(id))
            .ok_or_else(not_found)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| not_found())?;

        Ok(Self::new(window, canvas))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    type Backend = WebGLContext;

    fn context(&self, kind: ContextKind) -> Option<WebGLContext> {
        let object = match self.canvas.get_context(kind.as_str()) {
            Ok(object) => object?,
            Err(e) => {
                warn!("getContext('{}') threw: {:?}", kind.as_str(), e);
                return None;
            }
        };

        object
            .dyn_into::<WebGlRenderingContext>()
            .ok()
            .map(WebGLContext::new)
    }

    fn notify_user(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("alert failed: {:?}", e);
        }
    }
}
