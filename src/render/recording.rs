//! Test doubles: a backend that records every call, a surface with a
//! scripted set of supported context kinds, and a log capture.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::mesh::AttributeLayout;
use super::backend::{GraphicsBackend, Primitive, ShaderStage};
use super::surface::{ContextKind, DrawingSurface};

pub const PROGRAM: u32 = 1;
pub const BUFFER: u32 = 7;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear([f32; 4]),
    CreateShader(ShaderStage),
    ShaderSource(ShaderStage, String),
    CompileShader(ShaderStage),
    CreateProgram,
    AttachShader(ShaderStage),
    LinkProgram,
    ValidateProgram,
    CreateBuffer,
    BindArrayBuffer(u32),
    UploadStatic(Vec<f32>),
    AttribLocation(String),
    VertexAttribPointer { location: u32, components: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    UseProgram(u32),
    DrawArrays { mode: Primitive, first: i32, count: i32 },
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_validate: bool,
    pub missing_attribute: Option<&'static str>,
    pub context_lost: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(pred)
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn uploaded(&self) -> Option<Vec<f32>> {
        self.calls.borrow().iter().find_map(|c| match c {
            Call::UploadStatic(data) => Some(data.clone()),
            _ => None,
        })
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphicsBackend for RecordingBackend {
    type Shader = ShaderStage;
    type Program = u32;
    type Buffer = u32;

    fn clear(&self, color: [f32; 4]) {
        self.record(Call::Clear(color));
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderStage> {
        self.record(Call::CreateShader(stage));
        (!self.context_lost).then_some(stage)
    }

    fn shader_source(&self, shader: &ShaderStage, source: &str) {
        self.record(Call::ShaderSource(*shader, source.to_string()));
    }

    fn compile_shader(&self, shader: &ShaderStage) {
        self.record(Call::CompileShader(*shader));
    }

    fn compile_status(&self, shader: &ShaderStage) -> bool {
        self.fail_compile != Some(*shader)
    }

    fn shader_info_log(&self, shader: &ShaderStage) -> String {
        format!("0:1: {} syntax error", shader)
    }

    fn create_program(&self) -> Option<u32> {
        self.record(Call::CreateProgram);
        Some(PROGRAM)
    }

    fn attach_shader(&self, _program: &u32, shader: &ShaderStage) {
        self.record(Call::AttachShader(*shader));
    }

    fn link_program(&self, _program: &u32) {
        self.record(Call::LinkProgram);
    }

    fn link_status(&self, _program: &u32) -> bool {
        !self.fail_link
    }

    fn validate_program(&self, _program: &u32) {
        self.record(Call::ValidateProgram);
    }

    fn validate_status(&self, _program: &u32) -> bool {
        !self.fail_validate
    }

    fn program_info_log(&self, _program: &u32) -> String {
        if self.fail_link {
            "varying fragColor not written".to_string()
        } else {
            "invalid program state".to_string()
        }
    }

    fn create_buffer(&self) -> Option<u32> {
        self.record(Call::CreateBuffer);
        Some(BUFFER)
    }

    fn bind_array_buffer(&self, buffer: &u32) {
        self.record(Call::BindArrayBuffer(*buffer));
    }

    fn upload_static(&self, data: &[f32]) {
        self.record(Call::UploadStatic(data.to_vec()));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> i32 {
        self.record(Call::AttribLocation(name.to_string()));
        if self.missing_attribute == Some(name) {
            return -1;
        }
        match name {
            "vertPosition" => 0,
            "vertColor" => 1,
            _ => -1,
        }
    }

    fn vertex_attrib_pointer(&self, location: u32, attribute: &AttributeLayout, stride: i32) {
        self.record(Call::VertexAttribPointer {
            location,
            components: attribute.components,
            stride,
            offset: attribute.offset,
        });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        self.record(Call::DrawArrays { mode, first, count });
    }
}

/// Surface that hands out a prepared backend for the supported kinds only
pub struct ScriptedSurface {
    supported: Vec<ContextKind>,
    backend: RefCell<Option<RecordingBackend>>,
    pub requested: RefCell<Vec<ContextKind>>,
    pub notifications: RefCell<Vec<String>>,
}

impl ScriptedSurface {
    pub fn new(supported: &[ContextKind], backend: RecordingBackend) -> Self {
        Self {
            supported: supported.to_vec(),
            backend: RefCell::new(Some(backend)),
            requested: RefCell::new(Vec::new()),
            notifications: RefCell::new(Vec::new()),
        }
    }

    pub fn unsupported() -> Self {
        Self::new(&[], RecordingBackend::new())
    }
}

impl DrawingSurface for ScriptedSurface {
    type Backend = RecordingBackend;

    fn context(&self, kind: ContextKind) -> Option<RecordingBackend> {
        self.requested.borrow_mut().push(kind);
        if self.supported.contains(&kind) {
            self.backend.borrow_mut().take()
        } else {
            None
        }
    }

    fn notify_user(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps records per thread, so parallel tests see only their own output
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return what it logged on this thread
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });

    CAPTURED.with(|c| c.borrow_mut().clear());
    let result = f();
    let logs = CAPTURED.with(|c| c.borrow_mut().drain(..).collect());
    (result, logs)
}

pub fn logged(logs: &[(Level, String)], level: Level, needle: &str) -> bool {
    logs.iter().any(|(l, msg)| *l == level && msg.contains(needle))
}
