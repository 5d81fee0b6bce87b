use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext, WebGlShader};

use crate::mesh::AttributeLayout;
use super::backend::{GraphicsBackend, Primitive, ShaderStage};

/// Wrapper around a WebGL 1 context
pub struct WebGLContext {
    pub gl: WebGlRenderingContext,
}

impl WebGLContext {
    pub fn new(gl: WebGlRenderingContext) -> Self {
        Self { gl }
    }

    fn shader_type(stage: ShaderStage) -> u32 {
        match stage {
            ShaderStage::Vertex => WebGlRenderingContext::VERTEX_SHADER,
            ShaderStage::Fragment => WebGlRenderingContext::FRAGMENT_SHADER,
        }
    }

    fn program_flag(&self, program: &WebGlProgram, pname: u32) -> bool {
        self.gl
            .get_program_parameter(program, pname)
            .as_bool()
            .unwrap_or(false)
    }
}

impl GraphicsBackend for WebGLContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;

    fn clear(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(WebGlRenderingContext::COLOR_BUFFER_BIT | WebGlRenderingContext::DEPTH_BUFFER_BIT);
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        self.gl.create_shader(Self::shader_type(stage))
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, WebGlRenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.gl.get_shader_info_log(shader).unwrap_or_default()
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        self.program_flag(program, WebGlRenderingContext::LINK_STATUS)
    }

    fn validate_program(&self, program: &WebGlProgram) {
        self.gl.validate_program(program);
    }

    fn validate_status(&self, program: &WebGlProgram) -> bool {
        self.program_flag(program, WebGlRenderingContext::VALIDATE_STATUS)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.gl.get_program_info_log(program).unwrap_or_default()
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.gl.bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
    }

    fn upload_static(&self, data: &[f32]) {
        // Safety: the view is consumed by buffer_data before any allocation
        // can move the wasm memory backing `data`
        unsafe {
            let array = js_sys::Float32Array::view(data);
            self.gl.buffer_data_with_array_buffer_view(
                WebGlRenderingContext::ARRAY_BUFFER,
                &array,
                WebGlRenderingContext::STATIC_DRAW,
            );
        }
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.gl.get_attrib_location(program, name)
    }

    fn vertex_attrib_pointer(&self, location: u32, attribute: &AttributeLayout, stride: i32) {
        self.gl.vertex_attrib_pointer_with_i32(
            location,
            attribute.components,
            WebGlRenderingContext::FLOAT,
            false,
            stride,
            attribute.offset,
        );
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.gl.enable_vertex_attrib_array(location);
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        let mode = match mode {
            Primitive::Triangles => WebGlRenderingContext::TRIANGLES,
        };
        self.gl.draw_arrays(mode, first, count);
    }
}
