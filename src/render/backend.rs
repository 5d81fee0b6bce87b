//! The graphics-API calls the bootstrap issues.
//!
//! All GPU state lives behind the backend value; the pipeline only ever
//! borrows it, so tests can substitute a recording implementation.

use std::fmt;

use crate::mesh::AttributeLayout;

/// Programmable pipeline stage a shader object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// How a draw call interprets the bound vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
}

pub trait GraphicsBackend {
    type Shader;
    type Program;
    type Buffer;

    /// Set the clear color and clear the color and depth buffers
    fn clear(&self, color: [f32; 4]);

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn link_status(&self, program: &Self::Program) -> bool;
    fn validate_program(&self, program: &Self::Program);
    fn validate_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    /// Bind as the active vertex array buffer
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    /// Upload to the bound array buffer with a static-draw usage hint
    fn upload_static(&self, data: &[f32]);

    /// Attribute location by name, `-1` if the program has no such input
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    /// Describe a float, non-normalized attribute read pattern
    fn vertex_attrib_pointer(&self, location: u32, attribute: &AttributeLayout, stride: i32);
    fn enable_vertex_attrib_array(&self, location: u32);

    fn use_program(&self, program: &Self::Program);
    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32);
}
