use log::{debug, error, info, warn};

use crate::config::SceneConfig;
use crate::error::BootstrapError;
use crate::mesh::{pack_vertices, VertexLayout};
use super::backend::{GraphicsBackend, Primitive, ShaderStage};
use super::surface::{ContextKind, DrawingSurface};

/// Bootstrap progress. Each state is reachable only from its predecessor;
/// any failure lands in `Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Context,
    Cleared,
    ShadersCompiled,
    ProgramLinked,
    ProgramValidated,
    BufferUploaded,
    AttributesWired,
    Drawn,
    Aborted,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Context => Some(Stage::Cleared),
            Stage::Cleared => Some(Stage::ShadersCompiled),
            Stage::ShadersCompiled => Some(Stage::ProgramLinked),
            Stage::ProgramLinked => Some(Stage::ProgramValidated),
            Stage::ProgramValidated => Some(Stage::BufferUploaded),
            Stage::BufferUploaded => Some(Stage::AttributesWired),
            Stage::AttributesWired => Some(Stage::Drawn),
            Stage::Drawn | Stage::Aborted => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// GPU objects left behind by a successful bootstrap. They are never
/// released explicitly; dropping the context tears them down.
pub struct RenderedScene<B: GraphicsBackend> {
    pub backend: B,
    pub program: B::Program,
    pub buffer: B::Buffer,
    pub vertex_count: i32,
}

pub type RenderResult<B> = Result<RenderedScene<B>, BootstrapError>;

/// Obtain a context, trying the standard name before the legacy one.
/// The user is notified only when both fail.
pub fn acquire_context<S: DrawingSurface>(surface: &S) -> Result<S::Backend, BootstrapError> {
    if let Some(backend) = surface.context(ContextKind::WebGl) {
        return Ok(backend);
    }

    warn!("WebGL not supported, falling back on experimental-webgl");
    if let Some(backend) = surface.context(ContextKind::ExperimentalWebGl) {
        return Ok(backend);
    }

    let err = BootstrapError::ContextUnavailable;
    error!("{}", err);
    surface.notify_user(&err.to_string());
    Err(err)
}

/// Bind a context to `surface` and draw the configured scene once
pub fn initialize<S: DrawingSurface>(surface: &S, config: &SceneConfig) -> RenderResult<S::Backend> {
    info!("This is working");
    if let Err(err) = config.validate() {
        error!("{}", err);
        return Err(err);
    }

    let backend = acquire_context(surface)?;
    let (program, buffer) = Bootstrap::new(&backend, config).run()?;

    Ok(RenderedScene {
        backend,
        program,
        buffer,
        vertex_count: config.vertex_count(),
    })
}

/// Runs every step after context acquisition against a borrowed backend
pub struct Bootstrap<'a, B: GraphicsBackend> {
    backend: &'a B,
    config: &'a SceneConfig,
    stage: Stage,
}

impl<'a, B: GraphicsBackend> Bootstrap<'a, B> {
    pub fn new(backend: &'a B, config: &'a SceneConfig) -> Self {
        Self {
            backend,
            config,
            stage: Stage::Context,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Execute the pipeline once. The first failure aborts the rest; a
    /// finished or aborted bootstrap refuses to run again.
    pub fn run(&mut self) -> Result<(B::Program, B::Buffer), BootstrapError> {
        if self.stage != Stage::Context {
            let err = BootstrapError::InvalidTransition {
                from: self.stage,
                to: Stage::Cleared,
            };
            error!("{}", err);
            return Err(err);
        }

        match self.run_stages() {
            Ok(objects) => Ok(objects),
            Err(err) => {
                error!("{}", err);
                self.stage = Stage::Aborted;
                Err(err)
            }
        }
    }

    fn run_stages(&mut self) -> Result<(B::Program, B::Buffer), BootstrapError> {
        let gl = self.backend;
        let config = self.config;

        gl.clear(config.clear_color);
        self.advance(Stage::Cleared)?;

        let vertex_shader = self.compile(ShaderStage::Vertex, &config.shaders.vertex)?;
        let fragment_shader = self.compile(ShaderStage::Fragment, &config.shaders.fragment)?;
        self.advance(Stage::ShadersCompiled)?;

        let program = self.link(&vertex_shader, &fragment_shader)?;
        self.advance(Stage::ProgramLinked)?;

        if config.validate_program {
            self.validate(&program)?;
        } else {
            debug!("program validation skipped");
        }
        self.advance(Stage::ProgramValidated)?;

        let buffer = self.upload()?;
        self.advance(Stage::BufferUploaded)?;

        self.wire_attributes(&program)?;
        self.advance(Stage::AttributesWired)?;

        gl.use_program(&program);
        gl.draw_arrays(Primitive::Triangles, 0, config.vertex_count());
        self.advance(Stage::Drawn)?;

        Ok((program, buffer))
    }

    fn advance(&mut self, to: Stage) -> Result<(), BootstrapError> {
        if self.stage.next() != Some(to) {
            return Err(BootstrapError::InvalidTransition { from: self.stage, to });
        }
        debug!("bootstrap {:?} -> {:?}", self.stage, to);
        self.stage = to;
        Ok(())
    }

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<B::Shader, BootstrapError> {
        let gl = self.backend;

        let shader = gl
            .create_shader(stage)
            .ok_or(BootstrapError::ResourceCreation("shader"))?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        if gl.compile_status(&shader) {
            Ok(shader)
        } else {
            Err(BootstrapError::ShaderCompile {
                stage,
                log: gl.shader_info_log(&shader),
            })
        }
    }

    fn link(&self, vertex: &B::Shader, fragment: &B::Shader) -> Result<B::Program, BootstrapError> {
        let gl = self.backend;

        let program = gl
            .create_program()
            .ok_or(BootstrapError::ResourceCreation("program"))?;
        gl.attach_shader(&program, vertex);
        gl.attach_shader(&program, fragment);
        gl.link_program(&program);

        if gl.link_status(&program) {
            Ok(program)
        } else {
            Err(BootstrapError::ProgramLink {
                log: gl.program_info_log(&program),
            })
        }
    }

    // Diagnostic only, but a failure still aborts
    fn validate(&self, program: &B::Program) -> Result<(), BootstrapError> {
        let gl = self.backend;

        gl.validate_program(program);
        if gl.validate_status(program) {
            Ok(())
        } else {
            Err(BootstrapError::ProgramValidate {
                log: gl.program_info_log(program),
            })
        }
    }

    fn upload(&self) -> Result<B::Buffer, BootstrapError> {
        let gl = self.backend;

        let buffer = gl
            .create_buffer()
            .ok_or(BootstrapError::ResourceCreation("vertex buffer"))?;
        gl.bind_array_buffer(&buffer);
        gl.upload_static(&pack_vertices(&self.config.vertices));

        Ok(buffer)
    }

    fn wire_attributes(&self, program: &B::Program) -> Result<(), BootstrapError> {
        let gl = self.backend;

        // Resolve every location before touching attribute state
        let mut locations = Vec::with_capacity(VertexLayout::ATTRIBUTES.len());
        for attribute in VertexLayout::ATTRIBUTES {
            let location = u32::try_from(gl.attrib_location(program, attribute.name))
                .map_err(|_| BootstrapError::AttributeNotFound(attribute.name))?;
            locations.push((location, attribute));
        }

        for (location, attribute) in &locations {
            gl.vertex_attrib_pointer(*location, attribute, VertexLayout::STRIDE);
        }
        for (location, _) in &locations {
            gl.enable_vertex_attrib_array(*location);
        }

        Ok(())
    }
}
