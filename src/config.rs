use serde::{Deserialize, Serialize};

use crate::error::BootstrapError;
use crate::mesh::{Vertex, TRIANGLE};
use crate::render::shaders::{TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER};

/// Light grey-green background
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.75, 0.85, 0.8, 1.0];

/// GLSL source for both shader stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            vertex: TRIANGLE_VERTEX_SHADER.to_string(),
            fragment: TRIANGLE_FRAGMENT_SHADER.to_string(),
        }
    }
}

/// Everything the bootstrap draws. Any field left out of the YAML keeps
/// the built-in triangle scene value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shaders: ShaderSources,
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    /// Run `validateProgram` after linking and abort if it reports failure
    pub validate_program: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shaders: ShaderSources::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            vertices: TRIANGLE.to_vec(),
            validate_program: true,
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, BootstrapError> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Geometry must form whole triangles, colors must lie in [0, 1] and
    /// positions must be finite. Positions outside [-1, 1] are clipped by
    /// the GPU, not rejected.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.vertices.is_empty() || self.vertices.len() % 3 != 0 {
            return Err(BootstrapError::InvalidConfig(format!(
                "vertex count {} is not a non-zero multiple of 3",
                self.vertices.len()
            )));
        }

        if !self.clear_color.iter().all(|&c| is_unit(c)) {
            return Err(BootstrapError::InvalidConfig(format!(
                "clear color {:?} outside [0, 1]",
                self.clear_color
            )));
        }

        for (i, vertex) in self.vertices.iter().enumerate() {
            if !vertex.position.iter().all(|p| p.is_finite()) {
                return Err(BootstrapError::InvalidConfig(format!(
                    "vertex {} position {:?} is not finite",
                    i, vertex.position
                )));
            }
            if !vertex.color.iter().all(|&c| is_unit(c)) {
                return Err(BootstrapError::InvalidConfig(format!(
                    "vertex {} color {:?} outside [0, 1]",
                    i, vertex.color
                )));
            }
        }

        Ok(())
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertices.len() as i32
    }
}

// NaN fails the range check
fn is_unit(c: f32) -> bool {
    (0.0..=1.0).contains(&c)
}
