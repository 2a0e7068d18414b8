//! Paint
//!
//! Bundles everything about a fill except its geometry: the flat color, an
//! optional shader that overrides it, and the blend operator. The shader is
//! borrowed mutably because drawing sets its context for the current
//! transform.

use crate::blend::BlendMode;
use crate::color::Color;
use crate::shader::Shader;

/// Fill settings for a draw call
#[derive(Default)]
pub struct Paint<'a> {
    /// Flat fill color, ignored when a shader is set
    pub color: Color,
    /// Optional per-pixel color source
    pub shader: Option<&'a mut dyn Shader>,
    /// Blend operator, source-over by default
    pub blend_mode: BlendMode,
}

impl<'a> Paint<'a> {
    /// Solid-color paint with the default blend mode
    pub fn new(color: Color) -> Self {
        Self { color, ..Self::default() }
    }
    /// Shader paint with the default blend mode
    pub fn with_shader(shader: &'a mut dyn Shader) -> Self {
        Self { shader: Some(shader), ..Self::default() }
    }
    /// Replace the blend mode
    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }
}
