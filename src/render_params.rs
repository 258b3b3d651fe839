use crate::config::ConfigStore;
use crate::error::Result;
use crate::handle::ResourceHandle;
use crate::named::{read_named, write_named};
use crate::render_modes::{LineColorMode, LineRenderMode, Measure, ParticleRenderMode};

/// RGBA color, components in [0, 1].
pub type Color = [f32; 4];

/// Config section holding the render parameters.
pub const SECTION: &str = "ParticleRenderParams";

/// Settings that affect only the draw stage of traced lines and particles.
///
/// Equality covers every field. Resource handles compare by identity, so the
/// comparison is a complete dirty check for the redraw path.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRenderParams {
    pub lines_enabled: bool,

    pub line_render_mode: LineRenderMode,
    pub ribbon_width: f32,
    pub tube_radius: f32,

    pub particle_size: f32,
    pub particle_transparency: f32,
    pub particle_render_mode: ParticleRenderMode,

    pub tube_radius_from_velocity: bool,
    pub reference_velocity: f32,

    pub line_color_mode: LineColorMode,

    pub color0: Color,
    pub color1: Color,
    pub color_texture: Option<ResourceHandle>,
    pub measure: Measure,
    pub measure_scale: f32,
    pub transfer_function: Option<ResourceHandle>,

    pub time_stripes: bool,
    pub time_stripe_length: f32,

    pub slice_texture: Option<ResourceHandle>,
    pub show_slice: bool,
    pub slice_position: f32,
    pub slice_alpha: f32,
}

impl Default for ParticleRenderParams {
    fn default() -> Self {
        Self {
            lines_enabled: true,
            line_render_mode: LineRenderMode::Line,
            ribbon_width: 0.8,
            tube_radius: 0.2,
            particle_size: 0.5,
            particle_transparency: 0.3,
            particle_render_mode: ParticleRenderMode::Additive,
            tube_radius_from_velocity: true,
            reference_velocity: 1.0,
            line_color_mode: LineColorMode::Age,
            color0: [0.0, 0.251, 1.0, 1.0],
            color1: [1.0, 0.0, 0.0, 1.0],
            color_texture: None,
            measure: Measure::VelocityMagnitude,
            measure_scale: 1.0,
            transfer_function: None,
            time_stripes: false,
            time_stripe_length: 1.0,
            slice_texture: None,
            show_slice: false,
            slice_position: 0.0,
            slice_alpha: 1.0,
        }
    }
}

/// Persisted float field: config key plus accessors.
struct FloatField {
    key: &'static str,
    get: fn(&ParticleRenderParams) -> f32,
    set: fn(&mut ParticleRenderParams, f32),
}

/// Persisted bool field: config key plus accessors.
struct BoolField {
    key: &'static str,
    get: fn(&ParticleRenderParams) -> bool,
    set: fn(&mut ParticleRenderParams, bool),
}

const FLOAT_FIELDS: [FloatField; 9] = [
    FloatField { key: "RibbonWidth", get: |p| p.ribbon_width, set: |p, v| p.ribbon_width = v },
    FloatField { key: "TubeRadius", get: |p| p.tube_radius, set: |p, v| p.tube_radius = v },
    FloatField { key: "ParticleSize", get: |p| p.particle_size, set: |p, v| p.particle_size = v },
    FloatField {
        key: "ParticleTransparency",
        get: |p| p.particle_transparency,
        set: |p, v| p.particle_transparency = v,
    },
    FloatField {
        key: "ReferenceVelocity",
        get: |p| p.reference_velocity,
        set: |p, v| p.reference_velocity = v,
    },
    FloatField { key: "MeasureScale", get: |p| p.measure_scale, set: |p, v| p.measure_scale = v },
    FloatField {
        key: "TimeStripeLength",
        get: |p| p.time_stripe_length,
        set: |p, v| p.time_stripe_length = v,
    },
    FloatField { key: "SlicePosition", get: |p| p.slice_position, set: |p, v| p.slice_position = v },
    FloatField { key: "SliceAlpha", get: |p| p.slice_alpha, set: |p, v| p.slice_alpha = v },
];

const BOOL_FIELDS: [BoolField; 4] = [
    BoolField { key: "LinesEnabled", get: |p| p.lines_enabled, set: |p, v| p.lines_enabled = v },
    BoolField {
        key: "TubeRadiusFromVelocity",
        get: |p| p.tube_radius_from_velocity,
        set: |p, v| p.tube_radius_from_velocity = v,
    },
    BoolField { key: "TimeStripes", get: |p| p.time_stripes, set: |p, v| p.time_stripes = v },
    BoolField { key: "ShowSlice", get: |p| p.show_slice, set: |p, v| p.show_slice = v },
];

impl ParticleRenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the default configuration in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read every recognized key from `config`. Missing keys keep the current
    /// value; resource handles are runtime state and are left untouched.
    /// On error `self` is unchanged.
    pub fn apply_config(&mut self, config: &dyn ConfigStore) -> Result<()> {
        let mut next = self.clone();
        for field in &FLOAT_FIELDS {
            let mut v = (field.get)(&next);
            config.read_finite_into(SECTION, field.key, &mut v)?;
            (field.set)(&mut next, v);
        }
        for field in &BOOL_FIELDS {
            if let Some(v) = config.get::<bool>(SECTION, field.key)? {
                (field.set)(&mut next, v);
            }
        }

        read_named(config, SECTION, "LineRenderMode", &mut next.line_render_mode)?;
        read_named(config, SECTION, "ParticleRenderMode", &mut next.particle_render_mode)?;
        read_named(config, SECTION, "ColorMode", &mut next.line_color_mode)?;
        read_named(config, SECTION, "Measure", &mut next.measure)?;

        config.read_finite_into(SECTION, "Color0", &mut next.color0)?;
        config.read_finite_into(SECTION, "Color1", &mut next.color1)?;

        *self = next;
        Ok(())
    }

    /// Write every persisted field to `config`.
    pub fn write_config(&self, config: &mut dyn ConfigStore) -> Result<()> {
        for field in &FLOAT_FIELDS {
            config.set(SECTION, field.key, &(field.get)(self))?;
        }
        for field in &BOOL_FIELDS {
            config.set(SECTION, field.key, &(field.get)(self))?;
        }

        write_named(config, SECTION, "LineRenderMode", self.line_render_mode)?;
        write_named(config, SECTION, "ParticleRenderMode", self.particle_render_mode)?;
        write_named(config, SECTION, "ColorMode", self.line_color_mode)?;
        write_named(config, SECTION, "Measure", self.measure)?;

        config.set(SECTION, "Color0", &self.color0)?;
        config.set(SECTION, "Color1", &self.color1)?;
        Ok(())
    }
}
