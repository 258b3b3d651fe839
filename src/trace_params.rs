use crate::config::ConfigStore;
use crate::error::Result;
use crate::handle::ResourceHandle;
use crate::line_mode::LineMode;
use crate::named::{read_named, write_named};

pub const SECTION: &str = "ParticleTraceParams";

/// Inputs of the trace stage. Every field here affects the traced geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTraceParams {
    pub line_mode: LineMode,

    /// Seeding box corner and extent in world coordinates.
    pub seed_box_min: [f32; 3],
    pub seed_box_size: [f32; 3],
    /// Optional seed mask, compared by identity and never persisted.
    pub seed_texture: Option<ResourceHandle>,

    pub advect_delta_t: f32,
    pub advect_error_tolerance: f32,
    pub advect_steps_per_round: u32,

    pub line_count: u32,
    pub line_length_max: u32,
    /// Maximum particle age, i.e. the traced time range in field time units.
    pub line_age_max: f32,
    pub min_velocity: f32,
    pub particles_per_second: f32,
    pub start_timestep: u32,

    pub ftle_resolution: u32,
}

impl Default for ParticleTraceParams {
    fn default() -> Self {
        Self {
            line_mode: LineMode::Stream,
            seed_box_min: [-0.5, -0.5, -0.5],
            seed_box_size: [1.0, 1.0, 1.0],
            seed_texture: None,
            advect_delta_t: 0.005,
            advect_error_tolerance: 0.01,
            advect_steps_per_round: 16,
            line_count: 1024,
            line_length_max: 1024,
            line_age_max: 10.0,
            min_velocity: 0.0,
            particles_per_second: 8.0,
            start_timestep: 0,
            ftle_resolution: 256,
        }
    }
}

impl ParticleTraceParams {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Any field difference invalidates the traced geometry.
    pub fn has_changes_for_retracing(&self, other: &Self) -> bool {
        self != other
    }

    /// Read every recognized key from `config`; missing keys keep the current
    /// value. On error `self` is unchanged.
    pub fn apply_config(&mut self, config: &dyn ConfigStore) -> Result<()> {
        let mut next = self.clone();
        read_named(config, SECTION, "LineMode", &mut next.line_mode)?;
        config.read_finite_into(SECTION, "SeedBoxMin", &mut next.seed_box_min)?;
        config.read_finite_into(SECTION, "SeedBoxSize", &mut next.seed_box_size)?;
        config.read_finite_into(SECTION, "AdvectDeltaT", &mut next.advect_delta_t)?;
        config.read_finite_into(SECTION, "AdvectErrorTolerance", &mut next.advect_error_tolerance)?;
        config.read_into(SECTION, "AdvectStepsPerRound", &mut next.advect_steps_per_round)?;
        config.read_into(SECTION, "LineCount", &mut next.line_count)?;
        config.read_into(SECTION, "LineLengthMax", &mut next.line_length_max)?;
        config.read_finite_into(SECTION, "LineAgeMax", &mut next.line_age_max)?;
        config.read_finite_into(SECTION, "MinVelocity", &mut next.min_velocity)?;
        config.read_finite_into(SECTION, "ParticlesPerSecond", &mut next.particles_per_second)?;
        config.read_into(SECTION, "StartTimestep", &mut next.start_timestep)?;
        config.read_into(SECTION, "FTLEResolution", &mut next.ftle_resolution)?;
        *self = next;
        Ok(())
    }

    pub fn write_config(&self, config: &mut dyn ConfigStore) -> Result<()> {
        write_named(config, SECTION, "LineMode", self.line_mode)?;
        config.set(SECTION, "SeedBoxMin", &self.seed_box_min)?;
        config.set(SECTION, "SeedBoxSize", &self.seed_box_size)?;
        config.set(SECTION, "AdvectDeltaT", &self.advect_delta_t)?;
        config.set(SECTION, "AdvectErrorTolerance", &self.advect_error_tolerance)?;
        config.set(SECTION, "AdvectStepsPerRound", &self.advect_steps_per_round)?;
        config.set(SECTION, "LineCount", &self.line_count)?;
        config.set(SECTION, "LineLengthMax", &self.line_length_max)?;
        config.set(SECTION, "LineAgeMax", &self.line_age_max)?;
        config.set(SECTION, "MinVelocity", &self.min_velocity)?;
        config.set(SECTION, "ParticlesPerSecond", &self.particles_per_second)?;
        config.set(SECTION, "StartTimestep", &self.start_timestep)?;
        config.set(SECTION, "FTLEResolution", &self.ftle_resolution)?;
        Ok(())
    }
}
