//! Draw-stage enumerations referenced by `ParticleRenderParams`.
//!
//! Every variant name is persisted in config files and must stay stable.

use crate::named::named_enum;

named_enum! {
    /// Geometry used to draw traced lines.
    pub enum LineRenderMode: "line render mode" {
        Line => "Line",
        Ribbon => "Ribbon",
        Tube => "Tube",
        Particles => "Particles",
    }
}

named_enum! {
    /// Blending used when splatting particles.
    pub enum ParticleRenderMode: "particle render mode" {
        Additive => "Additive",
        Multiplicative => "Multiplicative",
        AlphaBlending => "Alpha Blending",
        OrderIndependentTransparency => "Order Independent Transparency",
    }
}

named_enum! {
    /// Source of the per-vertex line color.
    pub enum LineColorMode: "line color mode" {
        FixedColor => "Fixed Color",
        Age => "Age",
        Texture => "Texture",
        Measure => "Measure",
    }
}

named_enum! {
    /// Scalar derived from the flow field, mapped through the transfer function
    /// when lines are colored by measure.
    pub enum Measure: "measure" {
        VelocityMagnitude => "Velocity Magnitude",
        VelocityZ => "Velocity Z",
        VorticityMagnitude => "Vorticity Magnitude",
        Helicity => "Helicity",
        Lambda2 => "Lambda2",
        QHunt => "Q Hunt",
        Temperature => "Temperature",
        HeatCurrent => "Heat Current",
    }
}

impl Default for LineRenderMode {
    fn default() -> Self {
        Self::Line
    }
}

impl Default for ParticleRenderMode {
    fn default() -> Self {
        Self::Additive
    }
}

impl Default for LineColorMode {
    fn default() -> Self {
        Self::Age
    }
}

impl Default for Measure {
    fn default() -> Self {
        Self::VelocityMagnitude
    }
}
