//! Parameter state and change classification for a particle/streamline flow
//! visualization pipeline.
//!
//! Every parameter edit is classified as needing a retrace (recompute line or
//! particle geometry), a redraw (re-render existing data), or nothing. The
//! classifiers take both snapshots explicitly; there is no global state.

mod named;

pub mod config;
pub mod error;
pub mod handle;
pub mod heat_map;
pub mod invalidation;
pub mod line_mode;
pub mod render_modes;
pub mod render_params;
pub mod trace_params;

pub use config::{ConfigStore, YamlConfig};
pub use error::{ConfigError, Error, Result};
pub use handle::ResourceHandle;
pub use heat_map::{HeatMapParams, Influence, HEAT_MAP_FIELDS};
pub use invalidation::{Invalidation, ParamTracker};
pub use line_mode::LineMode;
pub use named::NamedEnum;
pub use render_modes::{LineColorMode, LineRenderMode, Measure, ParticleRenderMode};
pub use render_params::{Color, ParticleRenderParams};
pub use trace_params::ParticleTraceParams;
