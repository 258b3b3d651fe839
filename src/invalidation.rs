use std::ops::BitOr;

use crate::heat_map::HeatMapParams;
use crate::line_mode::LineMode;
use crate::render_params::ParticleRenderParams;
use crate::trace_params::ParticleTraceParams;

/// Pipeline stages that must rerun after a parameter edit. A retrace always
/// carries a redraw; the fields are private to keep it that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Invalidation {
    retrace: bool,
    redraw: bool,
}

impl Invalidation {
    pub const NONE: Self = Self { retrace: false, redraw: false };
    pub const REDRAW: Self = Self { retrace: false, redraw: true };
    /// A retrace always implies a redraw of the new geometry.
    pub const RETRACE: Self = Self { retrace: true, redraw: true };

    pub fn from_flags(retrace: bool, redraw: bool) -> Self {
        Self { retrace, redraw: redraw || retrace }
    }

    /// Work needed every frame regardless of edits: iterative modes are
    /// re-stepped and redrawn continuously.
    pub fn for_frame(line_mode: LineMode) -> Self {
        if line_mode.is_iterative() { Self::RETRACE } else { Self::NONE }
    }

    pub fn retrace(self) -> bool {
        self.retrace
    }

    pub fn redraw(self) -> bool {
        self.redraw
    }

    pub fn is_clean(self) -> bool {
        !self.retrace && !self.redraw
    }

    pub fn merge(self, other: Self) -> Self {
        Self::from_flags(self.retrace || other.retrace, self.redraw || other.redraw)
    }
}

impl BitOr for Invalidation {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

/// Holds the snapshots that produced the current geometry and image.
///
/// `update` classifies the caller's current parameters against the stored
/// snapshots and only then commits them, so every comparison sees the state
/// from immediately before the edit.
#[derive(Clone, Debug)]
pub struct ParamTracker {
    trace: ParticleTraceParams,
    render: ParticleRenderParams,
    heat_map: HeatMapParams,
}

impl ParamTracker {
    pub fn new(trace: ParticleTraceParams, render: ParticleRenderParams, heat_map: HeatMapParams) -> Self {
        Self { trace, render, heat_map }
    }

    pub fn previous_trace(&self) -> &ParticleTraceParams {
        &self.trace
    }

    pub fn previous_render(&self) -> &ParticleRenderParams {
        &self.render
    }

    pub fn previous_heat_map(&self) -> &HeatMapParams {
        &self.heat_map
    }

    /// Classify the edit from the stored snapshots to the given parameters,
    /// then store the given parameters as the new baseline.
    pub fn update(
        &mut self,
        trace: &ParticleTraceParams,
        render: &ParticleRenderParams,
        heat_map: &HeatMapParams,
    ) -> Invalidation {
        let trace_changed = trace.has_changes_for_retracing(&self.trace);
        let heat_map_retrace = heat_map.has_changes_for_retracing(&self.heat_map, trace);
        let render_changed = *render != self.render;
        let heat_map_redraw = heat_map.has_changes_for_redrawing(&self.heat_map);

        let retrace = trace_changed || heat_map_retrace;
        let result = Invalidation::from_flags(retrace, render_changed || heat_map_redraw);
        if !result.is_clean() {
            tracing::debug!(
                trace_changed,
                heat_map_retrace,
                render_changed,
                heat_map_redraw,
                line_mode = %trace.line_mode,
                "parameters invalidated"
            );
        }

        if trace_changed {
            self.trace.clone_from(trace);
        }
        if render_changed {
            self.render.clone_from(render);
        }
        if *heat_map != self.heat_map {
            self.heat_map.clone_from(heat_map);
        }
        result
    }

    /// Like `update`, merged with the per-frame work of the current line mode.
    pub fn update_frame(
        &mut self,
        trace: &ParticleTraceParams,
        render: &ParticleRenderParams,
        heat_map: &HeatMapParams,
    ) -> Invalidation {
        self.update(trace, render, heat_map) | Invalidation::for_frame(trace.line_mode)
    }
}

impl Default for ParamTracker {
    fn default() -> Self {
        Self::new(ParticleTraceParams::default(), ParticleRenderParams::default(), HeatMapParams::default())
    }
}
