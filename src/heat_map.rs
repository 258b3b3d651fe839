use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::handle::ResourceHandle;
use crate::line_mode::LineMode;
use crate::trace_params::ParticleTraceParams;

pub const SECTION: &str = "HeatMapParams";

/// Settings for recording particle density into a heat map and rendering it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatMapParams {
    pub enable_recording: bool,
    pub enable_rendering: bool,
    /// Restart accumulation automatically when the trace restarts.
    pub auto_reset: bool,
    pub density_scale: f32,
    pub tf_alpha_scale: f32,
    /// Expected to satisfy `tf_range_min <= tf_range_max`; see `validate`.
    pub tf_range_min: f32,
    pub tf_range_max: f32,
    pub transfer_function: Option<ResourceHandle>,
}

impl Default for HeatMapParams {
    fn default() -> Self {
        Self {
            enable_recording: false,
            enable_rendering: false,
            auto_reset: false,
            density_scale: 1.0,
            tf_alpha_scale: 1.0,
            tf_range_min: 0.0,
            tf_range_max: 1.0,
            transfer_function: None,
        }
    }
}

/// Which pipeline stage a heat-map field invalidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Influence {
    /// Changes what the trace stage records.
    Retrace,
    /// Retrace only for one-shot line modes; iterative modes absorb the change
    /// into the running step loop.
    RetraceUnlessIterative,
    /// Changes only how recorded data is displayed.
    Redraw,
}

impl Influence {
    pub fn forces_retrace(self, line_mode: LineMode) -> bool {
        match self {
            Self::Retrace => true,
            Self::RetraceUnlessIterative => !line_mode.is_iterative(),
            Self::Redraw => false,
        }
    }

    pub fn forces_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }
}

/// Classification of one heat-map field.
pub struct FieldDef {
    pub name: &'static str,
    pub influence: Influence,
    pub differs: fn(&HeatMapParams, &HeatMapParams) -> bool,
}

/// Every `HeatMapParams` field with its influence class. Both change
/// classifiers read this table; a new field must be added here.
pub const HEAT_MAP_FIELDS: [FieldDef; 8] = [
    FieldDef {
        name: "enable_recording",
        influence: Influence::Retrace,
        differs: |a, b| a.enable_recording != b.enable_recording,
    },
    FieldDef {
        name: "auto_reset",
        influence: Influence::RetraceUnlessIterative,
        differs: |a, b| a.auto_reset != b.auto_reset,
    },
    FieldDef {
        name: "enable_rendering",
        influence: Influence::Redraw,
        differs: |a, b| a.enable_rendering != b.enable_rendering,
    },
    FieldDef {
        name: "density_scale",
        influence: Influence::Redraw,
        differs: |a, b| a.density_scale != b.density_scale,
    },
    FieldDef {
        name: "tf_alpha_scale",
        influence: Influence::Redraw,
        differs: |a, b| a.tf_alpha_scale != b.tf_alpha_scale,
    },
    FieldDef {
        name: "tf_range_min",
        influence: Influence::Redraw,
        differs: |a, b| a.tf_range_min != b.tf_range_min,
    },
    FieldDef {
        name: "tf_range_max",
        influence: Influence::Redraw,
        differs: |a, b| a.tf_range_max != b.tf_range_max,
    },
    // None -> Some counts as a change
    FieldDef {
        name: "transfer_function",
        influence: Influence::Redraw,
        differs: |a, b| a.transfer_function != b.transfer_function,
    },
];

impl HeatMapParams {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if going from `other` to `self` requires a retrace under
    /// the current trace configuration.
    pub fn has_changes_for_retracing(&self, other: &Self, trace_params: &ParticleTraceParams) -> bool {
        let line_mode = trace_params.line_mode;
        self.any_changed(other, |influence| influence.forces_retrace(line_mode))
    }

    /// Returns true if going from `other` to `self` changes how recorded
    /// heat-map data is displayed.
    pub fn has_changes_for_redrawing(&self, other: &Self) -> bool {
        self.any_changed(other, Influence::forces_redraw)
    }

    /// Names of all fields that differ from `other`, in table order.
    pub fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        HEAT_MAP_FIELDS
            .iter()
            .filter(|def| (def.differs)(self, other))
            .map(|def| def.name)
            .collect()
    }

    fn any_changed(&self, other: &Self, selected: impl Fn(Influence) -> bool) -> bool {
        HEAT_MAP_FIELDS.iter().filter(|def| selected(def.influence)).any(|def| {
            let changed = (def.differs)(self, other);
            if changed {
                tracing::trace!(field = def.name, influence = ?def.influence, "heat map field changed");
            }
            changed
        })
    }

    /// Opt-in check of the transfer function range. The classifiers never call this.
    pub fn validate(&self) -> Result<()> {
        if self.tf_range_min > self.tf_range_max {
            return Err(Error::InvalidRange { min: self.tf_range_min, max: self.tf_range_max });
        }
        Ok(())
    }

    /// Read every recognized key from `config`; missing keys keep the current
    /// value and the transfer function handle is left untouched. On error
    /// `self` is unchanged.
    pub fn apply_config(&mut self, config: &dyn ConfigStore) -> Result<()> {
        let mut next = self.clone();
        config.read_into(SECTION, "EnableRecording", &mut next.enable_recording)?;
        config.read_into(SECTION, "EnableRendering", &mut next.enable_rendering)?;
        config.read_into(SECTION, "AutoReset", &mut next.auto_reset)?;
        config.read_finite_into(SECTION, "DensityScale", &mut next.density_scale)?;
        config.read_finite_into(SECTION, "TFAlphaScale", &mut next.tf_alpha_scale)?;
        config.read_finite_into(SECTION, "TFRangeMin", &mut next.tf_range_min)?;
        config.read_finite_into(SECTION, "TFRangeMax", &mut next.tf_range_max)?;
        *self = next;
        Ok(())
    }

    pub fn write_config(&self, config: &mut dyn ConfigStore) -> Result<()> {
        config.set(SECTION, "EnableRecording", &self.enable_recording)?;
        config.set(SECTION, "EnableRendering", &self.enable_rendering)?;
        config.set(SECTION, "AutoReset", &self.auto_reset)?;
        config.set(SECTION, "DensityScale", &self.density_scale)?;
        config.set(SECTION, "TFAlphaScale", &self.tf_alpha_scale)?;
        config.set(SECTION, "TFRangeMin", &self.tf_range_min)?;
        config.set(SECTION, "TFRangeMax", &self.tf_range_max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YamlConfig;
    use crate::error::ConfigError;
    use crate::named::NamedEnum;

    fn trace(line_mode: LineMode) -> ParticleTraceParams {
        ParticleTraceParams { line_mode, ..Default::default() }
    }

    /// One variant per field, each differing from the default in exactly that field.
    fn single_field_variants() -> Vec<(&'static str, HeatMapParams)> {
        let d = HeatMapParams::default();
        vec![
            ("enable_recording", HeatMapParams { enable_recording: true, ..d.clone() }),
            ("auto_reset", HeatMapParams { auto_reset: true, ..d.clone() }),
            ("enable_rendering", HeatMapParams { enable_rendering: true, ..d.clone() }),
            ("density_scale", HeatMapParams { density_scale: 2.0, ..d.clone() }),
            ("tf_alpha_scale", HeatMapParams { tf_alpha_scale: 0.5, ..d.clone() }),
            ("tf_range_min", HeatMapParams { tf_range_min: -1.0, ..d.clone() }),
            ("tf_range_max", HeatMapParams { tf_range_max: 4.0, ..d.clone() }),
            ("transfer_function", HeatMapParams { transfer_function: Some(ResourceHandle::from_raw(1)), ..d }),
        ]
    }

    #[test]
    fn test_identical_params_never_change() {
        let p = HeatMapParams { enable_recording: true, auto_reset: true, ..Default::default() };
        for &mode in LineMode::ALL {
            assert!(!p.has_changes_for_retracing(&p, &trace(mode)), "{mode}: retrace on identical params");
        }
        assert!(!p.has_changes_for_redrawing(&p));
        assert!(p.changed_fields(&p).is_empty());
    }

    #[test]
    fn test_density_scale_is_redraw_only() {
        let a = HeatMapParams::default();
        let b = HeatMapParams { density_scale: 3.0, ..Default::default() };
        assert!(!b.has_changes_for_retracing(&a, &trace(LineMode::Stream)));
        assert!(b.has_changes_for_redrawing(&a));
    }

    #[test]
    fn test_recording_toggle_forces_retrace_not_redraw() {
        let a = HeatMapParams::default();
        let b = HeatMapParams { enable_recording: true, ..Default::default() };
        for &mode in LineMode::ALL {
            assert!(b.has_changes_for_retracing(&a, &trace(mode)), "{mode}");
        }
        assert!(!b.has_changes_for_redrawing(&a));
    }

    #[test]
    fn test_auto_reset_depends_on_line_mode() {
        let a = HeatMapParams::default();
        let b = HeatMapParams { auto_reset: true, ..Default::default() };
        assert!(!b.has_changes_for_retracing(&a, &trace(LineMode::Particles)));
        assert!(!b.has_changes_for_retracing(&a, &trace(LineMode::ParticleStream)));
        assert!(b.has_changes_for_retracing(&a, &trace(LineMode::Stream)));
        assert!(b.has_changes_for_retracing(&a, &trace(LineMode::Path)));
        assert!(b.has_changes_for_retracing(&a, &trace(LineMode::PathFtle)));
        assert!(!b.has_changes_for_redrawing(&a), "auto reset never redraws");
    }

    #[test]
    fn test_each_field_hits_exactly_its_class() {
        let d = HeatMapParams::default();
        for (name, variant) in single_field_variants() {
            let def = HEAT_MAP_FIELDS.iter().find(|def| def.name == name).unwrap();
            assert_eq!(variant.changed_fields(&d), vec![name]);
            assert_eq!(variant.has_changes_for_redrawing(&d), def.influence.forces_redraw(), "{name}");
            for &mode in LineMode::ALL {
                assert_eq!(
                    variant.has_changes_for_retracing(&d, &trace(mode)),
                    def.influence.forces_retrace(mode),
                    "{name} under {mode}"
                );
            }
        }
    }

    #[test]
    fn test_field_table_is_complete_and_disjoint() {
        assert_eq!(HEAT_MAP_FIELDS.len(), single_field_variants().len());
        for (i, a) in HEAT_MAP_FIELDS.iter().enumerate() {
            for b in &HEAT_MAP_FIELDS[i + 1..] {
                assert_ne!(a.name, b.name, "field classified twice");
            }
        }
        for def in &HEAT_MAP_FIELDS {
            let retrace = LineMode::ALL.iter().any(|&m| def.influence.forces_retrace(m));
            assert!(!(retrace && def.influence.forces_redraw()), "{} claimed by both classifiers", def.name);
        }
    }

    #[test]
    fn test_transfer_function_appearing_is_a_redraw() {
        let a = HeatMapParams::default();
        let b = HeatMapParams { transfer_function: Some(ResourceHandle::from_raw(42)), ..Default::default() };
        assert!(b.has_changes_for_redrawing(&a));
        assert!(a.has_changes_for_redrawing(&b));
        assert!(!b.has_changes_for_retracing(&a, &trace(LineMode::Stream)));
    }

    #[test]
    fn test_validate_range() {
        assert!(HeatMapParams::default().validate().is_ok());
        let flat = HeatMapParams { tf_range_min: 0.5, tf_range_max: 0.5, ..Default::default() };
        assert!(flat.validate().is_ok());
        let inverted = HeatMapParams { tf_range_min: 2.0, tf_range_max: 1.0, ..Default::default() };
        assert!(matches!(inverted.validate(), Err(Error::InvalidRange { .. })));
        // classifiers do not care
        assert!(inverted.has_changes_for_redrawing(&HeatMapParams::default()));
    }

    #[test]
    fn test_config_roundtrip() {
        for (name, original) in single_field_variants() {
            if name == "transfer_function" {
                continue;
            }
            let mut cfg = YamlConfig::new();
            original.write_config(&mut cfg).unwrap();
            let mut restored = HeatMapParams::default();
            restored.apply_config(&cfg).unwrap();
            assert_eq!(restored, original, "config roundtrip lost {name}");
        }
    }

    #[test]
    fn test_apply_keeps_missing_fields_and_handle() {
        let cfg = YamlConfig::parse("HeatMapParams:\n  DensityScale: 5.0\n").unwrap();
        let handle = Some(ResourceHandle::from_raw(8));
        let mut p = HeatMapParams { auto_reset: true, transfer_function: handle, ..Default::default() };
        p.apply_config(&cfg).unwrap();
        assert_eq!(p.density_scale, 5.0);
        assert!(p.auto_reset);
        assert_eq!(p.transfer_function, handle);
    }

    #[test]
    fn test_failed_apply_leaves_params_unchanged() {
        let cfg = YamlConfig::parse("HeatMapParams:\n  EnableRecording: true\n  DensityScale: lots\n").unwrap();
        let mut p = HeatMapParams { tf_range_max: 3.0, ..Default::default() };
        let before = p.clone();
        assert!(matches!(p.apply_config(&cfg), Err(Error::Config(ConfigError::TypeMismatch { .. }))));
        assert_eq!(p, before, "enable_recording must not be applied when a later key fails");
    }

    #[test]
    fn test_nan_is_rejected_and_tracking_stays_clean() {
        let cfg = YamlConfig::parse("HeatMapParams:\n  EnableRendering: true\n  DensityScale: .nan\n").unwrap();
        let mut p = HeatMapParams::default();
        let err = p.apply_config(&cfg).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NonFinite { .. })), "got {err:?}");
        assert_eq!(p, HeatMapParams::default());
        assert!(!p.has_changes_for_redrawing(&p.clone()), "params must compare equal to themselves");
    }

    #[test]
    fn test_reset() {
        let mut p = HeatMapParams { enable_rendering: true, tf_range_max: 9.0, ..Default::default() };
        p.reset();
        assert_eq!(p, HeatMapParams::default());
    }
}
