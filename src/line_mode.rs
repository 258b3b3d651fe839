use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::named::NamedEnum;

/// Tracing strategy used to build lines or particles from the vector field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineMode {
    Stream,
    Path,
    ParticleStream,
    Particles,
    PathFtle,
}

impl Default for LineMode {
    fn default() -> Self {
        Self::Stream
    }
}

/// Classification row for one line mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ModeTraits {
    mode: LineMode,
    name: &'static str,
    /// Advection samples future timesteps.
    time_dependent: bool,
    /// Traced and rendered every frame instead of once.
    iterative: bool,
    /// Every new particle gets a fresh seed.
    always_new_seeds: bool,
}

const fn row(
    mode: LineMode,
    name: &'static str,
    time_dependent: bool,
    iterative: bool,
    always_new_seeds: bool,
) -> ModeTraits {
    ModeTraits { mode, name, time_dependent, iterative, always_new_seeds }
}

/// Indexed by `LineMode as usize`; the only place the variant order is spelled
/// out. Names are persisted in config files.
const MODE_TRAITS: [ModeTraits; LineMode::COUNT] = [
    // mode, name, time dependent, iterative, always new seeds
    row(LineMode::Stream, "Stream", false, false, false),
    row(LineMode::Path, "Path", true, false, false),
    row(LineMode::ParticleStream, "Particle Stream", true, true, false),
    row(LineMode::Particles, "Particles", true, true, true),
    row(LineMode::PathFtle, "Path FTLE", true, false, false),
];

const _: () = {
    let mut i = 0;
    while i < LineMode::COUNT {
        assert!(MODE_TRAITS[i].mode as usize == i, "MODE_TRAITS is out of discriminant order");
        i += 1;
    }
};

const ALL_MODES: [LineMode; LineMode::COUNT] = {
    let mut all = [LineMode::Stream; LineMode::COUNT];
    let mut i = 0;
    while i < LineMode::COUNT {
        all[i] = MODE_TRAITS[i].mode;
        i += 1;
    }
    all
};

impl LineMode {
    pub const COUNT: usize = 5;

    fn traits(self) -> &'static ModeTraits {
        &MODE_TRAITS[self as usize]
    }

    /// Returns true if advection needs timesteps in the future.
    pub fn is_time_dependent(self) -> bool {
        self.traits().time_dependent
    }

    /// Returns true for particle modes, i.e. tracing and rendering run every frame.
    pub fn is_iterative(self) -> bool {
        self.traits().iterative
    }

    /// Returns true for particle modes that seed every new particle freshly.
    pub fn generates_always_new_seeds(self) -> bool {
        self.traits().always_new_seeds
    }
}

impl NamedEnum for LineMode {
    const KIND: &'static str = "line mode";
    const ALL: &'static [Self] = &ALL_MODES;

    fn name(self) -> &'static str {
        self.traits().name
    }
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
