use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A persisted enum name that no variant answers to.
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transfer function range with min above max.
    #[error("invalid transfer function range: min {min} > max {max}")]
    InvalidRange { min: f32, max: f32 },
}

/// Failures of the backing configuration store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config yaml is malformed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config section {0:?} is not a mapping")]
    NotAMapping(String),

    /// NaN or infinity in a float field; such a value never compares equal to itself.
    #[error("config value {section}.{key} is not finite")]
    NonFinite { section: String, key: String },

    #[error("config value {section}.{key} has the wrong type: {source}")]
    TypeMismatch {
        section: String,
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
}
