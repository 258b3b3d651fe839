use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Key-value configuration store addressed by `(section, key)`.
///
/// Reads report a missing key as `Ok(None)` so callers can keep their current
/// value. Store failures are returned, never swallowed.
pub trait ConfigStore {
    fn get_value(&self, section: &str, key: &str) -> Result<Option<Value>, ConfigError>;

    fn set_value(&mut self, section: &str, key: &str, value: Value) -> Result<(), ConfigError>;
}

impl dyn ConfigStore + '_ {
    /// Typed read. `Ok(None)` if the key is absent.
    pub fn get<T: DeserializeOwned>(&self, section: &str, key: &str) -> Result<Option<T>, ConfigError> {
        match self.get_value(section, key)? {
            Some(value) => serde_yaml::from_value(value).map(Some).map_err(|source| {
                ConfigError::TypeMismatch {
                    section: section.to_string(),
                    key: key.to_string(),
                    source,
                }
            }),
            None => Ok(None),
        }
    }

    /// Typed read that overwrites `slot` only if the key is present.
    pub fn read_into<T: DeserializeOwned>(&self, section: &str, key: &str, slot: &mut T) -> Result<(), ConfigError> {
        if let Some(value) = self.get(section, key)? {
            *slot = value;
        }
        Ok(())
    }

    /// Like `read_into`, but rejects NaN and infinite components.
    pub fn read_finite_into<T: DeserializeOwned + Finite>(
        &self,
        section: &str,
        key: &str,
        slot: &mut T,
    ) -> Result<(), ConfigError> {
        if let Some(value) = self.get::<T>(section, key)? {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { section: section.to_string(), key: key.to_string() });
            }
            *slot = value;
        }
        Ok(())
    }

    pub fn set<T: Serialize>(&mut self, section: &str, key: &str, value: &T) -> Result<(), ConfigError> {
        let value = serde_yaml::to_value(value)?;
        self.set_value(section, key, value)
    }
}

/// Float-valued config types whose every component must be finite.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl<const N: usize> Finite for [f32; N] {
    fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

/// In-memory YAML document: top-level sections, each a mapping of keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YamlConfig {
    root: Mapping,
}

impl YamlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let root = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(root) => root,
            Value::Null => Mapping::new(),
            _ => return Err(ConfigError::NotAMapping(String::new())),
        };
        Ok(Self { root })
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), sections = config.root.len(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml()?)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.root.contains_key(section)
    }

    fn section(&self, section: &str) -> Result<Option<&Mapping>, ConfigError> {
        match self.root.get(section) {
            Some(Value::Mapping(map)) => Ok(Some(map)),
            Some(_) => Err(ConfigError::NotAMapping(section.to_string())),
            None => Ok(None),
        }
    }
}

impl ConfigStore for YamlConfig {
    fn get_value(&self, section: &str, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.section(section)?.and_then(|map| map.get(key)).cloned())
    }

    fn set_value(&mut self, section: &str, key: &str, value: Value) -> Result<(), ConfigError> {
        if !self.root.contains_key(section) {
            self.root.insert(Value::from(section), Value::Mapping(Mapping::new()));
        }
        match self.root.get_mut(section) {
            Some(Value::Mapping(map)) => {
                map.insert(Value::from(key), value);
                Ok(())
            }
            _ => Err(ConfigError::NotAMapping(section.to_string())),
        }
    }
}
