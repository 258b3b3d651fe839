use crate::config::ConfigStore;
use crate::error::{Error, Result};

/// Closed enum with a stable, persisted name per variant.
pub trait NamedEnum: Copy + PartialEq + 'static {
    /// Used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Parse a persisted name. Unknown names are an error, never a default.
    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == name)
            .ok_or_else(|| Error::UnknownName { kind: Self::KIND, name: name.to_string() })
    }
}

/// Overwrite `slot` from the name stored under `key`, if present.
pub fn read_named<T: NamedEnum>(store: &dyn ConfigStore, section: &str, key: &str, slot: &mut T) -> Result<()> {
    if let Some(name) = store.get::<String>(section, key)? {
        *slot = T::from_name(&name)?;
    }
    Ok(())
}

pub fn write_named<T: NamedEnum>(store: &mut dyn ConfigStore, section: &str, key: &str, value: T) -> Result<()> {
    store.set(section, key, &value.name())?;
    Ok(())
}

/// Defines a fieldless enum together with its `NamedEnum` name table,
/// `Display` and `FromStr`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident : $kind:literal {
            $($variant:ident => $name:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $ty {
            $($variant),+
        }

        impl $crate::named::NamedEnum for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::named::NamedEnum::name(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::named::NamedEnum>::from_name(s)
            }
        }
    };
}

pub(crate) use named_enum;
