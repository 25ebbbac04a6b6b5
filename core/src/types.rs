//! Value types derived from the argument list.
//!
//! These are the small vocabulary types the view hands back: the build
//! [`Spec`] selected by `--HEAD`/`--devel`, and the symbolic [`BottleArch`]
//! parsed from `--bottle-arch=`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Build variant selector.
///
/// # Examples
///
/// ```
/// use brew_argv_core::Spec;
///
/// assert_eq!(Spec::default(), Spec::Stable);
/// assert_eq!(Spec::Head.as_str(), "head");
/// assert_eq!("devel".parse::<Spec>(), Ok(Spec::Devel));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Spec {
    /// Released version (the default).
    #[default]
    Stable,
    /// Tip of the upstream repository, selected by `--HEAD`.
    Head,
    /// Development prerelease, selected by `--devel`.
    Devel,
}

impl Spec {
    /// Returns the lowercase symbolic name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Head => "head",
            Self::Devel => "devel",
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Spec`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown spec: {0}")]
pub struct UnknownSpec(pub String);

impl FromStr for Spec {
    type Err = UnknownSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Self::Stable),
            "head" | "HEAD" => Ok(Self::Head),
            "devel" => Ok(Self::Devel),
            other => Err(UnknownSpec(other.to_string())),
        }
    }
}

/// Target CPU for a bottle build, in symbolic form.
///
/// Known targets get their own variant; any other value is kept verbatim in
/// [`BottleArch::Other`] so nothing the user typed is lost.
///
/// # Examples
///
/// ```
/// use brew_argv_core::BottleArch;
///
/// assert_eq!(BottleArch::from("nehalem"), BottleArch::Nehalem);
/// assert_eq!(BottleArch::from("zen4"), BottleArch::Other("zen4".into()));
/// assert_eq!(BottleArch::Core2.as_str(), "core2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleArch {
    Core,
    Core2,
    Penryn,
    Nehalem,
    SandyBridge,
    IvyBridge,
    Haswell,
    Broadwell,
    Skylake,
    Arm64,
    /// Any architecture name without a dedicated variant.
    Other(String),
}

impl BottleArch {
    /// Returns the symbolic name as written on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Core => "core",
            Self::Core2 => "core2",
            Self::Penryn => "penryn",
            Self::Nehalem => "nehalem",
            Self::SandyBridge => "sandybridge",
            Self::IvyBridge => "ivybridge",
            Self::Haswell => "haswell",
            Self::Broadwell => "broadwell",
            Self::Skylake => "skylake",
            Self::Arm64 => "arm64",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for BottleArch {
    fn from(value: &str) -> Self {
        match value {
            "core" => Self::Core,
            "core2" => Self::Core2,
            "penryn" => Self::Penryn,
            "nehalem" => Self::Nehalem,
            "sandybridge" => Self::SandyBridge,
            "ivybridge" => Self::IvyBridge,
            "haswell" => Self::Haswell,
            "broadwell" => Self::Broadwell,
            "skylake" => Self::Skylake,
            "arm64" => Self::Arm64,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BottleArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_display_and_parse() {
        for spec in [Spec::Stable, Spec::Head, Spec::Devel] {
            assert_eq!(spec.to_string().parse::<Spec>(), Ok(spec));
        }
        assert_eq!("HEAD".parse::<Spec>(), Ok(Spec::Head));
        assert!("nightly".parse::<Spec>().is_err());
    }

    #[test]
    fn test_spec_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&Spec::Head).unwrap();
        assert_eq!(yaml.trim(), "head");
    }

    #[test]
    fn test_bottle_arch_keeps_unknown_verbatim() {
        let arch = BottleArch::from("Zen4");
        assert_eq!(arch, BottleArch::Other("Zen4".to_string()));
        assert_eq!(arch.as_str(), "Zen4");
    }

    #[test]
    fn test_bottle_arch_is_case_sensitive() {
        assert_eq!(BottleArch::from("haswell"), BottleArch::Haswell);
        assert_eq!(
            BottleArch::from("Haswell"),
            BottleArch::Other("Haswell".to_string())
        );
    }
}
