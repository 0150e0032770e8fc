use std::fmt;
use std::str::FromStr;

/// OpenGL context version, e.g. `3.3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error returned when a `MAJOR.MINOR` string cannot be parsed.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid GL version {0:?}, expected MAJOR.MINOR (e.g. 3.3)")]
pub struct ParseGlVersionError(pub String);

impl FromStr for GlVersion {
    type Err = ParseGlVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGlVersionError(s.to_string());
        let (major, minor) = s.trim().split_once('.').ok_or_else(err)?;
        let major = major.parse().map_err(|_| err())?;
        let minor = minor.parse().map_err(|_| err())?;
        Ok(Self { major, minor })
    }
}

/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version.
    ///
    /// Context creation fails when the driver cannot provide it.
    pub version: GlVersion,

    /// Request a core profile context (no deprecated fixed-function API).
    pub core_profile: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: GlVersion::new(3, 3),
            core_profile: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_core_3_3() {
        let init = GlInit::default();
        assert_eq!(init.version, GlVersion::new(3, 3));
        assert!(init.core_profile);
    }

    #[test]
    fn parses_major_minor() {
        assert_eq!("4.6".parse::<GlVersion>().unwrap(), GlVersion::new(4, 6));
        assert_eq!(" 3.3 ".parse::<GlVersion>().unwrap(), GlVersion::new(3, 3));
    }

    #[test]
    fn rejects_malformed_versions() {
        assert!("3".parse::<GlVersion>().is_err());
        assert!("three.three".parse::<GlVersion>().is_err());
        assert!("3.".parse::<GlVersion>().is_err());
        assert!("300.1".parse::<GlVersion>().is_err());
    }

    #[test]
    fn versions_order_by_major_then_minor() {
        assert!(GlVersion::new(3, 3) < GlVersion::new(4, 0));
        assert!(GlVersion::new(3, 2) < GlVersion::new(3, 3));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let v = GlVersion::new(4, 1);
        assert_eq!(v.to_string().parse::<GlVersion>().unwrap(), v);
    }
}
