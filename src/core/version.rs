use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A game version identifier split into its comparable parts.
///
/// Parsing is total: any identifier without a `<digits>.<digits>` core, or
/// whose digit groups do not fit an integer, collapses to `(0, 0, "")`,
/// which the usability policy then rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameVersion {
    pub major: u32,
    pub minor: u32,
    /// Everything after the minor number, leading separator included:
    /// `"1.8.1-pre3"` keeps `".1-pre3"`.
    pub rest: String,
}

static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| Regex::new(r"(\d+)\.(\d+)(.*)").expect("version pattern"))
}

impl GameVersion {
    pub fn parse(id: &str) -> Self {
        let Some(caps) = version_pattern().captures(id) else {
            return Self::default();
        };
        let (Ok(major), Ok(minor)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            return Self::default();
        };
        Self {
            major,
            minor,
            rest: caps[3].to_string(),
        }
    }

    pub fn pair(&self) -> (u32, u32) {
        (self.major, self.minor)
    }

    /// Versions before 1.6 keep per-texture assets in a layout the asset
    /// pipeline cannot read, so they are never offered.
    pub fn is_usable(&self) -> bool {
        self.major >= 1 && self.minor >= 6
    }

    /// Plain releases 1.9 and newer: an empty remainder, or a bare `.N`
    /// point release. Prerelease and build-tagged identifiers such as
    /// `1.9-pre1` or `1.9.1-OptiFine_HD_U_C7` do not qualify.
    pub fn is_full_release(&self) -> bool {
        if self.pair() < (1, 9) {
            return false;
        }
        if self.rest.is_empty() {
            return true;
        }
        self.rest
            .strip_prefix('.')
            .is_some_and(|rev| rev.parse::<u32>().is_ok())
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.major, self.minor, self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(id: &str) -> (u32, u32, String) {
        let v = GameVersion::parse(id);
        (v.major, v.minor, v.rest)
    }

    #[test]
    fn parse_release_and_point_release() {
        assert_eq!(parsed("1.9"), (1, 9, String::new()));
        assert_eq!(parsed("1.9.2"), (1, 9, ".2".to_string()));
    }

    #[test]
    fn parse_keeps_rest_with_leading_separator() {
        assert_eq!(parsed("1.8.1-pre3"), (1, 8, ".1-pre3".to_string()));
    }

    #[test]
    fn parse_is_total_on_garbage() {
        assert_eq!(parsed("garbage"), (0, 0, String::new()));
        assert_eq!(parsed(""), (0, 0, String::new()));
        assert_eq!(parsed("no digits here"), (0, 0, String::new()));
    }

    #[test]
    fn parse_is_total_on_overflow() {
        assert_eq!(parsed("99999999999999999999.1"), (0, 0, String::new()));
        assert_eq!(parsed("1.99999999999999999999"), (0, 0, String::new()));
    }

    #[test]
    fn parse_matches_first_occurrence() {
        assert_eq!(parsed("snapshot-1.12-weekly"), (1, 12, "-weekly".to_string()));
    }

    #[test]
    fn usability_boundary_is_1_6() {
        assert!(!GameVersion::parse("1.5.2").is_usable());
        assert!(!GameVersion::parse("0.31").is_usable());
        assert!(!GameVersion::parse("garbage").is_usable());
        assert!(GameVersion::parse("1.6").is_usable());
        assert!(GameVersion::parse("1.7.10").is_usable());
        assert!(GameVersion::parse("1.12.2").is_usable());
    }

    #[test]
    fn full_release_accepts_plain_and_point_releases() {
        assert!(GameVersion::parse("1.9").is_full_release());
        assert!(GameVersion::parse("1.9.2").is_full_release());
        assert!(GameVersion::parse("1.10").is_full_release());
        assert!(GameVersion::parse("1.11.2").is_full_release());
    }

    #[test]
    fn full_release_rejects_tags_and_old_versions() {
        assert!(!GameVersion::parse("1.9-pre1").is_full_release());
        assert!(!GameVersion::parse("1.9.1-OptiFine_HD_U_C7").is_full_release());
        assert!(!GameVersion::parse("1.8").is_full_release());
        assert!(!GameVersion::parse("1.8.9").is_full_release());
    }

    #[test]
    fn display_round_trips_the_parts() {
        assert_eq!(GameVersion::parse("1.8.1-pre3").to_string(), "1.8.1-pre3");
    }
}
