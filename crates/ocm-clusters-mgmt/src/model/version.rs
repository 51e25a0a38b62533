use chrono::{DateTime, Utc};

object! {
    /// An OpenShift version that can be installed or upgraded to.
    pub struct Version(VersionBuilder) = "Version" {
        raw_id: String,
        channel_group: String,
        enabled: bool,
        default: bool,
        rosa_enabled: bool,
        hosted_control_plane_enabled: bool,
        hosted_control_plane_default: bool,
        available_upgrades: Vec<String>,
        end_of_life_timestamp: DateTime<Utc>,
        release_image: String,
    }
}

impl Version {
    /// Parses `raw_id` as a semantic version. Identifiers such as `4.16.0-rc.1` keep
    /// their pre-release part, so they sort before the final release.
    pub fn semver(&self) -> Option<semver::Version> {
        let raw = self.raw_id.as_deref()?;
        semver::Version::parse(raw).ok()
    }

    /// Returns the highest version whose `raw_id` parses, ignoring the others.
    pub fn latest(versions: &[Version]) -> Option<&Version> {
        versions
            .iter()
            .filter_map(|version| version.semver().map(|parsed| (parsed, version)))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, version)| version)
    }

    pub fn is_end_of_life(&self, now: DateTime<Utc>) -> bool {
        self.end_of_life_timestamp.is_some_and(|eol| eol <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn version(raw_id: &str) -> Version {
        Version::builder()
            .id(format!("openshift-v{raw_id}"))
            .raw_id(raw_id)
            .build()
    }

    #[test]
    fn test_latest_orders_numerically() {
        let versions = vec![version("4.9.0"), version("4.14.3"), version("4.14.10")];
        let latest = Version::latest(&versions).unwrap();
        assert_eq!(latest.raw_id.as_deref(), Some("4.14.10"));
    }

    #[test]
    fn test_latest_prefers_release_over_candidate() {
        let versions = vec![version("4.16.0-rc.1"), version("4.16.0"), version("bogus")];
        let latest = Version::latest(&versions).unwrap();
        assert_eq!(latest.raw_id.as_deref(), Some("4.16.0"));
    }

    #[test]
    fn test_latest_of_nothing() {
        assert!(Version::latest(&[]).is_none());
        assert!(Version::latest(&[Version::link("openshift-v4.15.0")]).is_none());
    }

    #[test]
    fn test_end_of_life_timestamp() {
        let version: Version = serde_json::from_value(json!({
            "kind": "Version",
            "id": "openshift-v4.12.0",
            "raw_id": "4.12.0",
            "default": false,
            "end_of_life_timestamp": "2025-01-17T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(version.default, Some(false));
        let before = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert!(!version.is_end_of_life(before));
        assert!(version.is_end_of_life(after));
    }
}
