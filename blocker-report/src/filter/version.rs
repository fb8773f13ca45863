//! Affected/target version filter.

use crate::bugs::Bug;

/// Admits bugs matching any requested target version or affected version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionFilter {
    target_versions: Vec<String>,
    versions: Vec<String>,
}

impl VersionFilter {
    /// Creates a filter from requested target and affected versions.
    #[must_use]
    pub fn new(target_versions: Vec<String>, versions: Vec<String>) -> Self {
        Self {
            target_versions,
            versions,
        }
    }

    /// Returns true if no version was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target_versions.is_empty() && self.versions.is_empty()
    }

    /// Returns true if `bug` passes the filter.
    ///
    /// The target-version and affected-version matches are unioned, so a bug
    /// matching both is admitted once.
    #[must_use]
    pub fn admits(&self, bug: &Bug) -> bool {
        self.is_empty()
            || any_requested(&self.target_versions, &bug.target_versions)
            || any_requested(&self.versions, &bug.versions)
    }
}

fn any_requested(requested: &[String], actual: &[String]) -> bool {
    requested.iter().any(|version| actual.contains(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bug(target: &[&str], affected: &[&str]) -> Bug {
        Bug {
            key: "OCPBUGS-1".to_string(),
            summary: "s".to_string(),
            component: "kube-apiserver".to_string(),
            versions: affected.iter().map(|v| v.to_string()).collect(),
            target_versions: target.iter().map(|v| v.to_string()).collect(),
            blocker: None,
            severity: "-".to_string(),
            priority: String::new(),
            status: "new".to_string(),
            link: "<unknown>".to_string(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_filter_admits_everything() {
        assert!(VersionFilter::default().admits(&bug(&[], &[])));
    }

    #[test]
    fn matches_target_version() {
        let filter = VersionFilter::new(strings(&["4.11.z"]), vec![]);

        assert!(filter.admits(&bug(&["4.11.z"], &["4.10"])));
        assert!(!filter.admits(&bug(&["4.12"], &["4.11.z"])));
    }

    #[test]
    fn matches_affected_version() {
        let filter = VersionFilter::new(vec![], strings(&["4.10"]));

        assert!(filter.admits(&bug(&["4.11.z"], &["4.10"])));
        assert!(!filter.admits(&bug(&["4.10"], &["4.9"])));
    }

    #[test]
    fn matches_any_of_several_versions() {
        let filter = VersionFilter::new(strings(&["4.12"]), vec![]);
        assert!(filter.admits(&bug(&["4.11.z", "4.12"], &[])));
    }

    // A bug matching both the target and the affected version is kept once.
    #[test]
    fn bug_matching_both_lists_is_not_duplicated() {
        let filter = VersionFilter::new(strings(&["4.11.z"]), strings(&["4.10"]));
        let bugs = vec![bug(&["4.11.z"], &["4.10"]), bug(&["4.9"], &["4.9"])];

        let kept: Vec<&Bug> = bugs.iter().filter(|b| filter.admits(b)).collect();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], &bugs[0]);
    }
}
