//! Version shape checks and loose semantic-version ordering.
//!
//! Package managers hand out versions that are rarely strict SemVer
//! (`2.5`, `2.5.0.0`, `v2.5.0`, `2.0.0-RC1`, `9999999-dev`). Everything here
//! coerces those into a comparable form, leaning on [`semver::Prerelease`]
//! for pre-release precedence.
use regex::Regex;
use semver::Prerelease;
use std::{cmp::Ordering, sync::LazyLock};

/// Matches versions starting with `<digit>.<digits>`, e.g. 2.0.10
static NUMERIC_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]\.[0-9]+\.?[0-9.]*").unwrap());

/// Captures the leading `major.minor[.patch]` numeric run of a version
static MAJOR_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]\.[0-9]+\.?[0-9]*)").unwrap());

/// Loose version grammar accepted by [`LooseVersion::parse`]. A pre-release
/// only starts with a digit after an explicit `-` or `_`, so numeric
/// components are never re-read as one.
static LOOSE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[vV]?(?<major>\d+)(?:\.(?<minor>\d+))?(?:\.(?<patch>\d+))?(?<extra>(?:\.\d+)*)(?:[-_](?<pre>[0-9A-Za-z][0-9A-Za-z.-]*)|\.?(?<pre_alpha>[A-Za-z][0-9A-Za-z.-]*))?(?:\+[0-9A-Za-z.-]*)?$",
    )
    .unwrap()
});

/// Check whether a version is numeric, e.g. 2.0.10 but not dev-master or
/// v2.0.10.
pub fn is_numeric_version(version: &str) -> bool {
    NUMERIC_VERSION_REGEX.is_match(version)
}

/// Returns the leading numeric run of a version ("2.5.3-beta" -> "2.5.3"),
/// or the version itself when it has no numeric prefix.
pub fn major_version(version: &str) -> &str {
    MAJOR_VERSION_REGEX
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(version)
}

/// A version coerced from a loosely formatted string.
///
/// Field order drives the derived ordering: numeric components first, then
/// any components past patch, then pre-release (a release sorts above all
/// of its pre-releases). Trailing zero components are dropped from `extra`
/// so `2.5.0.0` and `2.5.0` are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LooseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: Vec<u64>,
    pub pre: Prerelease,
}

impl LooseVersion {
    /// Parse a loosely formatted version, returning None when the string
    /// has no comparable numeric form (e.g. branch names like dev-master).
    pub fn parse(version: &str) -> Option<Self> {
        let trimmed = version.trim().trim_end_matches('.');
        let caps = LOOSE_VERSION_REGEX.captures(trimmed)?;

        let number = |name: &str| -> Option<u64> {
            match caps.name(name) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let mut extra = caps
            .name("extra")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()?;

        while extra.last() == Some(&0) {
            extra.pop();
        }

        let pre = match caps.name("pre").or_else(|| caps.name("pre_alpha")) {
            Some(m) => Prerelease::new(&m.as_str().to_ascii_lowercase()).ok()?,
            None => Prerelease::EMPTY,
        };

        Some(Self {
            major,
            minor,
            patch,
            extra,
            pre,
        })
    }
}

/// Compare two loosely formatted versions. Returns None when either side
/// cannot be coerced.
pub fn compare_versions(left: &str, right: &str) -> Option<Ordering> {
    let left = LooseVersion::parse(left)?;
    let right = LooseVersion::parse(right)?;
    Some(left.cmp(&right))
}

/// True only when both versions are comparable and `left` sorts strictly
/// before `right`.
pub fn is_older(left: &str, right: &str) -> bool {
    matches!(compare_versions(left, right), Some(Ordering::Less))
}

/// Whether moving from `from` to `to` is an upgrade. Identical strings count
/// as an upgrade; incomparable versions count as a downgrade.
pub fn is_upgrade(from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }

    matches!(
        compare_versions(to, from),
        Some(Ordering::Greater | Ordering::Equal)
    )
}
