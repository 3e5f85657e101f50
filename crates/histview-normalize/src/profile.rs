//! Source profiles: the per-source defaulting rules.
//!
//! The two building-producing sources share one canonical assembly path
//! ([`crate::building`]); everything that legitimately differs between
//! them lives here as a static [`SourceProfile`] looked up by
//! [`SourceKind`]. Adding a source tier means adding a profile, not a
//! second mapping function.

use histview_types::Confidence;

/// The source families that can produce building records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Digitized Sanborn fire-insurance sheets.
    Sanborn,
    /// County GIS parcel exports.
    Gis,
}

impl core::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sanborn => write!(f, "Sanborn"),
            Self::Gis => write!(f, "GIS"),
        }
    }
}

/// How the canonical `status` field is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Take the record's status, falling back to "completed".
    RecordOrDefault,
    /// Force "completed": the source only describes standing structures.
    AlwaysCompleted,
}

/// How the canonical `height` field is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightPolicy {
    /// Always derive from story count; the source never carries height.
    DeriveFromStories,
    /// Use the surveyed height when present, derive otherwise.
    PreferSurveyed,
}

/// How the embedded `dataSource.year` field is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceYearPolicy {
    /// The year of the historical survey the record came from.
    SurveyYear,
    /// The year the pipeline ran: the record reflects present-day data.
    ProcessingYear,
}

/// The defaulting rules for one source family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceProfile {
    /// Which source family this profile describes.
    pub kind: SourceKind,
    /// Default `dataSource.name` when the record does not override it.
    pub source_name: &'static str,
    /// Trust tier assigned when the record carries no override.
    pub default_confidence: Confidence,
    /// Status defaulting rule.
    pub status_policy: StatusPolicy,
    /// Height defaulting rule.
    pub height_policy: HeightPolicy,
    /// Source-year rule.
    pub year_policy: SourceYearPolicy,
}

/// Return the canonical profile for a source family.
pub const fn profile(kind: SourceKind) -> SourceProfile {
    match kind {
        SourceKind::Sanborn => SourceProfile {
            kind: SourceKind::Sanborn,
            source_name: "Sanborn Fire Insurance Map",
            default_confidence: Confidence::High,
            status_policy: StatusPolicy::RecordOrDefault,
            height_policy: HeightPolicy::DeriveFromStories,
            year_policy: SourceYearPolicy::SurveyYear,
        },
        SourceKind::Gis => SourceProfile {
            kind: SourceKind::Gis,
            source_name: "Ramsey County GIS",
            default_confidence: Confidence::VeryHigh,
            status_policy: StatusPolicy::AlwaysCompleted,
            height_policy: HeightPolicy::PreferSurveyed,
            year_policy: SourceYearPolicy::ProcessingYear,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanborn_profile_never_trusts_height() {
        let p = profile(SourceKind::Sanborn);
        assert_eq!(p.height_policy, HeightPolicy::DeriveFromStories);
        assert_eq!(p.default_confidence, Confidence::High);
        assert_eq!(p.year_policy, SourceYearPolicy::SurveyYear);
    }

    #[test]
    fn gis_profile_is_most_trusted_tier() {
        let p = profile(SourceKind::Gis);
        assert_eq!(p.default_confidence, Confidence::VeryHigh);
        assert_eq!(p.status_policy, StatusPolicy::AlwaysCompleted);
        assert_eq!(p.height_policy, HeightPolicy::PreferSurveyed);
    }
}
