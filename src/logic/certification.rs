//! Certification lookup from regional release-date entries.

use crate::api::MovieDetails;

/// Find the certification for `region` in the detail response.
///
/// Uses the first non-empty certification string among the region's entries.
/// Every absence case (no detail, no regional entries, entries without a
/// certification) falls back to the same configured default.
pub fn certification(details: Option<&MovieDetails>, region: &str, default: &str) -> String {
    let Some(release_dates) = details.and_then(|d| d.release_dates.as_ref()) else {
        return default.to_string();
    };

    let Some(regional) = release_dates.results.iter().find(|r| r.region == region) else {
        return default.to_string();
    };

    regional
        .release_dates
        .iter()
        .map(|entry| entry.certification.trim())
        .find(|cert| !cert.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}
