//! Area-weighted runoff for a geography from several gauge sites.

use chrono::NaiveDate;
use flowstat_series::Series;
use tracing::debug;

use crate::error::RunoffError;
use crate::weights::WeightsMatrix;

/// Runoff record of one gauge site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRunoff {
    site_id: String,
    runoff: Series,
}

impl SiteRunoff {
    pub fn new(site_id: impl Into<String>, runoff: Series) -> Self {
        Self {
            site_id: site_id.into(),
            runoff,
        }
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn runoff(&self) -> &Series {
        &self.runoff
    }
}

/// Daily runoff of `geoid` as the weighted mean of its sites' runoff.
///
/// The output covers every day from `start` to `end`; when a bound is not
/// given, the earliest first date (or latest last date) across sites is
/// used. On each day only sites with both a weight for `geoid` and an
/// observed value contribute, and the weighted sum is divided by the sum of
/// their weights. Days without any contributing site are `NaN`.
///
/// # Errors
///
/// Returns [`RunoffError::NoSites`] for an empty site list,
/// [`RunoffError::UnknownGeography`] if no site has a weight for `geoid`,
/// and [`RunoffError::InvalidDateRange`] if `start` is after `end`.
#[tracing::instrument(skip(sites, weights), fields(n_sites = sites.len()))]
pub fn calculate_geometric_runoff(
    geoid: &str,
    sites: &[SiteRunoff],
    weights: &WeightsMatrix,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Series, RunoffError> {
    if sites.is_empty() {
        return Err(RunoffError::NoSites);
    }
    if !weights.contains_geography(geoid) {
        return Err(RunoffError::UnknownGeography {
            geoid: geoid.to_string(),
        });
    }

    let ranges: Vec<(NaiveDate, NaiveDate)> =
        sites.iter().filter_map(|s| s.runoff.date_range()).collect();
    let start = start.or_else(|| ranges.iter().map(|r| r.0).min());
    let end = end.or_else(|| ranges.iter().map(|r| r.1).max());
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(Series::new(Vec::new(), Vec::new())?);
    };
    if start > end {
        return Err(RunoffError::InvalidDateRange { start, end });
    }

    let dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let mut numerator = vec![0.0; dates.len()];
    let mut denominator = vec![0.0; dates.len()];

    for site in sites {
        let Some(weight) = weights.weight(&site.site_id, geoid) else {
            debug!(site = %site.site_id, "no weight for geography: site skipped");
            continue;
        };
        for (date, value) in site.runoff.iter() {
            if value.is_nan() || date < start || date > end {
                continue;
            }
            let i = day_index(start, date);
            numerator[i] += weight * value;
            denominator[i] += weight;
        }
    }

    let values = numerator
        .iter()
        .zip(&denominator)
        .map(|(&n, &d)| if d == 0.0 { f64::NAN } else { n / d })
        .collect();
    Ok(Series::new(dates, values)?)
}

fn day_index(start: NaiveDate, date: NaiveDate) -> usize {
    debug_assert!(date >= start);
    (date - start).num_days() as usize
}
