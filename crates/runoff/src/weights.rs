//! Site-to-geography area weights.

use std::collections::BTreeMap;

/// Fractional weights linking gauge sites to geographies.
///
/// A weight is the share of a geography's runoff attributed to a site. A
/// `NaN` weight is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightsMatrix {
    by_geoid: BTreeMap<String, BTreeMap<String, f64>>,
}

impl WeightsMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from `(site_id, geoid, weight)` triples. Later triples
    /// overwrite earlier ones for the same pair.
    pub fn from_entries<S, G>(entries: impl IntoIterator<Item = (S, G, f64)>) -> Self
    where
        S: Into<String>,
        G: Into<String>,
    {
        let mut matrix = Self::new();
        for (site, geoid, weight) in entries {
            matrix.insert(site, geoid, weight);
        }
        matrix
    }

    /// Sets the weight of `site_id` for `geoid`. `NaN` weights are not stored.
    pub fn insert(&mut self, site_id: impl Into<String>, geoid: impl Into<String>, weight: f64) {
        if weight.is_nan() {
            return;
        }
        self.by_geoid
            .entry(geoid.into())
            .or_default()
            .insert(site_id.into(), weight);
    }

    /// Weight of `site_id` for `geoid`, if one is recorded.
    pub fn weight(&self, site_id: &str, geoid: &str) -> Option<f64> {
        self.by_geoid.get(geoid)?.get(site_id).copied()
    }

    /// Returns `true` if any site carries a weight for `geoid`.
    pub fn contains_geography(&self, geoid: &str) -> bool {
        self.by_geoid.get(geoid).is_some_and(|sites| !sites.is_empty())
    }

    /// Geography identifiers in sorted order.
    pub fn geographies(&self) -> impl Iterator<Item = &str> {
        self.by_geoid.keys().map(String::as_str)
    }
}
