//! Filter state and the canonical records/summary query string.

use serde::{Deserialize, Serialize};

use crate::period::PeriodType;

/// Ordering requested from the records endpoint.
pub const ORDERING: &str = "year,period";

/// Upper bound on records returned in one response.
pub const RECORD_LIMIT: u32 = 5000;

/// Current values of the dashboard's filter controls.
///
/// Year inputs and the period code are kept as entered; an empty string means
/// "not set". Nothing is validated here, the backend rejects bad values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub region: String,
    pub parameter: String,
    pub period_type: PeriodType,
    pub start_year: String,
    pub end_year: String,
    pub period: String,
}

impl FilterState {
    pub fn new(region: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            parameter: parameter.into(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::from_filters(self)
    }
}

/// Ordered query parameters shared by the records and summary endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn from_filters(filters: &FilterState) -> Self {
        let mut pairs = vec![
            ("region", filters.region.clone()),
            ("parameter", filters.parameter.clone()),
            ("period_type", filters.period_type.as_str().to_string()),
            ("ordering", ORDERING.to_string()),
            ("limit", RECORD_LIMIT.to_string()),
        ];
        let optional = [
            ("start_year", &filters.start_year),
            ("end_year", &filters.end_year),
            ("period", &filters.period),
        ];
        for (key, value) in optional {
            if !value.is_empty() {
                pairs.push((key, value.clone()));
            }
        }
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encoded form, e.g. `region=UK&...&ordering=year%2Cperiod&limit=5000`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> FilterState {
        FilterState {
            region: "UK".to_string(),
            parameter: "Tmax".to_string(),
            period_type: PeriodType::Season,
            ..FilterState::default()
        }
    }

    #[test]
    fn always_contains_ordering_and_limit() {
        let query = filters().query();
        assert_eq!(query.get("ordering"), Some("year,period"));
        assert_eq!(query.get("limit"), Some("5000"));

        let encoded = query.to_query_string();
        assert!(encoded.contains("ordering=year%2Cperiod"));
        assert!(encoded.contains("limit=5000"));
    }

    #[test]
    fn omits_empty_years() {
        let query = filters().query();
        assert_eq!(query.get("start_year"), None);
        assert_eq!(query.get("end_year"), None);
        assert_eq!(
            query.to_query_string(),
            "region=UK&parameter=Tmax&period_type=season&ordering=year%2Cperiod&limit=5000"
        );
    }

    #[test]
    fn includes_years_when_set() {
        let mut f = filters();
        f.start_year = "1990".to_string();
        f.end_year = "2000".to_string();
        let encoded = f.query().to_query_string();
        assert!(encoded.ends_with("&start_year=1990&end_year=2000"));
    }

    #[test]
    fn passes_values_through_unvalidated() {
        let mut f = filters();
        f.region = "England & Wales".to_string();
        f.start_year = "abc".to_string();
        f.period = "JAN".to_string();
        let query = f.query();
        assert_eq!(query.get("region"), Some("England & Wales"));
        assert_eq!(query.get("start_year"), Some("abc"));
        assert_eq!(query.get("period"), Some("JAN"));
        assert!(query.to_query_string().starts_with("region=England+%26+Wales&"));
    }
}
