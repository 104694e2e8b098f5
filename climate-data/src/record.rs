//! Climate records and summary aggregates as returned by the API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One observation for a (region, parameter, year, period).
///
/// The API carries more fields (`region_code`, `fetched_at`, ...); only the
/// ones the dashboard displays are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    /// Period code, e.g. "jan", "win" or "ann".
    pub period: String,
    /// "month", "season" or "annual". Kept as the raw wire string so a record
    /// with an unexpected type still decodes.
    #[serde(default)]
    pub period_type: String,
    /// Measured value. Decimal fields arrive as JSON strings, so anything
    /// numeric-looking is accepted and everything else becomes `None`.
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
}

/// Aggregate statistics over the filtered record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub min_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_value: Option<f64>,
    #[serde(default)]
    pub first_year: Option<i32>,
    #[serde(default)]
    pub last_year: Option<i32>,
}

/// Everything one refresh cycle renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Records in the order the API returned them.
    pub records: Vec<Record>,
    /// Total number of matching records, which may exceed `records.len()`.
    pub total: u64,
    pub summary: Summary,
}

impl Summary {
    /// Stand-in used when the summary endpoint could not be read.
    pub fn unavailable() -> Self {
        Summary {
            count: Some(0),
            ..Summary::default()
        }
    }
}

/// Interpret a JSON value as a finite number.
///
/// Numbers and numeric strings (surrounding whitespace allowed) convert;
/// null, booleans, empty or non-numeric strings, and non-finite results do not.
pub fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(numeric)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0)
        .map(|n| n as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_string_decimals() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "year": 2020,
            "period_type": "annual",
            "period": "ann",
            "value": "100.50",
            "region_code": "UK",
        }))
        .unwrap();
        assert_eq!(record.value, Some(100.5));
        assert_eq!(record.period, "ann");
    }

    #[test]
    fn missing_or_non_numeric_values_decode_as_none() {
        for value in [json!(null), json!("n/a"), json!(""), json!(true), json!("NaN")] {
            let record: Record = serde_json::from_value(json!({
                "year": 2020,
                "period_type": "month",
                "period": "jan",
                "value": value,
            }))
            .unwrap();
            assert_eq!(record.value, None);
        }

        let record: Record =
            serde_json::from_value(json!({"year": 2020, "period": "jan"})).unwrap();
        assert_eq!(record.value, None);
        assert_eq!(record.period_type, "");
    }

    #[test]
    fn summary_fields_are_optional() {
        let summary: Summary = serde_json::from_value(json!({"count": 0})).unwrap();
        assert_eq!(summary, Summary::unavailable());

        let summary: Summary = serde_json::from_value(json!({
            "count": 2,
            "min_value": 100.5,
            "max_value": "120.75",
            "avg_value": 110.625,
            "first_year": 2020,
            "last_year": 2021,
            "region": "UK",
        }))
        .unwrap();
        assert_eq!(summary.count, Some(2));
        assert_eq!(summary.max_value, Some(120.75));
        assert_eq!(summary.first_year, Some(2020));
    }

    #[test]
    fn numeric_accepts_padded_strings() {
        assert_eq!(numeric(&json!(" 3 ")), Some(3.0));
        assert_eq!(numeric(&json!(-1.005)), Some(-1.005));
        assert_eq!(numeric(&json!("abc")), None);
        assert_eq!(numeric(&json!([1])), None);
    }
}
