use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::Record;

/// Month codes in calendar order, as used by the API.
pub const MONTH_ORDER: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Seasonal and annual codes in display order.
pub const SEASON_ORDER: [&str; 5] = ["win", "spr", "sum", "aut", "ann"];

/// Granularity of a time bucket.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Month,
    Season,
    Annual,
}

impl PeriodType {
    pub const ALL: [PeriodType; 3] = [PeriodType::Month, PeriodType::Season, PeriodType::Annual];

    /// Value sent on the wire and carried by the period-group buttons.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Month => "month",
            PeriodType::Season => "season",
            PeriodType::Annual => "annual",
        }
    }

    /// Human-readable label shown in selectors and chart captions.
    pub fn label(&self) -> &'static str {
        match self {
            PeriodType::Month => "Month",
            PeriodType::Season => "Season",
            PeriodType::Annual => "Annual",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownPeriodType(pub String);

impl fmt::Display for UnknownPeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown period type: {}", self.0)
    }
}

impl std::error::Error for UnknownPeriodType {}

impl FromStr for PeriodType {
    type Err = UnknownPeriodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(PeriodType::Month),
            "season" => Ok(PeriodType::Season),
            "annual" => Ok(PeriodType::Annual),
            _ => Err(UnknownPeriodType(s.to_string())),
        }
    }
}

/// Sort key of a record's period within its year.
///
/// Monthly records index into [`MONTH_ORDER`]; everything else uses
/// win=0, spr=1, sum=2, aut=3, ann=4. Codes are matched case-insensitively
/// and unrecognized codes fall back to 0.
pub fn period_key(record: &Record) -> i32 {
    let code = record.period.trim().to_ascii_lowercase();
    let order: &[&str] = if record.period_type.eq_ignore_ascii_case("month") {
        &MONTH_ORDER
    } else {
        &SEASON_ORDER
    };
    match order.iter().position(|c| *c == code) {
        Some(idx) => idx as i32,
        None => {
            log::warn!(
                "unrecognized period code {:?} for period type {:?}, ordering it first",
                record.period,
                record.period_type
            );
            0
        }
    }
}

/// Sort records by year ascending, then by [`period_key`].
///
/// The sort is stable, so records with equal keys keep their relative order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(|r| (r.year, period_key(r)));
}
