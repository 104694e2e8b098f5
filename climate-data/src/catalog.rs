//! Regions and parameters offered by the dashboard selectors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub units: String,
}

/// Everything the selectors can offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub parameters: Vec<Parameter>,
}

const REGIONS: [(&str, &str); 17] = [
    ("UK", "United Kingdom"),
    ("ENGLAND", "England"),
    ("WALES", "Wales"),
    ("SCOTLAND", "Scotland"),
    ("NORTHERN_IRELAND", "Northern Ireland"),
    ("ENGLAND_WALES", "England & Wales"),
    ("ENGLAND_N", "England N"),
    ("ENGLAND_S", "England S"),
    ("SCOTLAND_N", "Scotland N"),
    ("SCOTLAND_E", "Scotland E"),
    ("SCOTLAND_W", "Scotland W"),
    ("ENGLAND_E_NE", "England E & NE"),
    ("ENGLAND_NW_WALES_N", "England NW / Wales N"),
    ("MIDLANDS", "Midlands"),
    ("EAST_ANGLIA", "East Anglia"),
    ("ENGLAND_SW_WALES_S", "England SW / Wales S"),
    ("ENGLAND_SE_CENTRAL_S", "England SE / Central S"),
];

const PARAMETERS: [(&str, &str, &str); 7] = [
    ("Tmax", "Mean daily maximum temperature", "°C"),
    ("Tmin", "Mean daily minimum temperature", "°C"),
    ("Tmean", "Mean temperature", "°C"),
    ("Rainfall", "Rainfall", "mm"),
    ("Raindays1mm", "Rain days (≥1mm)", "days"),
    ("Sunshine", "Sunshine duration", "hours"),
    ("AirFrost", "Air frost days", "days"),
];

impl Default for Catalog {
    /// Met Office UK regional series, used when the backend catalog is unavailable.
    fn default() -> Self {
        Self {
            regions: REGIONS
                .iter()
                .map(|(code, name)| Region {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            parameters: PARAMETERS
                .iter()
                .map(|(code, name, units)| Parameter {
                    code: code.to_string(),
                    name: name.to_string(),
                    units: units.to_string(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Look up a parameter by code, case-insensitively as the API does.
    pub fn parameter(&self, code: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code))
    }

    pub fn region(&self, code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.code.eq_ignore_ascii_case(code))
    }

    /// Region selector entries. A `current` code the catalog does not know is
    /// appended under its own name so the selector still shows it.
    pub fn region_choices(&self, current: &str) -> Vec<Region> {
        let mut choices = self.regions.clone();
        if !current.is_empty() && self.region(current).is_none() {
            choices.push(Region {
                code: current.to_string(),
                name: current.to_string(),
            });
        }
        choices
    }

    /// Parameter selector entries, with an unknown `current` code appended.
    pub fn parameter_choices(&self, current: &str) -> Vec<Parameter> {
        let mut choices = self.parameters.clone();
        if !current.is_empty() && self.parameter(current).is_none() {
            choices.push(Parameter {
                code: current.to_string(),
                name: current.to_string(),
                units: String::new(),
            });
        }
        choices
    }
}
