//! Dashboard configuration, read once at load.
//!
//! In the browser this is the `window.dashboardConfig` object rendered by the
//! page template, hence the camelCase keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub default_region: String,
    pub default_parameter: String,
    pub endpoints: Endpoints,
}

/// API locations. Relative paths are resolved against the page origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub records: String,
    pub summary: String,
    /// Optional catalog endpoints; the built-in catalog is used without them.
    pub regions: Option<String>,
    pub parameters: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_region: "UK".to_string(),
            default_parameter: "Tmax".to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            records: "/api/records/".to_string(),
            summary: "/api/records/summary/".to_string(),
            regions: None,
            parameters: None,
        }
    }
}

impl DashboardConfig {
    /// Parse the JSON form of the page configuration.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_page_config() {
        let config = DashboardConfig::from_json(
            r#"{
                "defaultRegion": "SCOTLAND",
                "defaultParameter": "Rainfall",
                "endpoints": {
                    "records": "/api/records/",
                    "summary": "/api/records/summary/",
                    "regions": "/api/regions/"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_region, "SCOTLAND");
        assert_eq!(config.default_parameter, "Rainfall");
        assert_eq!(config.endpoints.regions.as_deref(), Some("/api/regions/"));
        assert_eq!(config.endpoints.parameters, None);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());

        let config = DashboardConfig::from_json(r#"{"endpoints": {"records": "/r/"}}"#).unwrap();
        assert_eq!(config.endpoints.records, "/r/");
        assert_eq!(config.endpoints.summary, "/api/records/summary/");
    }
}
