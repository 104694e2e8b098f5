//! Reading the page: `window.dashboardConfig` and the origin used to resolve
//! relative endpoints.

use climate_client::{ApiEndpoints, Url};
use climate_data::config::DashboardConfig;
use wasm_bindgen::JsValue;

/// Global set by the page template before the app loads.
const CONFIG_GLOBAL: &str = "dashboardConfig";

/// Read the dashboard configuration, falling back to defaults when the page
/// does not provide one or it cannot be parsed.
pub fn read_config() -> DashboardConfig {
    let Some(window) = web_sys::window() else {
        return DashboardConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            log::info!("No window.{} found, using default configuration", CONFIG_GLOBAL);
            return DashboardConfig::default();
        }
    };
    let json = js_sys::JSON::stringify(&raw)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    match DashboardConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid window.{}: {}", CONFIG_GLOBAL, e);
            DashboardConfig::default()
        }
    }
}

fn page_origin() -> Option<Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Url::parse(&origin).ok()
}

/// Resolve the configured endpoints against the page origin.
pub fn resolve_endpoints(config: &DashboardConfig) -> Result<ApiEndpoints, String> {
    let origin = page_origin();
    ApiEndpoints::resolve(&config.endpoints, origin.as_ref()).map_err(|e| e.to_string())
}
