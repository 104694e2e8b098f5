//! Fetching records, summaries, and the selector catalog.

use climate_data::catalog::{Catalog, Parameter, Region};
use climate_data::config::Endpoints;
use climate_data::payload::{Listing, RecordsPayload};
use climate_data::query::QueryParams;
use climate_data::record::{DashboardData, Summary};
use log::{info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};
use crate::transport::{Reply, ReqwestTransport, Transport};

/// Endpoint URLs with relative paths already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    pub records: Url,
    pub summary: Url,
    pub regions: Option<Url>,
    pub parameters: Option<Url>,
}

impl ApiEndpoints {
    /// Resolve configured endpoints, joining relative paths onto `base`.
    ///
    /// Without a base every endpoint must be an absolute URL.
    pub fn resolve(endpoints: &Endpoints, base: Option<&Url>) -> Result<Self> {
        let resolve_optional = |raw: &Option<String>| -> Result<Option<Url>> {
            raw.as_deref().map(|r| resolve_url(r, base)).transpose()
        };
        Ok(Self {
            records: resolve_url(&endpoints.records, base)?,
            summary: resolve_url(&endpoints.summary, base)?,
            regions: resolve_optional(&endpoints.regions)?,
            parameters: resolve_optional(&endpoints.parameters)?,
        })
    }
}

fn resolve_url(raw: &str, base: Option<&Url>) -> Result<Url> {
    let parsed = match base {
        Some(base) => base.join(raw),
        None => Url::parse(raw),
    };
    parsed.map_err(|e| FetchError::Url {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn with_query(base: &Url, query: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(query));
    url
}

/// Client for the records, summary, and catalog endpoints.
#[derive(Debug, Clone)]
pub struct DashboardClient<T = ReqwestTransport> {
    transport: T,
    endpoints: ApiEndpoints,
}

impl DashboardClient<ReqwestTransport> {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self::with_transport(ReqwestTransport::default(), endpoints)
    }
}

impl<T: Transport> DashboardClient<T> {
    pub fn with_transport(transport: T, endpoints: ApiEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Fetch records and summary for one query.
    ///
    /// Both requests are issued together and awaited together. A failed
    /// records request fails the refresh; a failed summary request only
    /// degrades the summary to `{count: 0}`.
    pub async fn refresh(&self, query: &QueryParams) -> Result<DashboardData> {
        let query_string = query.to_query_string();
        let records_url = with_query(&self.endpoints.records, &query_string);
        let summary_url = with_query(&self.endpoints.summary, &query_string);

        let (records_reply, summary_reply) = futures::join!(
            self.transport.get(&records_url),
            self.transport.get(&summary_url)
        );

        let payload: RecordsPayload = decode("records", records_reply?)?;
        let (records, total) = payload.into_parts();

        let summary = match summary_reply.and_then(|reply| decode::<Summary>("summary", reply)) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary unavailable, showing empty statistics: {}", e);
                Summary::unavailable()
            }
        };

        info!(
            "Fetched {} of {} records for {}",
            records.len(),
            total,
            query_string
        );
        Ok(DashboardData {
            records,
            total,
            summary,
        })
    }

    /// Fetch the selector catalog.
    ///
    /// Each half falls back to the built-in catalog when its endpoint is not
    /// configured or cannot be read.
    pub async fn fetch_catalog(&self) -> Catalog {
        let builtin = Catalog::default();
        let (regions, parameters) = futures::join!(
            self.fetch_listing::<Region>("regions", self.endpoints.regions.as_ref()),
            self.fetch_listing::<Parameter>("parameters", self.endpoints.parameters.as_ref())
        );
        Catalog {
            regions: regions.unwrap_or(builtin.regions),
            parameters: parameters.unwrap_or(builtin.parameters),
        }
    }

    async fn fetch_listing<V: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Option<&Url>,
    ) -> Option<Vec<V>> {
        let url = url?;
        let fetched = match self.transport.get(url).await {
            Ok(reply) => decode::<Listing<V>>(endpoint, reply),
            Err(e) => Err(e),
        };
        match fetched {
            Ok(listing) => {
                let (items, _) = listing.into_parts();
                if items.is_empty() {
                    warn!("{} endpoint returned no entries, using built-in list", endpoint);
                    None
                } else {
                    Some(items)
                }
            }
            Err(e) => {
                warn!("Failed to load {}, using built-in list: {}", endpoint, e);
                None
            }
        }
    }
}

fn decode<V: DeserializeOwned>(endpoint: &'static str, reply: Reply) -> Result<V> {
    if !reply.status.is_success() {
        return Err(FetchError::Status {
            endpoint,
            status: reply.status,
        });
    }
    serde_json::from_str(&reply.body).map_err(|source| FetchError::Decode { endpoint, source })
}
