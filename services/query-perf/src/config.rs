//! Configuration types for the query performance dashboard

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use query_perf_app::pill::{Pill, PillId, PillLabel};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub queries: Vec<ScheduledQueryConfig>,
}

impl Config {
    /// Reject configurations whose pills could not be told apart
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = HashSet::new();
        for query in &self.queries {
            if query.name.trim().is_empty() {
                return Err(crate::QueryPerfError::Config(
                    "Scheduled query name must not be empty".to_string(),
                ));
            }
            if let Some(id) = query.id {
                if !seen.insert(id) {
                    return Err(crate::QueryPerfError::Config(format!(
                        "Duplicate scheduled query id {} ({})",
                        id, query.name
                    )));
                }
            }
            if PillLabel::parse(&query.performance).impact().is_none() {
                tracing::warn!(
                    "Scheduled query {:?} has unrecognized performance label {:?}; its tooltip will be disabled",
                    query.name,
                    query.performance
                );
            }
        }
        Ok(())
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
    /// Prefix for pill attachment keys, `pill` when unset
    #[serde(default)]
    pub id_prefix: Option<String>,
    /// Word tooltips for a single host rather than the whole fleet
    #[serde(default)]
    pub host_details: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
            id_prefix: None,
            host_details: false,
        }
    }
}

/// A scheduled query and the performance impact computed for it upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledQueryConfig {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    pub performance: String,
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
}

impl ScheduledQueryConfig {
    /// Build the pill input for this query using dashboard-wide options
    pub fn pill(&self, dashboard: &DashboardConfig) -> Pill {
        let mut pill = Pill::new(self.performance.clone(), self.id.map(PillId::Number))
            .with_host_details(dashboard.host_details);
        if let Some(prefix) = &dashboard.id_prefix {
            pill = pill.with_id_prefix(prefix.clone());
        }
        pill
    }
}

fn default_dashboard_port() -> u16 {
    11120
}

fn default_interval() -> u64 {
    86_400
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::QueryPerfError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    tracing::debug!(
        "Loaded {} scheduled queries from {:?}",
        config.queries.len(),
        path
    );
    Ok(config)
}
