//! BDD test world for the query performance dashboard

use cucumber::World;
use query_perf::config::{DashboardConfig, ScheduledQueryConfig};
use query_perf_app::pill::{Pill, PillView};

#[derive(Debug, Default, World)]
pub struct QueryPerfWorld {
    // Pill rendering
    pub pill: Option<Pill>,
    pub rendered: Vec<PillView>,

    // Dashboard
    pub dashboard: DashboardConfig,
    pub queries: Vec<ScheduledQueryConfig>,
    pub response_body: Option<String>,
}

impl QueryPerfWorld {
    pub fn last_rendered(&self) -> &PillView {
        self.rendered.last().expect("no pill rendered")
    }
}
