//! Client-side API fetch helpers
//!
//! These types mirror the server-side JSON response structures
//! and are shared between SSR and client-side hydration.

use serde::{Deserialize, Serialize};

use crate::pill::PillView;

/// Scheduled query as returned by /api/queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledQueryResponse {
    pub id: Option<u64>,
    pub name: String,
    pub performance: String,
    pub interval_seconds: u64,
    pub pill: PillView,
}
