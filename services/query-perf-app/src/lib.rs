//! Query performance pills - Leptos frontend
//!
//! Renders the performance impact of scheduled queries as labeled pills
//! with explanatory tooltips.

pub mod api;
pub mod app;
pub mod components;
pub mod pill;

pub use app::App;
pub use pill::{PerformanceImpact, Pill, PillId, PillLabel, PillView};

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
