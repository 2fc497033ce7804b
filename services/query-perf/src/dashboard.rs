//! Web dashboard with JSON API endpoints and server-rendered pills

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use query_perf_app::api::ScheduledQueryResponse;
use query_perf_app::components::query_table::format_interval;
use query_perf_app::components::tooltip::TOOLTIP_BACKGROUND;
use query_perf_app::pill::PillView;

use crate::config::{DashboardConfig, ScheduledQueryConfig};

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub dashboard: Arc<DashboardConfig>,
    pub queries: Arc<Vec<ScheduledQueryConfig>>,
}

/// Build the dashboard axum router
pub fn build_router(dashboard: DashboardConfig, queries: Vec<ScheduledQueryConfig>) -> Router {
    let dashboard_state = DashboardState {
        dashboard: Arc::new(dashboard),
        queries: Arc::new(queries),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/queries", get(queries_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for a rendered pill, mirroring the `PillCell` component
pub fn pill_html(pill: &PillView) -> String {
    let key = escape_html(&pill.attachment_key);
    let lines: String = pill
        .tooltip_lines
        .iter()
        .map(|line| {
            format!(
                r#"<span style="display: block;">{}</span>"#,
                escape_html(line)
            )
        })
        .collect();

    format!(
        r#"<div class="pill-cell">
            <span data-tip="" data-for="{key}" data-tip-disable="{disabled}"{focus}>
                <span class="{class_name}">{label}</span>
            </span>
            <div id="{key}" role="tooltip" class="data-table__tooltip data-table__tooltip--bottom">
                <span class="{tooltip_class}">{lines}</span>
            </div>
        </div>"#,
        key = key,
        disabled = !pill.tooltip_enabled,
        focus = if pill.tooltip_enabled {
            format!(r#" tabindex="0" aria-describedby="{}""#, key)
        } else {
            String::new()
        },
        class_name = escape_html(&pill.class_name),
        label = escape_html(&pill.label),
        tooltip_class = escape_html(&pill.tooltip_class),
        lines = lines,
    )
}

fn to_response(
    query: &ScheduledQueryConfig,
    dashboard: &DashboardConfig,
) -> ScheduledQueryResponse {
    ScheduledQueryResponse {
        id: query.id,
        name: query.name.clone(),
        performance: query.performance.clone(),
        interval_seconds: query.interval_seconds,
        pill: query.pill(dashboard).render(),
    }
}

async fn index_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    tracing::debug!("Rendering dashboard for {} queries", state.queries.len());

    let query_rows: String = state
        .queries
        .iter()
        .map(|q| {
            let pill = q.pill(&state.dashboard).render();
            format!(
                r#"<tr style="border-bottom: 1px solid #dee2e6;">
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem;">{}</td>
                </tr>"#,
                escape_html(&q.name),
                format_interval(q.interval_seconds),
                pill_html(&pill)
            )
        })
        .collect();

    let body = if state.queries.is_empty() {
        "<p>No scheduled queries.</p>".to_string()
    } else {
        format!(
            r#"<table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="border-bottom: 2px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">Name</th>
                    <th style="padding: 0.5rem; text-align: left;">Frequency</th>
                    <th style="padding: 0.5rem; text-align: left;">Performance impact</th>
                </tr>
            </thead>
            <tbody id="query-body">{query_rows}</tbody>
        </table>"#,
            query_rows = query_rows
        )
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Query Performance</title>
    <style>
        .pill-cell {{ position: relative; display: inline-block; }}
        .data-table__pill {{ display: inline-block; padding: 0.25em 0.6em; border-radius: 1rem; font-size: 0.85em; font-weight: 600; background-color: #e2e3e5; color: #383d41; }}
        .data-table__pill--minimal {{ background-color: #d4edda; color: #155724; }}
        .data-table__pill--considerable {{ background-color: #fff3cd; color: #856404; }}
        .data-table__pill--excessive, .data-table__pill--denylisted {{ background-color: #f8d7da; color: #721c24; }}
        .data-table__tooltip {{ display: none; position: absolute; top: 100%; left: 50%; transform: translateX(-50%); margin-top: 0.5rem; z-index: 10; padding: 0.5rem 0.75rem; border-radius: 0.25rem; font-size: 0.8em; white-space: nowrap; color: #fff; background-color: {background}; }}
        [data-tip-disable="false"]:hover + .data-table__tooltip,
        [data-tip-disable="false"]:focus + .data-table__tooltip {{ display: block; }}
    </style>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
    <h1>Query Performance</h1>
    <section>
        <h2>Scheduled Queries</h2>
        {body}
    </section>
</body>
</html>"#,
        background = TOOLTIP_BACKGROUND,
        body = body,
    );

    Html(html)
}

async fn queries_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    tracing::debug!("Serving {} queries as JSON", state.queries.len());

    let queries: Vec<ScheduledQueryResponse> = state
        .queries
        .iter()
        .map(|q| to_response(q, &state.dashboard))
        .collect();

    axum::Json(queries)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
