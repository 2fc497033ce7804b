//! Scheduled query table component

use crate::api::ScheduledQueryResponse;
use crate::components::pill_cell::PillCell;
use leptos::prelude::*;

/// Fetches /api/queries and displays each query's performance impact as a pill
#[component]
pub fn QueryTable(
    #[prop(optional, into)] custom_id_prefix: Option<String>,
    #[prop(optional)] host_details: bool,
) -> impl IntoView {
    let queries = Resource::new(
        || (),
        |_| async move { fetch_queries().await.unwrap_or_default() },
    );

    view! {
        <section>
            <h2>"Scheduled Queries"</h2>
            <Suspense fallback=move || view! { <p>"Loading queries..."</p> }>
                {move || {
                    let custom_id_prefix = custom_id_prefix.clone();
                    queries.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No scheduled queries."</p> }.into_any()
                        } else {
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Name"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Frequency"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Performance impact"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data.into_iter().map(|q| {
                                            let prefix = custom_id_prefix.clone().unwrap_or_default();
                                            view! {
                                                <tr style="border-bottom: 1px solid #dee2e6;">
                                                    <td style="padding: 0.5rem;">{q.name}</td>
                                                    <td style="padding: 0.5rem;">{format_interval(q.interval_seconds)}</td>
                                                    <td style="padding: 0.5rem;">
                                                        {match q.id {
                                                            Some(id) => view! {
                                                                <PillCell
                                                                    label=q.performance
                                                                    id=id
                                                                    custom_id_prefix=prefix
                                                                    host_details=host_details
                                                                />
                                                            }.into_any(),
                                                            None => view! {
                                                                <PillCell
                                                                    label=q.performance
                                                                    custom_id_prefix=prefix
                                                                    host_details=host_details
                                                                />
                                                            }.into_any(),
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

/// Human-readable query interval, e.g. "Every 6 hours"
pub fn format_interval(seconds: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
        (1, "second"),
    ];

    if seconds == 0 {
        return "Never".to_string();
    }
    let (size, unit) = UNITS
        .into_iter()
        .find(|(size, _)| seconds % size == 0)
        .unwrap_or((1, "second"));
    match seconds / size {
        1 => format!("Every {}", unit),
        n => format!("Every {} {}s", n, unit),
    }
}

async fn fetch_queries() -> Result<Vec<ScheduledQueryResponse>, String> {
    // In SSR mode, this returns empty (the server renders its own table)
    // In hydrate/CSR mode, this fetches from the JSON API
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/queries", origin);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_picks_largest_whole_unit() {
        assert_eq!(format_interval(86_400), "Every day");
        assert_eq!(format_interval(21_600), "Every 6 hours");
        assert_eq!(format_interval(90), "Every 90 seconds");
        assert_eq!(format_interval(300), "Every 5 minutes");
        assert_eq!(format_interval(1), "Every second");
    }

    #[test]
    fn zero_interval_never_runs() {
        assert_eq!(format_interval(0), "Never");
    }
}
