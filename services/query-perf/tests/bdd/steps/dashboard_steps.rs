//! BDD step definitions for the dashboard feature

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use query_perf::config::ScheduledQueryConfig;
use query_perf::dashboard::build_router;
use query_perf_app::api::ScheduledQueryResponse;

use crate::world::QueryPerfWorld;

#[given(expr = "a scheduled query {string} with id {int} and performance {string}")]
fn query_with_id(world: &mut QueryPerfWorld, name: String, id: u64, performance: String) {
    world.queries.push(ScheduledQueryConfig {
        name,
        id: Some(id),
        performance,
        interval_seconds: 3600,
    });
}

#[given(expr = "the dashboard id prefix {string}")]
fn dashboard_prefix(world: &mut QueryPerfWorld, prefix: String) {
    world.dashboard.id_prefix = Some(prefix);
}

#[given("the dashboard shows a single host")]
fn dashboard_host_details(world: &mut QueryPerfWorld) {
    world.dashboard.host_details = true;
}

#[when(expr = "the dashboard page {string} is requested")]
async fn request_page(world: &mut QueryPerfWorld, uri: String) {
    let app = build_router(world.dashboard.clone(), world.queries.clone());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut QueryPerfWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut QueryPerfWorld, unexpected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

#[then(expr = "the pill {string} should have its tooltip enabled")]
fn pill_markup_enabled(world: &mut QueryPerfWorld, key: String) {
    let expected = format!(r#"data-for="{}" data-tip-disable="false""#, key);
    response_contains(world, expected);
}

#[then(expr = "the pill {string} should have its tooltip disabled")]
fn pill_markup_disabled(world: &mut QueryPerfWorld, key: String) {
    let expected = format!(r#"data-for="{}" data-tip-disable="true""#, key);
    response_contains(world, expected);
}

#[then(expr = "query {int} in the JSON response should have attachment key {string}")]
fn json_attachment_key(world: &mut QueryPerfWorld, index: usize, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    let queries: Vec<ScheduledQueryResponse> =
        serde_json::from_str(body).expect("response is not a query list");
    assert_eq!(queries[index].pill.attachment_key, expected);
}
