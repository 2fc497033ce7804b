//! BDD step definitions for pill rendering

use cucumber::{given, then, when};
use query_perf_app::pill::{Pill, PillId};

use crate::world::QueryPerfWorld;

#[given(expr = "a pill labeled {string} with id {int}")]
fn pill_with_id(world: &mut QueryPerfWorld, label: String, id: u64) {
    world.pill = Some(Pill::new(label, Some(PillId::Number(id))));
}

#[given(expr = "a pill labeled {string} without an id")]
fn pill_without_id(world: &mut QueryPerfWorld, label: String) {
    world.pill = Some(Pill::new(label, None));
}

#[given(expr = "the custom id prefix {string}")]
fn custom_prefix(world: &mut QueryPerfWorld, prefix: String) {
    let pill = world.pill.take().expect("pill not set");
    world.pill = Some(pill.with_id_prefix(prefix));
}

#[given("the pill is shown on a host details page")]
fn host_details(world: &mut QueryPerfWorld) {
    let pill = world.pill.take().expect("pill not set");
    world.pill = Some(pill.with_host_details(true));
}

#[when("the pill is rendered")]
fn render_pill(world: &mut QueryPerfWorld) {
    let view = world.pill.as_ref().expect("pill not set").render();
    world.rendered.push(view);
}

#[when("the pill is rendered twice")]
fn render_pill_twice(world: &mut QueryPerfWorld) {
    render_pill(world);
    render_pill(world);
}

#[then("the tooltip should be enabled")]
fn tooltip_enabled(world: &mut QueryPerfWorld) {
    assert!(world.last_rendered().tooltip_enabled);
}

#[then("the tooltip should be disabled")]
fn tooltip_disabled(world: &mut QueryPerfWorld) {
    assert!(!world.last_rendered().tooltip_enabled);
}

#[then(expr = "the tooltip text should be {string}")]
fn tooltip_text(world: &mut QueryPerfWorld, expected: String) {
    assert_eq!(world.last_rendered().tooltip_text(), expected);
}

#[then("the tooltip text should be empty")]
fn tooltip_text_empty(world: &mut QueryPerfWorld) {
    assert!(world.last_rendered().tooltip_lines.is_empty());
}

#[then(expr = "the pill class should be {string}")]
fn pill_class(world: &mut QueryPerfWorld, expected: String) {
    assert_eq!(world.last_rendered().class_name, expected);
}

#[then(expr = "the attachment key should be {string}")]
fn attachment_key(world: &mut QueryPerfWorld, expected: String) {
    assert_eq!(world.last_rendered().attachment_key, expected);
}

#[then(expr = "the attachment key should start with {string}")]
fn attachment_key_prefix(world: &mut QueryPerfWorld, expected: String) {
    let key = &world.last_rendered().attachment_key;
    assert!(
        key.starts_with(&expected),
        "Expected '{}' to start with '{}'",
        key,
        expected
    );
}

#[then("the attachment keys should differ")]
fn attachment_keys_differ(world: &mut QueryPerfWorld) {
    assert_eq!(world.rendered.len(), 2);
    assert_ne!(
        world.rendered[0].attachment_key,
        world.rendered[1].attachment_key
    );
}
