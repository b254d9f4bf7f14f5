//! BDD step definitions for configuration validation feature

use cucumber::{then, when};

use notify_channels::NotifierConfig;

use crate::world::NotifyWorld;

fn build(world: &mut NotifyWorld, json: &str, message: Option<&str>) {
    let entry: NotifierConfig = serde_json::from_str(json).expect("config entry should parse");
    match entry.build(message, &world.transports()) {
        Ok(notifier) => world.notifier = Some(notifier),
        Err(e) => world.build_error = Some(e),
    }
}

#[when(expr = "a notifier is built from {string}")]
fn built_from(world: &mut NotifyWorld, json: String) {
    build(world, &json, None);
}

#[when(expr = "a notifier is built from {string} with message {string}")]
fn built_from_with_message(world: &mut NotifyWorld, json: String, message: String) {
    build(world, &json, Some(&message));
}

#[then(expr = "building should fail with {string}")]
fn building_fails(world: &mut NotifyWorld, expected: String) {
    assert!(world.notifier.is_none(), "a notifier was built");
    let err = world.build_error.as_ref().expect("no build error");
    assert_eq!(err.to_string(), expected);
}

#[then("building should succeed")]
fn building_succeeds(world: &mut NotifyWorld) {
    assert!(world.build_error.is_none(), "{:?}", world.build_error);
    assert!(world.notifier.is_some());
}
