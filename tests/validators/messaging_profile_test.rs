//! Tests for the messaging profile validator.

use assurance_toolkit::{Connection, Event, Namespace};
use assurance_validators::validators::{MessagingProfile, REQUIRED_PROFILE_MIXINS};
use assurance_validators::Outcome;
use serde_json::json;

use crate::fixtures::*;

fn events() -> Vec<Event> {
    vec![ecid_event(), push_token_event(), edge_config_event(), property_event()]
}

fn property() -> Connection {
    loaded(
        Namespace::LaunchProperty,
        PROPERTY_ID,
        json!({ "companyId": COMPANY_ID }),
    )
}

fn datastream() -> Connection {
    loaded(
        Namespace::EdgeConfig,
        EDGE_CONFIG_ID,
        json!({ "profileSchema": SCHEMA_URL }),
    )
}

fn schema(mixins: &[&str]) -> Connection {
    loaded(Namespace::Schema, SCHEMA_URL, json!({ "extends": mixins }))
}

fn profile(token: &str) -> Connection {
    loaded(Namespace::Profile, ECID, json!({ "pushDetails": { "token": token } }))
}

#[test]
fn profile_holds_device_token() {
    let connections = vec![
        property(),
        datastream(),
        schema(REQUIRED_PROFILE_MIXINS),
        profile(PUSH_TOKEN),
    ];

    let verdict = evaluate(&MessagingProfile, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Matched);
    assert_eq!(verdict.message, "Data successfully written to Profile");
}

#[test]
fn missing_ecid_comes_first() {
    let events = vec![push_token_event(), edge_config_event()];

    let verdict = evaluate(&MessagingProfile, &events, &[]);
    assert_eq!(verdict.message, "No ECID Detected");
    assert!(verdict
        .details
        .as_deref()
        .is_some_and(|d| d.contains("restarting your mobile app")));
}

#[test]
fn missing_push_token_links_setup_docs() {
    let events = vec![ecid_event(), edge_config_event()];

    let verdict = evaluate(&MessagingProfile, &events, &[]);
    assert_eq!(verdict.message, "Push Token Not Captured");
    assert_eq!(verdict.links[0].label, "Documentation: Setup Push");
}

#[test]
fn missing_edge_config() {
    let events = vec![ecid_event(), push_token_event()];

    let verdict = evaluate(&MessagingProfile, &events, &[]);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Edge Not Configured");
    assert!(verdict.links.is_empty());
}

#[test]
fn schema_missing_mixins_links_datastream() {
    let events = events();
    let connections = vec![
        property(),
        datastream(),
        schema(&[REQUIRED_PROFILE_MIXINS[0]]),
        profile(PUSH_TOKEN),
    ];

    let verdict = evaluate(&MessagingProfile, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Invalid Profile Dataset");
    assert_eq!(verdict.events, vec![events[2].uuid.clone()]);
    assert_eq!(
        verdict.links[0].link,
        "https://experience.adobe.com/data-collection/dataStreams/companies/mockCompanyId/dataStreams/configId/environments/envName/edit"
    );
}

#[test]
fn loading_profile_after_valid_schema() {
    let connections = vec![
        datastream(),
        schema(REQUIRED_PROFILE_MIXINS),
        loading(Namespace::Profile, ECID),
    ];

    let verdict = evaluate(&MessagingProfile, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading Profile");
}

#[test]
fn loading_schema() {
    let connections = vec![datastream(), loading(Namespace::Schema, SCHEMA_URL)];

    let verdict = evaluate(&MessagingProfile, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading Profile Schema");
}

#[test]
fn failed_profile() {
    let connections = vec![
        datastream(),
        schema(REQUIRED_PROFILE_MIXINS),
        failed(Namespace::Profile, ECID, None),
    ];

    let verdict = evaluate(&MessagingProfile, &events(), &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Profile");
}

#[test]
fn token_mismatch_points_at_token_event() {
    let events = events();
    let connections = vec![datastream(), schema(REQUIRED_PROFILE_MIXINS), profile("stale")];

    let verdict = evaluate(&MessagingProfile, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Push Token Mismatch");
    assert_eq!(verdict.events, vec![events[1].uuid.clone()]);
}

#[test]
fn unknown_without_schema() {
    let verdict = evaluate(&MessagingProfile, &events(), &[profile(PUSH_TOKEN)]);
    assert_eq!(verdict.result, Outcome::Unknown);
}

#[test]
fn loading_edge_configuration() {
    let connections = vec![loading(Namespace::EdgeConfig, EDGE_CONFIG_ID)];

    let verdict = evaluate(&MessagingProfile, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading Edge Configuration");
}

#[test]
fn failed_edge_configuration_points_at_edge_event() {
    let events = events();
    let connections = vec![failed(Namespace::EdgeConfig, EDGE_CONFIG_ID, Some(500))];

    let verdict = evaluate(&MessagingProfile, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Edge Configuration");
    assert_eq!(verdict.events, vec![events[2].uuid.clone()]);
}

#[test]
fn failed_schema() {
    let events = events();
    let connections = vec![datastream(), failed(Namespace::Schema, SCHEMA_URL, Some(403))];

    let verdict = evaluate(&MessagingProfile, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Profile Schema");
    assert_eq!(verdict.events, vec![events[2].uuid.clone()]);
    assert!(verdict
        .details
        .as_deref()
        .is_some_and(|d| d.contains("load Schemas")));
}
