//! Tests for the messaging app configuration validator.

use assurance_toolkit::{Connection, Namespace};
use assurance_validators::validators::MessagingApps;
use assurance_validators::Outcome;
use serde_json::{json, Value};

use crate::fixtures::*;

const APP_ID: &str = "com.example.app";

fn property() -> Connection {
    loaded(
        Namespace::LaunchProperty,
        PROPERTY_ID,
        json!({ "companyId": COMPANY_ID }),
    )
}

fn profile(platform: &str) -> Connection {
    loaded(
        Namespace::Profile,
        ECID,
        json!({ "pushDetails": { "platform": platform, "appID": APP_ID, "token": PUSH_TOKEN } }),
    )
}

fn apps(list: Value) -> Connection {
    loaded(Namespace::AppConfigurations, COMPANY_ID, list)
}

fn events() -> Vec<assurance_toolkit::Event> {
    vec![ecid_event(), property_event()]
}

#[test]
fn matching_app_is_configured() {
    let connections = vec![
        property(),
        profile("fcm"),
        apps(json!([{ "app_id": APP_ID, "messaging_service": "fcm" }])),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Matched);
    assert_eq!(verdict.message, "App is configured");
}

#[test]
fn sandbox_apns_matches_apns_app() {
    let connections = vec![
        property(),
        profile("apnsSandbox"),
        apps(json!([{ "app_id": APP_ID, "messaging_service": "apns" }])),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Matched);
}

#[test]
fn no_app_configurations() {
    let property_event = property_event();
    let connections = vec![property(), profile("fcm"), apps(json!([]))];

    let verdict = evaluate(&MessagingApps, &[ecid_event(), property_event.clone()], &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "No App Configurations");
    assert_eq!(verdict.events, vec![property_event.uuid]);
    assert_eq!(verdict.links[0].label, "Manage App Configurations");
    assert_eq!(
        verdict.links[0].link,
        "https://experience.adobe.com/data-collection/appConfigurations/companies/mockCompanyId/configurations"
    );
}

#[test]
fn no_matching_app() {
    let connections = vec![
        property(),
        profile("fcm"),
        apps(json!([{ "app_id": APP_ID, "messaging_service": "apns" }])),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "No Matching App Detected");
    assert!(verdict
        .details
        .as_deref()
        .is_some_and(|d| d.contains("a platform of 'fcm' and an App ID of 'com.example.app'")));
}

#[test]
fn loading_property_blocks_first() {
    let connections = vec![
        loading(Namespace::LaunchProperty, PROPERTY_ID),
        loading(Namespace::Profile, ECID),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading Launch Property");
}

#[test]
fn missing_ecid_links_extensions() {
    let verdict = evaluate(&MessagingApps, &[property_event()], &[property()]);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "No ECID Detected");
    assert_eq!(verdict.links.len(), 2);
}

#[test]
fn loading_profile() {
    let connections = vec![property(), loading(Namespace::Profile, ECID)];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading Profile");
}

#[test]
fn failed_app_configurations() {
    let connections = vec![
        property(),
        profile("fcm"),
        failed(Namespace::AppConfigurations, COMPANY_ID, Some(403)),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading App Configurations");
}

#[test]
fn unknown_without_profile() {
    let connections = vec![
        property(),
        apps(json!([{ "app_id": APP_ID, "messaging_service": "fcm" }])),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Unknown);
}

#[test]
fn failed_property_points_at_property_event() {
    let property_event = property_event();
    let connections = vec![failed(Namespace::LaunchProperty, PROPERTY_ID, Some(403))];

    let verdict = evaluate(&MessagingApps, &[ecid_event(), property_event.clone()], &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Launch Property");
    assert_eq!(verdict.events, vec![property_event.uuid]);
    assert!(verdict
        .details
        .as_deref()
        .is_some_and(|d| d.contains("load Launch Properties")));
}

#[test]
fn failed_profile_points_at_ecid_event() {
    let ecid_event = ecid_event();
    let connections = vec![property(), failed(Namespace::Profile, ECID, Some(500))];

    let verdict = evaluate(&MessagingApps, &[ecid_event.clone(), property_event()], &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Profile");
    assert_eq!(verdict.events, vec![ecid_event.uuid]);
}

#[test]
fn loading_app_configurations() {
    let connections = vec![
        property(),
        profile("fcm"),
        loading(Namespace::AppConfigurations, COMPANY_ID),
    ];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::Loading);
    assert_eq!(verdict.message, "Loading App Configurations");
}

#[test]
fn app_configurations_without_data_count_as_empty() {
    let connections = vec![property(), profile("fcm"), apps(Value::Null)];

    let verdict = evaluate(&MessagingApps, &events(), &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "No App Configurations");
}

fn two_clients() -> Vec<assurance_toolkit::Event> {
    vec![
        ecid_event_for("client-a", "ecid-a"),
        state_event_for("client-a", "property.id", PROPERTY_ID),
        ecid_event_for("client-b", "ecid-b"),
        state_event_for("client-b", "property.id", PROPERTY_ID),
    ]
}

#[test]
fn second_client_failure_blocks_despite_first_client_loaded() {
    let events = two_clients();
    let connections = vec![
        property(),
        loaded(
            Namespace::Profile,
            "ecid-a",
            json!({ "pushDetails": { "platform": "fcm", "appID": APP_ID } }),
        ),
        failed(Namespace::Profile, "ecid-b", Some(403)),
        apps(json!([{ "app_id": APP_ID, "messaging_service": "fcm" }])),
    ];

    let verdict = evaluate(&MessagingApps, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Profile");
    assert_eq!(verdict.events, vec![events[2].uuid.clone()]);
}

#[test]
fn first_blocking_connection_wins_over_client_order() {
    let events = two_clients();
    let connections = vec![
        property(),
        failed(Namespace::Profile, "ecid-b", None),
        loading(Namespace::Profile, "ecid-a"),
    ];

    let verdict = evaluate(&MessagingApps, &events, &connections);
    assert_eq!(verdict.result, Outcome::NotMatched);
    assert_eq!(verdict.message, "Error Loading Profile");
    assert_eq!(verdict.events, vec![events[2].uuid.clone()]);
}
