//! Push messaging app configuration validation.
//!
//! Walks launch property → profile → app configurations and checks that the
//! company has an app configuration for the platform and app id the device's
//! profile reports.

use assurance_toolkit::value::string_at;
use assurance_toolkit::{Connection, Event, Namespace};
use serde_json::Value;
use tracing::debug;

use crate::checklist::{Gate, Stage, StageKey};
use crate::clients::{ClientTable, Field};
use crate::links;
use crate::validator::{Settings, Validator};
use crate::validators::common;
use crate::verdict::Verdict;

/// Checks that the device's app is registered for push messaging.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagingApps;

const FIELDS: &[Field] = &[Field::Ecid, Field::PropertyId];

const APP_CONFIGURATIONS: Stage = Stage {
    namespace: Namespace::AppConfigurations,
    loading: "Loading App Configurations",
    failed: "Error Loading App Configurations",
    forbidden: "It appears your user doesn't have access to load the App Configurations. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the App Configuration. Please validate that you are properly provisioned and try again.",
};

/// Sandbox APNs registrations share app configurations with production.
fn normalize_platform(platform: &str) -> &str {
    if platform == "apnsSandbox" {
        "apns"
    } else {
        platform
    }
}

/// Push registration reported by a profile.
#[derive(Debug, Clone, Copy)]
struct PushRegistration<'a> {
    platform: Option<&'a str>,
    app_id: Option<&'a str>,
}

impl<'a> PushRegistration<'a> {
    fn from_profile(profile: &'a Value) -> Self {
        Self {
            platform: string_at(profile, &["pushDetails", "platform"]).map(normalize_platform),
            app_id: string_at(profile, &["pushDetails", "appID"]),
        }
    }

    fn is_registered_in(&self, app: &Value) -> bool {
        self.app_id.is_some()
            && string_at(app, &["app_id"]) == self.app_id
            && string_at(app, &["messaging_service"]) == self.platform
    }

    fn describe(&self) -> String {
        format!(
            "a platform of '{}' and an App ID of '{}'",
            self.platform.unwrap_or("unknown"),
            self.app_id.unwrap_or("unknown")
        )
    }
}

fn check(events: &[Event], connections: &[Connection]) -> Gate<Verdict> {
    let table = ClientTable::collect(events, FIELDS);

    // Company ids are required here: they address the app configurations.
    let property_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::PropertyId)
                .map(|id| StageKey::new(id, c.source_uuid(Field::PropertyId)))
        })
        .collect();
    let properties = common::LAUNCH_PROPERTY.resolve(connections, &property_keys)?;
    let companies: Vec<Option<&str>> = properties
        .iter()
        .map(|data| data.and_then(|d| string_at(d, &["companyId"])))
        .collect();

    for (client, company) in table.iter().zip(&companies) {
        if client.get(Field::Ecid).is_none() {
            return Err(common::no_ecid(
                "We did not detect an ECID. You may need to configure and publish the Identity extension.",
                common::extension_links(*company, client.get(Field::PropertyId)),
            ));
        }
    }

    let ecid_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::Ecid)
                .map(|ecid| StageKey::new(ecid, c.source_uuid(Field::Ecid)))
        })
        .collect();
    let profiles = common::PROFILE.resolve(connections, &ecid_keys)?;

    let company_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .zip(&companies)
        .map(|(c, company)| company.map(|id| StageKey::new(id, c.source_uuid(Field::PropertyId))))
        .collect();
    let app_lists = APP_CONFIGURATIONS.resolve(connections, &company_keys)?;

    let mut has_success = false;
    for (((client, company), profile), apps) in
        table.iter().zip(&companies).zip(&profiles).zip(&app_lists)
    {
        let (Some(company), Some(profile), Some(apps)) = (company, profile, apps) else {
            continue;
        };
        let registration = PushRegistration::from_profile(profile);
        let apps: &[Value] = apps.as_array().map(Vec::as_slice).unwrap_or_default();
        let source = client.source_uuid(Field::PropertyId);

        if apps.is_empty() {
            return Err(Verdict::not_matched("No App Configurations")
                .with_details(format!(
                    "You haven't created any App Configurations yet. Create a new config using {}.",
                    registration.describe()
                ))
                .with_links([links::app_configurations_link(company)])
                .with_events(source));
        }

        if !apps.iter().any(|app| registration.is_registered_in(app)) {
            return Err(Verdict::not_matched("No Matching App Detected")
                .with_details(format!(
                    "There isn't a matching App Configurations for this App. Make sure you have an App Configuration with {}.",
                    registration.describe()
                ))
                .with_links([links::app_configurations_link(company)])
                .with_events(source));
        }

        debug!(client = client.id, "app configuration found");
        has_success = true;
    }

    if has_success {
        Ok(Verdict::matched("App is configured"))
    } else {
        Ok(Verdict::unknown())
    }
}

impl Validator for MessagingApps {
    fn name(&self) -> &'static str {
        "aep-messaging-apps"
    }

    fn description(&self) -> &'static str {
        "The app's push platform and app id have a matching app configuration"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, connections: &[Connection]) -> Verdict {
        check(events, connections).unwrap_or_else(|blocked| blocked)
    }
}
