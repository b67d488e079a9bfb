//! Push messaging profile validation.
//!
//! Checks that the device reports everything messaging needs, that the
//! datastream's profile dataset uses a schema with the push mixins, and that
//! the profile stored for the device holds the device's push token.

use assurance_toolkit::value::string_at;
use assurance_toolkit::{Connection, Event, Namespace};

use crate::checklist::{Gate, Stage, StageKey};
use crate::clients::{ClientTable, Field};
use crate::links;
use crate::validator::{Settings, Validator};
use crate::validators::common;
use crate::verdict::Verdict;

/// Checks that push data reaches the device's profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagingProfile;

const FIELDS: &[Field] = &[
    Field::Ecid,
    Field::EdgeConfigId,
    Field::PropertyId,
    Field::PushToken,
];

/// Mixins the profile dataset's schema must extend.
pub const REQUIRED_PROFILE_MIXINS: &[&str] = &[
    "https://ns.adobe.com/xdm/context/identitymap",
    "https://ns.adobe.com/xdm/context/profile-push-notification-details",
];

const PROFILE_SCHEMA: Stage = Stage {
    namespace: Namespace::Schema,
    loading: "Loading Profile Schema",
    failed: "Error Loading Profile Schema",
    forbidden: "It appears your user doesn't have access to load Schemas. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Profile Schema. It's possible this Dataset does not exist.",
};

fn check(events: &[Event], connections: &[Connection]) -> Gate<Verdict> {
    let table = ClientTable::collect(events, FIELDS);
    let companies = common::company_ids(&table, connections);

    for (client, company) in table.iter().zip(&companies) {
        let extension_links = || common::extension_links(*company, client.get(Field::PropertyId));

        if client.get(Field::Ecid).is_none() {
            return Err(common::no_ecid(
                "We did not detect an ECID. You may need to configure and publish the Identity extension. Otherwise you may try restarting your mobile app.",
                extension_links(),
            ));
        }
        if client.get(Field::PushToken).is_none() {
            return Err(common::push_token_not_captured());
        }
        if client.get(Field::EdgeConfigId).is_none() {
            return Err(common::edge_not_configured(extension_links()));
        }
    }

    let edge_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::EdgeConfigId)
                .map(|id| StageKey::new(id, c.source_uuid(Field::EdgeConfigId)))
        })
        .collect();
    let datastreams = common::EDGE_CONFIG.resolve(connections, &edge_keys)?;

    let schema_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .zip(&datastreams)
        .map(|(c, datastream)| {
            datastream
                .and_then(|d| string_at(d, &["profileSchema"]))
                .map(|url| StageKey::new(url, c.source_uuid(Field::EdgeConfigId)))
        })
        .collect();
    let schemas = PROFILE_SCHEMA.resolve(connections, &schema_keys)?;

    let mut has_schema = false;
    for ((client, company), schema) in table.iter().zip(&companies).zip(&schemas) {
        let Some(schema) = schema else {
            continue;
        };
        let missing = common::missing_mixins(schema, REQUIRED_PROFILE_MIXINS);
        if !missing.is_empty() {
            tracing::debug!(client = client.id, ?missing, "profile schema lacks mixins");
            let links = match (company, client.get(Field::EdgeConfigId)) {
                (Some(company), Some(edge_config_id)) => {
                    vec![links::datastream_link(company, edge_config_id)]
                }
                _ => Vec::new(),
            };
            return Err(Verdict::not_matched("Invalid Profile Dataset")
                .with_details(
                    "For messaging, the \"pushNotificationDetails\" and \"identityMap\" mixins are required for the profile dataset. Please make sure the profile you've configured has these mixins.",
                )
                .with_events(client.source_uuid(Field::EdgeConfigId))
                .with_links(links));
        }
        has_schema = true;
    }

    let ecid_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::Ecid)
                .map(|ecid| StageKey::new(ecid, c.source_uuid(Field::Ecid)))
        })
        .collect();
    let profiles = common::PROFILE.resolve(connections, &ecid_keys)?;

    let mut has_profile = false;
    for (client, profile) in table.iter().zip(&profiles) {
        let Some(profile) = profile else {
            continue;
        };
        if string_at(profile, &["pushDetails", "token"]) != client.get(Field::PushToken) {
            return Err(Verdict::not_matched("Push Token Mismatch")
                .with_details(
                    "The push token stored in this profile does not match the push token on the device.",
                )
                .with_events(client.source_uuid(Field::PushToken)));
        }
        has_profile = true;
    }

    if has_profile && has_schema {
        Ok(Verdict::matched("Data successfully written to Profile"))
    } else {
        Ok(Verdict::unknown())
    }
}

impl Validator for MessagingProfile {
    fn name(&self) -> &'static str {
        "aep-messaging-profile"
    }

    fn description(&self) -> &'static str {
        "The profile dataset supports push and the stored push token matches the device"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, connections: &[Connection]) -> Verdict {
        check(events, connections).unwrap_or_else(|blocked| blocked)
    }
}
