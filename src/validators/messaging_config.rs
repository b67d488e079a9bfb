//! Push messaging tracking configuration validation.
//!
//! Checks that the device reports an ECID, a push token, and a message
//! tracking dataset, and that the dataset's schema carries the experience
//! event mixins push tracking writes into.

use assurance_toolkit::value::string_at;
use assurance_toolkit::{Connection, Event, Namespace};

use crate::checklist::{Gate, Stage, StageKey};
use crate::clients::{ClientTable, Field};
use crate::validator::{Settings, Validator};
use crate::validators::common;
use crate::verdict::Verdict;

/// Checks that push interactions can be tracked.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagingConfig;

const FIELDS: &[Field] = &[
    Field::Ecid,
    Field::PropertyId,
    Field::PushToken,
    Field::TrackingDataset,
];

/// Mixins the tracking dataset's schema must extend.
pub const REQUIRED_TRACKING_MIXINS: &[&str] = &[
    "https://ns.adobe.com/xdm/context/experienceevent-environment-details",
    "https://ns.adobe.com/xdm/context/experienceevent-pushtracking",
    "https://ns.adobe.com/xdm/context/experienceevent-application",
    "https://ns.adobe.com/experience/customerJourneyManagement/messageprofile",
    "https://ns.adobe.com/experience/customerJourneyManagement/messageexecution",
];

const TRACKING_DATASET: Stage = Stage {
    namespace: Namespace::Dataset,
    loading: "Loading Tracking Dataset",
    failed: "Error Loading Tracking Dataset",
    forbidden: "It appears your user doesn't have access to load Datasets. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Tracking Dataset. It's possible this Dataset does not exist.",
};

const TRACKING_SCHEMA: Stage = Stage {
    namespace: Namespace::Schema,
    loading: "Loading Tracking Schema",
    failed: "Error Loading Tracking Schema",
    forbidden: "It appears your user doesn't have access to load Schemas. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Tracking Schema. It's possible this Dataset does not exist.",
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
        if client.get(Field::TrackingDataset).is_none() {
            return Err(Verdict::not_matched("Message Tracking Not Configured")
                .with_details(
                    "Make sure you've configured an event dataset in the Adobe Journey Optimizer extension and that you've published your changes.",
                )
                .with_links(extension_links()));
        }
    }

    let dataset_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::TrackingDataset)
                .map(|id| StageKey::new(id, c.source_uuid(Field::TrackingDataset)))
        })
        .collect();
    let datasets = TRACKING_DATASET.resolve(connections, &dataset_keys)?;

    let schema_keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .zip(&datasets)
        .map(|(c, dataset)| {
            dataset
                .and_then(|d| string_at(d, &["schema"]))
                .map(|url| StageKey::new(url, c.source_uuid(Field::TrackingDataset)))
        })
        .collect();
    let schemas = TRACKING_SCHEMA.resolve(connections, &schema_keys)?;

    let mut has_schema = false;
    for (client, schema) in table.iter().zip(&schemas) {
        let Some(schema) = schema else {
            continue;
        };
        let missing = common::missing_mixins(schema, REQUIRED_TRACKING_MIXINS);
        if !missing.is_empty() {
            tracing::debug!(client = client.id, ?missing, "tracking schema lacks mixins");
            return Err(Verdict::not_matched("Invalid Tracking Dataset")
                .with_details(format!(
                    "For message tracking, the dataset's schema must include these mixins: {}.",
                    missing.join(", ")
                ))
                .with_events(client.source_uuid(Field::TrackingDataset)));
        }
        has_schema = true;
    }

    if has_schema {
        Ok(Verdict::matched("Message tracking is configured"))
    } else {
        Ok(Verdict::unknown())
    }
}

impl Validator for MessagingConfig {
    fn name(&self) -> &'static str {
        "aep-messaging-config"
    }

    fn description(&self) -> &'static str {
        "Push tracking is enabled and its dataset schema has the tracking mixins"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, connections: &[Connection]) -> Verdict {
        check(events, connections).unwrap_or_else(|blocked| blocked)
    }
}
