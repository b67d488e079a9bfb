//! Edge configuration (datastream) validation.
//!
//! Every client must report an `edge.configId`, and the datastream it names
//! must load.

use assurance_toolkit::{Connection, Event};

use crate::checklist::{Gate, StageKey};
use crate::clients::{ClientTable, Field};
use crate::validator::{Settings, Validator};
use crate::validators::common;
use crate::verdict::Verdict;

/// Checks that every client has a datastream that loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeConfig;

const FIELDS: &[Field] = &[Field::EdgeConfigId, Field::PropertyId];

fn check(events: &[Event], connections: &[Connection]) -> Gate<Verdict> {
    let table = ClientTable::collect(events, FIELDS);
    let companies = common::company_ids(&table, connections);

    for (client, company) in table.iter().zip(&companies) {
        if client.get(Field::EdgeConfigId).is_none() {
            let links = common::extension_links(*company, client.get(Field::PropertyId));
            return Err(common::edge_not_configured(links));
        }
    }

    let keys: Vec<Option<StageKey<'_>>> = table
        .iter()
        .map(|c| {
            c.get(Field::EdgeConfigId)
                .map(|id| StageKey::new(id, c.source_uuid(Field::EdgeConfigId)))
        })
        .collect();
    let datastreams = common::EDGE_CONFIG.resolve(connections, &keys)?;

    if datastreams.iter().any(Option::is_some) {
        Ok(Verdict::matched("Edge is configured correctly"))
    } else {
        Ok(Verdict::unknown())
    }
}

impl Validator for EdgeConfig {
    fn name(&self) -> &'static str {
        "edge-config"
    }

    fn description(&self) -> &'static str {
        "Each client's edge configuration id resolves to a datastream"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, connections: &[Connection]) -> Verdict {
        check(events, connections).unwrap_or_else(|blocked| blocked)
    }
}
