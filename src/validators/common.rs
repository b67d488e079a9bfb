//! Stages and verdicts the connection-backed validators have in common.

use assurance_toolkit::value::string_at;
use assurance_toolkit::{Connection, Namespace};

use crate::checklist::{loaded_only, Stage};
use crate::clients::{ClientTable, Field};
use crate::links;
use crate::verdict::{Link, Verdict};

pub(crate) const LAUNCH_PROPERTY: Stage = Stage {
    namespace: Namespace::LaunchProperty,
    loading: "Loading Launch Property",
    failed: "Error Loading Launch Property",
    forbidden: "It appears your user doesn't have access to load Launch Properties. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Launch Property. Please validate that you are properly provisioned and try again.",
};

pub(crate) const EDGE_CONFIG: Stage = Stage {
    namespace: Namespace::EdgeConfig,
    loading: "Loading Edge Configuration",
    failed: "Error Loading Edge Configuration",
    forbidden: "It appears your user doesn't have access to load Edge Configurations. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Edge Configuration. Please validate that you are properly provisioned and try again.",
};

pub(crate) const PROFILE: Stage = Stage {
    namespace: Namespace::Profile,
    loading: "Loading Profile",
    failed: "Error Loading Profile",
    forbidden: "It appears your user doesn't have access to load the Profiles. Please validate your provisioning and try again",
    unknown: "An unknown error has occurred while attempting to load the Profile. Please validate that you are properly provisioned and try again.",
};

/// Company ids resolved through loaded launch property lookups, aligned with
/// the table's clients. Loading and failed lookups are ignored.
pub(crate) fn company_ids<'c>(
    table: &ClientTable<'_>,
    connections: &'c [Connection],
) -> Vec<Option<&'c str>> {
    let properties: Vec<Option<&str>> = table.iter().map(|c| c.get(Field::PropertyId)).collect();
    loaded_only(connections, Namespace::LaunchProperty, &properties)
        .into_iter()
        .map(|data| data.and_then(|d| string_at(d, &["companyId"])))
        .collect()
}

/// Extension catalog and publishing links, when both ids are known.
pub(crate) fn extension_links(company_id: Option<&str>, property_id: Option<&str>) -> Vec<Link> {
    match (company_id, property_id) {
        (Some(company), Some(property)) => links::extension_links(company, property),
        _ => Vec::new(),
    }
}

pub(crate) fn no_ecid(details: &str, links: Vec<Link>) -> Verdict {
    Verdict::not_matched("No ECID Detected")
        .with_details(details)
        .with_links(links)
}

pub(crate) fn push_token_not_captured() -> Verdict {
    Verdict::not_matched("Push Token Not Captured")
        .with_details(
            "The App wasn't setup correctly for messaging. Make sure you've followed the steps to enable push messaging in your application and that you are calling the setPushIdentifier API.",
        )
        .with_links([links::push_setup_link()])
}

pub(crate) fn edge_not_configured(links: Vec<Link>) -> Verdict {
    Verdict::not_matched("Edge Not Configured")
        .with_details(
            "Make sure you've installed the Adobe Experience Platform Edge Network and that you've published your changes.",
        )
        .with_links(links)
}

/// Mixins from `required` that the schema's `extends` list lacks.
pub(crate) fn missing_mixins<'r>(schema: &serde_json::Value, required: &[&'r str]) -> Vec<&'r str> {
    let extends: Vec<&str> = schema
        .get("extends")
        .and_then(serde_json::Value::as_array)
        .map(|items| items.iter().filter_map(serde_json::Value::as_str).collect())
        .unwrap_or_default();

    required
        .iter()
        .copied()
        .filter(|mixin| !extends.contains(mixin))
        .collect()
}
