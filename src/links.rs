//! Deep links into the Experience Cloud UI.
//!
//! Path segments are percent-encoded, so ids taken from captured events can
//! never change the shape of the URL.

use url::Url;

use crate::verdict::Link;

/// Origin of every UI link.
pub const EXPERIENCE_ORIGIN: &str = "https://experience.adobe.com";

/// Documentation for enabling push messaging in the app.
pub const PUSH_SETUP_DOCS: &str =
    "https://aep-sdks.gitbook.io/docs/using-mobile-extensions/adobe-journey-optimizer#implement-extension-in-mobile-app";

/// Environment used when an edge configuration id names none.
const DEFAULT_ENVIRONMENT: &str = "prod";

fn experience_url(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse(EXPERIENCE_ORIGIN) else {
        return format!("{EXPERIENCE_ORIGIN}/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.into()
}

/// Links to the extension catalog and publishing flow of a launch property.
pub fn extension_links(company_id: &str, property_id: &str) -> Vec<Link> {
    let base = ["launch", "companies", company_id, "properties", property_id];
    let catalog: Vec<&str> = base.iter().copied().chain(["extensions", "catalog"]).collect();
    let publishing: Vec<&str> = base.iter().copied().chain(["publishing"]).collect();

    vec![
        Link::new("Extension Catalog", experience_url(&catalog)),
        Link::new("Publishing", experience_url(&publishing)),
    ]
}

/// Link to the app configuration list of a company.
pub fn app_configurations_link(company_id: &str) -> Link {
    Link::new(
        "Manage App Configurations",
        experience_url(&[
            "data-collection",
            "appConfigurations",
            "companies",
            company_id,
            "configurations",
        ]),
    )
}

/// Link to the edit page of a datastream.
///
/// `edge_config_id` has the form `datastream[:environment]`.
pub fn datastream_link(company_id: &str, edge_config_id: &str) -> Link {
    let mut parts = edge_config_id.splitn(2, ':');
    let datastream = parts.next().unwrap_or_default();
    let environment = parts
        .next()
        .filter(|env| !env.is_empty())
        .unwrap_or(DEFAULT_ENVIRONMENT);

    Link::new(
        "View Edge Configuration",
        experience_url(&[
            "data-collection",
            "dataStreams",
            "companies",
            company_id,
            "dataStreams",
            datastream,
            "environments",
            environment,
            "edit",
        ]),
    )
}

/// Link to the push messaging setup guide.
pub fn push_setup_link() -> Link {
    Link::new("Documentation: Setup Push", PUSH_SETUP_DOCS)
}
