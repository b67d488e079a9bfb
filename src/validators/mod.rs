//! The shipped validators and their registry.
//!
//! Each validator is independent: none calls another and none shares state.

mod analytics_configuration;
mod analytics_post_processed;
mod common;
mod edge_config;
mod edge_configured;
mod edge_installed;
mod messaging_apps;
mod messaging_config;
mod messaging_profile;
mod optimize_response;

pub use analytics_configuration::AnalyticsConfiguration;
pub use analytics_post_processed::AnalyticsPostProcessed;
pub use edge_config::EdgeConfig;
pub use edge_configured::EdgeConfigured;
pub use edge_installed::EdgeInstalled;
pub use messaging_apps::MessagingApps;
pub use messaging_config::{MessagingConfig, REQUIRED_TRACKING_MIXINS};
pub use messaging_profile::{MessagingProfile, REQUIRED_PROFILE_MIXINS};
pub use optimize_response::OptimizeResponse;

use crate::validator::Validator;

/// Every shipped validator, in display order.
pub fn all() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(AnalyticsConfiguration),
        Box::new(AnalyticsPostProcessed),
        Box::new(OptimizeResponse),
        Box::new(EdgeInstalled),
        Box::new(EdgeConfigured),
        Box::new(EdgeConfig),
        Box::new(MessagingApps),
        Box::new(MessagingProfile),
        Box::new(MessagingConfig),
    ]
}

/// Names of every shipped validator.
pub fn names() -> Vec<&'static str> {
    all().iter().map(|v| v.name()).collect()
}

/// Look up a validator by name.
pub fn find(name: &str) -> Option<Box<dyn Validator>> {
    all().into_iter().find(|v| v.name() == name)
}
