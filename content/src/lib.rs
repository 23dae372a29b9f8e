//! Static site content: the copy rendered by the `site` crate, bundled as a
//! JSON document and parsed into typed structs at startup.

pub mod error;
pub mod types;

pub use error::ContentError;
pub use types::{
    Closing, Cta, FaqItem, FaqSection, Feature, FeatureSection, Hero, SiteContent, SiteMeta,
};
