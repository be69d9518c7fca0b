//! iptoc Library
//!
//! Looks up city, coordinates, country and autonomous system for an IP
//! address. Exposed as a library for integration tests and embedding.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::{Cli, Outcome};
pub use adapters::outbound::MaxMindGeoProvider;
pub use application::GeoLookupService;
pub use config::{load_config, Config};
pub use domain::entities::{
    AsnRecord, CityRecord, CombinedRecord, CoordinateRecord, CountryRecord, LookupOutput,
};
pub use domain::error::{LookupError, ProviderError};
pub use domain::ports::GeoProvider;
pub use domain::value_objects::{ResultType, ValidatedIp};
