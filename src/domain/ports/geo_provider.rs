//! Geolocation Provider Port
//!
//! Defines the interface for resolving IP addresses to location and
//! network-operator records.

use crate::domain::entities::{AsnRecord, CityRecord, CoordinateRecord, CountryRecord};
use crate::domain::error::ProviderError;
use std::net::IpAddr;

/// Source of geolocation records for IP addresses.
///
/// This is an outbound port that abstracts the geolocation databases.
/// Implementations own their data source; callers make no assumption about
/// whether it stays open between calls.
pub trait GeoProvider: Send + Sync {
    /// City, most specific region and postal code.
    fn city(&self, ip: IpAddr) -> Result<CityRecord, ProviderError>;

    /// Latitude and longitude, from the city dataset.
    fn coordinates(&self, ip: IpAddr) -> Result<CoordinateRecord, ProviderError>;

    /// Country name, from the country dataset.
    fn country(&self, ip: IpAddr) -> Result<CountryRecord, ProviderError>;

    /// Autonomous system number and organization.
    fn asn(&self, ip: IpAddr) -> Result<AsnRecord, ProviderError>;
}
