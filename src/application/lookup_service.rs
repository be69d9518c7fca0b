//! Geolocation Lookup Service - Main application use case
//!
//! Validates the address, picks the requested query and forwards it to the
//! provider. Provider failures are propagated as-is.

use crate::domain::entities::{
    AsnRecord, CityRecord, CombinedRecord, CoordinateRecord, CountryRecord, LookupOutput,
};
use crate::domain::error::LookupError;
use crate::domain::ports::GeoProvider;
use crate::domain::value_objects::{ResultType, ValidatedIp};
use std::sync::Arc;

/// Geolocation lookup service.
///
/// Stateless: every call is a single request against the provider.
pub struct GeoLookupService {
    provider: Arc<dyn GeoProvider>,
}

impl GeoLookupService {
    pub fn new(provider: Arc<dyn GeoProvider>) -> Self {
        Self { provider }
    }

    /// Check that `ip` is an IPv4 or IPv6 address.
    pub fn validate(&self, ip: &str) -> Result<ValidatedIp, LookupError> {
        ValidatedIp::parse(ip)
    }

    pub fn lookup_city(&self, ip: ValidatedIp) -> Result<CityRecord, LookupError> {
        Ok(self.provider.city(ip.addr())?)
    }

    pub fn lookup_coordinates(&self, ip: ValidatedIp) -> Result<CoordinateRecord, LookupError> {
        Ok(self.provider.coordinates(ip.addr())?)
    }

    pub fn lookup_country(&self, ip: ValidatedIp) -> Result<CountryRecord, LookupError> {
        Ok(self.provider.country(ip.addr())?)
    }

    pub fn lookup_asn(&self, ip: ValidatedIp) -> Result<AsnRecord, LookupError> {
        Ok(self.provider.asn(ip.addr())?)
    }

    /// Run all four queries in ASN, city, country, coordinates order.
    ///
    /// The first failing query aborts the whole lookup; no partial record is
    /// returned.
    pub fn lookup_all(&self, ip: ValidatedIp) -> Result<CombinedRecord, LookupError> {
        let asn = self.lookup_asn(ip)?;
        let city = self.lookup_city(ip)?;
        let country = self.lookup_country(ip)?;
        let coordinates = self.lookup_coordinates(ip)?;

        Ok(CombinedRecord {
            asn,
            city,
            country,
            coordinates,
        })
    }

    /// Validate `ip`, then run the lookup named by `result_type`.
    ///
    /// The provider is not consulted unless both inputs are valid; the
    /// address is checked first.
    pub fn dispatch(&self, ip: &str, result_type: &str) -> Result<LookupOutput, LookupError> {
        let ip = self.validate(ip)?;
        let result_type = ResultType::parse(result_type)?;

        tracing::debug!("looking up {} ({})", ip, result_type);

        let output = match result_type {
            ResultType::City => LookupOutput::City(self.lookup_city(ip)?),
            ResultType::LatLon => LookupOutput::Coordinates(self.lookup_coordinates(ip)?),
            ResultType::Country => LookupOutput::Country(self.lookup_country(ip)?),
            ResultType::Asn => LookupOutput::Asn(self.lookup_asn(ip)?),
            ResultType::All => LookupOutput::All(self.lookup_all(ip)?),
        };

        Ok(output)
    }
}
