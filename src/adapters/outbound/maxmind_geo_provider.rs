//! MaxMind Geolocation Provider
//!
//! Implements GeoProvider using MaxMind GeoIP2 / GeoLite2 databases
//! (City, Country and ASN editions).

use crate::domain::entities::{AsnRecord, CityRecord, CoordinateRecord, CountryRecord};
use crate::domain::error::ProviderError;
use crate::domain::ports::GeoProvider;
use maxminddb::{MaxMindDBError, Reader};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// MaxMind geolocation provider.
///
/// Holds only the database paths. Each query opens the database it needs,
/// performs one lookup and drops the reader before returning, so no file
/// handle outlives a call.
#[derive(Debug, Clone)]
pub struct MaxMindGeoProvider {
    city_db: PathBuf,
    country_db: PathBuf,
    asn_db: PathBuf,
    locale: String,
}

#[derive(Debug, Default, Deserialize)]
struct Named {
    names: Option<BTreeMap<String, String>>,
}

impl Named {
    fn name(&self, locale: &str) -> Option<String> {
        self.names.as_ref()?.get(locale).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct Postal {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CityResp {
    city: Option<Named>,
    subdivisions: Option<Vec<Named>>,
    postal: Option<Postal>,
    location: Option<Location>,
}

impl CityResp {
    fn into_city(self, locale: &str) -> CityRecord {
        // Subdivisions are ordered from least to most specific.
        let region = self
            .subdivisions
            .as_ref()
            .and_then(|s| s.last())
            .and_then(|s| s.name(locale));

        CityRecord::new(
            self.city.and_then(|c| c.name(locale)),
            region,
            self.postal.and_then(|p| p.code),
        )
    }

    fn into_coordinates(self, ip: IpAddr) -> Result<CoordinateRecord, ProviderError> {
        let location = self.location.ok_or(ProviderError::MissingField {
            ip,
            field: "location",
        })?;
        let latitude = location.latitude.ok_or(ProviderError::MissingField {
            ip,
            field: "latitude",
        })?;
        let longitude = location.longitude.ok_or(ProviderError::MissingField {
            ip,
            field: "longitude",
        })?;
        Ok(CoordinateRecord::new(latitude, longitude))
    }
}

#[derive(Debug, Deserialize)]
struct CountryResp {
    country: Option<Named>,
}

#[derive(Debug, Deserialize)]
struct AsnResp {
    autonomous_system_number: Option<u32>,
    autonomous_system_organization: Option<String>,
}

impl AsnResp {
    fn into_record(self, ip: IpAddr) -> Result<AsnRecord, ProviderError> {
        let number = self
            .autonomous_system_number
            .ok_or(ProviderError::MissingField {
                ip,
                field: "autonomous system number",
            })?;
        Ok(AsnRecord::new(number, self.autonomous_system_organization))
    }
}

impl MaxMindGeoProvider {
    /// Create a provider over the three database files.
    ///
    /// Nothing is opened here; a bad path surfaces on the first query that
    /// needs it.
    pub fn new(
        city_db: impl Into<PathBuf>,
        country_db: impl Into<PathBuf>,
        asn_db: impl Into<PathBuf>,
    ) -> Self {
        Self {
            city_db: city_db.into(),
            country_db: country_db.into(),
            asn_db: asn_db.into(),
            locale: "en".to_string(),
        }
    }

    /// Select which localized name to report (MaxMind `names` key).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn open(path: &Path) -> Result<Reader<Vec<u8>>, ProviderError> {
        tracing::debug!("opening database {}", path.display());
        Reader::open_readfile(path).map_err(|e| ProviderError::Unavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn query<T: DeserializeOwned>(&self, path: &Path, ip: IpAddr) -> Result<T, ProviderError> {
        let reader = Self::open(path)?;
        let record = reader.lookup::<T>(ip).map_err(|e| match e {
            MaxMindDBError::AddressNotFoundError(_) => ProviderError::NotFound { ip },
            other => ProviderError::Lookup {
                reason: other.to_string(),
            },
        })?;
        tracing::debug!("lookup {} in {} succeeded", ip, path.display());
        Ok(record)
    }
}

impl GeoProvider for MaxMindGeoProvider {
    fn city(&self, ip: IpAddr) -> Result<CityRecord, ProviderError> {
        let resp: CityResp = self.query(&self.city_db, ip)?;
        Ok(resp.into_city(&self.locale))
    }

    fn coordinates(&self, ip: IpAddr) -> Result<CoordinateRecord, ProviderError> {
        let resp: CityResp = self.query(&self.city_db, ip)?;
        resp.into_coordinates(ip)
    }

    fn country(&self, ip: IpAddr) -> Result<CountryRecord, ProviderError> {
        let resp: CountryResp = self.query(&self.country_db, ip)?;
        Ok(CountryRecord::new(
            resp.country.and_then(|c| c.name(&self.locale)),
        ))
    }

    fn asn(&self, ip: IpAddr) -> Result<AsnRecord, ProviderError> {
        let resp: AsnResp = self.query(&self.asn_db, ip)?;
        resp.into_record(ip)
    }
}
