//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are validated on construction and never mutated afterwards.

use crate::domain::error::LookupError;
use std::net::IpAddr;
use std::str::FromStr;

/// An IP address that passed syntax validation.
///
/// Only constructed through [`ValidatedIp::parse`] (or `FromStr`), so holding
/// one proves the original text was a well-formed IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatedIp(IpAddr);

impl ValidatedIp {
    /// Validate a textual IP address.
    ///
    /// # Examples
    /// ```
    /// use iptoc::domain::value_objects::ValidatedIp;
    ///
    /// assert!(ValidatedIp::parse("72.234.1.1").is_ok());
    /// assert!(ValidatedIp::parse("2001:db8::1").is_ok());
    /// assert!(ValidatedIp::parse("not-an-ip").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, LookupError> {
        s.parse::<IpAddr>()
            .map(Self)
            .map_err(|_| LookupError::InvalidAddress(s.to_string()))
    }

    pub fn addr(&self) -> IpAddr {
        self.0
    }
}

impl FromStr for ValidatedIp {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ValidatedIp> for IpAddr {
    fn from(ip: ValidatedIp) -> Self {
        ip.0
    }
}

impl std::fmt::Display for ValidatedIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which record a lookup should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// City, region and postal code
    City,
    /// Latitude and longitude
    LatLon,
    /// Country name
    Country,
    /// AS number and organization
    Asn,
    /// All of the above, in ASN, city, country, coordinates order
    All,
}

impl ResultType {
    /// Every accepted result type, in the order shown in usage text.
    pub const ALL: [ResultType; 5] = [
        ResultType::City,
        ResultType::LatLon,
        ResultType::Country,
        ResultType::Asn,
        ResultType::All,
    ];

    /// Parse a result type. Matching is exact: `City` is rejected.
    pub fn parse(s: &str) -> Result<Self, LookupError> {
        match s {
            "city" => Ok(Self::City),
            "latlon" => Ok(Self::LatLon),
            "country" => Ok(Self::Country),
            "asn" => Ok(Self::Asn),
            "all" => Ok(Self::All),
            other => Err(LookupError::InvalidResultType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::LatLon => "latlon",
            Self::Country => "country",
            Self::Asn => "asn",
            Self::All => "all",
        }
    }
}

impl FromStr for ResultType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
