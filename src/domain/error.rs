//! Domain Errors
//!
//! Validation failures are detected before the provider is touched;
//! provider failures are propagated untouched to the caller.

use std::net::IpAddr;
use thiserror::Error;

/// Short usage hint attached to an invalid result type.
pub const USAGE: &str = "Usage: iptoc <ip address> <result type>.\n\
Valid result types are: city, latlon, country, asn, all";

/// Failure of a single geolocation request.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input text is not an IPv4 or IPv6 address.
    #[error("Invalid IP address")]
    InvalidAddress(String),

    /// The requested result type is outside the accepted set.
    #[error("Invalid result type: {0}.\n{usage}", usage = USAGE)]
    InvalidResultType(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failure reported by a geolocation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The database could not be opened (missing, unreadable or corrupt).
    #[error("cannot open database {path}: {reason}")]
    Unavailable { path: String, reason: String },

    /// The database has no record for the address.
    #[error("address {ip} not found in database")]
    NotFound { ip: IpAddr },

    /// The record exists but could not be decoded.
    #[error("lookup failed: {reason}")]
    Lookup { reason: String },

    /// A field that has no absent representation was missing from the record.
    #[error("record for {ip} has no {field}")]
    MissingField { ip: IpAddr, field: &'static str },
}
