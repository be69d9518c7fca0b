//! Command-line adapter
//!
//! Parses `<ip address> <result type>`, drives the lookup service and maps
//! the result onto stdout/stderr text and a process exit status.

use crate::application::GeoLookupService;
use crate::domain::error::LookupError;
use std::io::{self, Write};
use std::process::ExitCode;

/// Full help text, printed when the argument count is wrong.
pub const HELP: &str = "\
Returns the geolocation of an IP address.

Usage: iptoc <ip address> <result type>.
Valid result types are: city, latlon, country, asn, all

Examples:
    $ iptoc 72.234.1.1 city
    ('Hilo', 'Hawaii', '96720')

    $ iptoc 72.234.1.1 latlon
    (19.706, -155.0928)

    $ iptoc 72.234.1.1 country
    United States

    $ iptoc 72.234.1.1 asn
    (36149, 'HAWAIIAN-TELCOM')

    $ iptoc 72.234.1.1 all
    ((36149, 'HAWAIIAN-TELCOM'), ('Hilo', 'Hawaii', '96720'), 'United States', (19.706, -155.0928))

Environment:
    IPTOC_CITY_DB      path to the GeoIP2/GeoLite2 City database
    IPTOC_COUNTRY_DB   path to the GeoIP2/GeoLite2 Country database
    IPTOC_ASN_DB       path to the GeoLite2 ASN database
    IPTOC_LOCALE       language of returned names (default: en)
    DEBUG              enable debug logging on stderr";

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Wrong number of arguments
    Usage,
    InvalidAddress,
    InvalidResultType,
    ProviderFailure,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ProviderFailure => 1,
            Self::Usage => 2,
            Self::InvalidAddress => 3,
            Self::InvalidResultType => 4,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Command-line front end over the lookup service.
pub struct Cli {
    service: GeoLookupService,
}

impl Cli {
    pub fn new(service: GeoLookupService) -> Self {
        Self { service }
    }

    /// Run one invocation. `args` excludes the program name.
    ///
    /// Results and validation messages go to `out`; provider failures go
    /// to `err`.
    pub fn run<O: Write, E: Write>(
        &self,
        args: &[String],
        out: &mut O,
        err: &mut E,
    ) -> io::Result<Outcome> {
        let [ip, result_type] = args else {
            writeln!(out, "{}", HELP)?;
            return Ok(Outcome::Usage);
        };

        let outcome = match self.service.dispatch(ip, result_type) {
            Ok(output) => {
                writeln!(out, "{}", output)?;
                Outcome::Success
            }
            Err(e @ LookupError::InvalidAddress(_)) => {
                writeln!(out, "{}", e)?;
                Outcome::InvalidAddress
            }
            Err(e @ LookupError::InvalidResultType(_)) => {
                writeln!(out, "{}", e)?;
                Outcome::InvalidResultType
            }
            Err(LookupError::Provider(e)) => {
                tracing::error!("lookup of {} ({}) failed: {}", ip, result_type, e);
                writeln!(err, "error: {}", e)?;
                Outcome::ProviderFailure
            }
        };

        Ok(outcome)
    }
}
