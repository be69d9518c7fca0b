//! Domain Entities - Lookup result records
//!
//! Every record renders in the tuple notation the tool has always printed,
//! e.g. `('Hilo', 'Hawaii', '96720')`. Absent values render as `None`.

use std::fmt::{self, Display, Formatter};

/// City, region and postal code for an address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityRecord {
    pub city: Option<String>,
    /// Most specific subdivision (state, province, ...)
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

impl CityRecord {
    pub fn new(city: Option<String>, region: Option<String>, postal_code: Option<String>) -> Self {
        Self {
            city,
            region,
            postal_code,
        }
    }
}

/// Latitude and longitude, passed through as the provider reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateRecord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: Option<String>,
}

impl CountryRecord {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

/// Autonomous system that announces the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnRecord {
    pub number: u32,
    pub organization: Option<String>,
}

impl AsnRecord {
    pub fn new(number: u32, organization: Option<String>) -> Self {
        Self {
            number,
            organization,
        }
    }
}

/// All four records, always in ASN, city, country, coordinates order.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    pub asn: AsnRecord,
    pub city: CityRecord,
    pub country: CountryRecord,
    pub coordinates: CoordinateRecord,
}

/// Result of a dispatched lookup, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutput {
    City(CityRecord),
    Coordinates(CoordinateRecord),
    Country(CountryRecord),
    Asn(AsnRecord),
    All(CombinedRecord),
}

/// Writes an optional string as a quoted literal, or `None`.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Control characters are written as escapes.
struct Quoted<'a>(&'a Option<String>);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(s) = self.0 else {
            return f.write_str("None");
        };
        let quote = if s.contains('\'') && !s.contains('"') {
            '"'
        } else {
            '\''
        };
        write!(f, "{}", quote)?;
        for c in s.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c == quote => write!(f, "\\{}", c)?,
                c if c.is_control() => match c as u32 {
                    n @ 0..=0xff => write!(f, "\\x{:02x}", n)?,
                    n => write!(f, "\\u{:04x}", n)?,
                },
                c => write!(f, "{}", c)?,
            }
        }
        write!(f, "{}", quote)
    }
}

impl Display for CityRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Quoted(&self.city),
            Quoted(&self.region),
            Quoted(&self.postal_code)
        )
    }
}

impl Display for CoordinateRecord {
    // Debug formatting keeps the trailing `.0` on whole numbers.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.latitude, self.longitude)
    }
}

/// A country on its own prints as the bare name.
impl Display for CountryRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => f.write_str("None"),
        }
    }
}

impl Display for AsnRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.number, Quoted(&self.organization))
    }
}

/// Inside the combined tuple the country name is quoted like any other string.
impl Display for CombinedRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.asn,
            self.city,
            Quoted(&self.country.name),
            self.coordinates
        )
    }
}

impl Display for LookupOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(r) => r.fmt(f),
            Self::Coordinates(r) => r.fmt(f),
            Self::Country(r) => r.fmt(f),
            Self::Asn(r) => r.fmt(f),
            Self::All(r) => r.fmt(f),
        }
    }
}
