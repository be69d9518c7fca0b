pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{
    AsnRecord, CityRecord, CombinedRecord, CoordinateRecord, CountryRecord, LookupOutput,
};
pub use error::{LookupError, ProviderError, USAGE};
pub use value_objects::{ResultType, ValidatedIp};
