mod maxmind_geo_provider;

pub use maxmind_geo_provider::MaxMindGeoProvider;
