use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Database locations
    pub city_db_path: String,
    pub country_db_path: String,
    pub asn_db_path: String,

    // Output
    pub locale: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            city_db_path: "GeoLite2-City.mmdb".to_string(),
            country_db_path: "GeoLite2-Country.mmdb".to_string(),
            asn_db_path: "GeoLite2-ASN.mmdb".to_string(),
            locale: "en".to_string(),
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let defaults = Config::default();

    let city_db_path = std::env::var("IPTOC_CITY_DB").unwrap_or(defaults.city_db_path);

    let country_db_path = std::env::var("IPTOC_COUNTRY_DB").unwrap_or(defaults.country_db_path);

    let asn_db_path = std::env::var("IPTOC_ASN_DB").unwrap_or(defaults.asn_db_path);

    let locale = std::env::var("IPTOC_LOCALE")
        .ok()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(defaults.locale);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        city_db_path,
        country_db_path,
        asn_db_path,
        locale,
        debug,
    })
}
