//! Shared fixtures for integration tests
//!
//! Builds small MaxMind DB files (IPv4 search tree, 24-bit records) in a
//! temporary directory so the real `maxminddb` reader can be exercised
//! without shipping binary databases.

#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const METADATA_START_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";
const DATA_SECTION_SEPARATOR: [u8; 16] = [0; 16];

/// A value in the MaxMind DB data section.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    Double(f64),
    U16(u16),
    U32(u32),
    U64(u64),
    Map(Vec<(String, Value)>),
    Array(Vec<Value>),
}

impl Value {
    pub fn str(s: &str) -> Self {
        Value::Str(s.to_string())
    }

    pub fn map(pairs: Vec<(&str, Value)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    /// `{"names": {"en": ...}}` style localized name map.
    pub fn names(pairs: &[(&str, &str)]) -> Self {
        Value::map(vec![(
            "names",
            Value::map(pairs.iter().map(|(k, v)| (*k, Value::str(v))).collect()),
        )])
    }

    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Value::Str(s) => {
                write_control(out, 2, s.len());
                out.extend_from_slice(s.as_bytes());
            }
            Value::Double(d) => {
                write_control(out, 3, 8);
                out.extend_from_slice(&d.to_be_bytes());
            }
            Value::U16(n) => write_uint(out, 5, &n.to_be_bytes()),
            Value::U32(n) => write_uint(out, 6, &n.to_be_bytes()),
            Value::U64(n) => write_uint(out, 9, &n.to_be_bytes()),
            Value::Map(pairs) => {
                write_control(out, 7, pairs.len());
                for (key, value) in pairs {
                    Value::Str(key.clone()).encode(out);
                    value.encode(out);
                }
            }
            Value::Array(items) => {
                write_control(out, 11, items.len());
                for item in items {
                    item.encode(out);
                }
            }
        }
    }
}

/// Control byte, optional extended-type byte, optional size bytes.
fn write_control(out: &mut Vec<u8>, type_num: u8, size: usize) {
    let (size_bits, size_bytes): (u8, Vec<u8>) = if size < 29 {
        (size as u8, vec![])
    } else if size < 285 {
        (29, vec![(size - 29) as u8])
    } else if size < 65_821 {
        (30, ((size - 285) as u16).to_be_bytes().to_vec())
    } else {
        (31, ((size - 65_821) as u32).to_be_bytes()[1..].to_vec())
    };

    if type_num <= 7 {
        out.push((type_num << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(type_num - 7);
    }
    out.extend_from_slice(&size_bytes);
}

/// Unsigned integers are stored big-endian without leading zero bytes.
fn write_uint(out: &mut Vec<u8>, type_num: u8, be_bytes: &[u8]) {
    let start = be_bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(be_bytes.len());
    write_control(out, type_num, be_bytes.len() - start);
    out.extend_from_slice(&be_bytes[start..]);
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// In-memory IPv4 database that serializes to the MaxMind DB format.
pub struct MmdbBuilder {
    database_type: String,
    nodes: Vec<[Slot; 2]>,
    data: Vec<u8>,
}

impl MmdbBuilder {
    pub fn new(database_type: &str) -> Self {
        Self {
            database_type: database_type.to_string(),
            nodes: vec![[Slot::Empty, Slot::Empty]],
            data: Vec::new(),
        }
    }

    /// Map `network/prefix_len` to `record`. Networks must not overlap.
    pub fn insert(mut self, network: Ipv4Addr, prefix_len: u8, record: Value) -> Self {
        assert!((1..=32).contains(&prefix_len));

        let offset = self.data.len();
        record.encode(&mut self.data);

        let bits = u32::from(network);
        let mut node = 0;
        for i in 0..prefix_len {
            let bit = ((bits >> (31 - i)) & 1) as usize;
            if i == prefix_len - 1 {
                self.nodes[node][bit] = Slot::Data(offset);
                break;
            }
            let slot = self.nodes[node][bit];
            node = match slot {
                Slot::Node(next) => next,
                Slot::Empty => {
                    self.nodes.push([Slot::Empty, Slot::Empty]);
                    let next = self.nodes.len() - 1;
                    self.nodes[node][bit] = Slot::Node(next);
                    next
                }
                Slot::Data(_) => panic!("overlapping network {}/{}", network, prefix_len),
            };
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let node_count = self.nodes.len();
        let mut out = Vec::new();

        for node in &self.nodes {
            for slot in node {
                let record = match *slot {
                    Slot::Empty => node_count,
                    Slot::Node(n) => n,
                    Slot::Data(offset) => node_count + DATA_SECTION_SEPARATOR.len() + offset,
                };
                out.extend_from_slice(&(record as u32).to_be_bytes()[1..]);
            }
        }

        out.extend_from_slice(&DATA_SECTION_SEPARATOR);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(METADATA_START_MARKER);

        Value::map(vec![
            ("binary_format_major_version", Value::U16(2)),
            ("binary_format_minor_version", Value::U16(0)),
            ("build_epoch", Value::U64(1_700_000_000)),
            ("database_type", Value::str(&self.database_type)),
            (
                "description",
                Value::map(vec![("en", Value::str("iptoc test database"))]),
            ),
            ("ip_version", Value::U16(4)),
            (
                "languages",
                Value::Array(vec![Value::str("en"), Value::str("ja")]),
            ),
            ("node_count", Value::U32(node_count as u32)),
            ("record_size", Value::U16(24)),
        ])
        .encode(&mut out);

        out
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).expect("failed to write test database");
    }
}

/// City, Country and ASN test databases on disk.
///
/// - 72.234.1.0/24: Hilo, Hawaii 96720, United States, AS36149 HAWAIIAN-TELCOM
/// - 81.2.69.160/27: London, England, no postal code, United Kingdom,
///   AS20712 without organization
/// - 2.125.160.216/29: Boxford, West Berkshire OX1, United Kingdom, no
///   location and no ASN entry
pub struct GeoFixtures {
    _dir: TempDir,
    pub city_db: PathBuf,
    pub country_db: PathBuf,
    pub asn_db: PathBuf,
}

impl GeoFixtures {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let city_db = dir.path().join("Test-City.mmdb");
        let country_db = dir.path().join("Test-Country.mmdb");
        let asn_db = dir.path().join("Test-ASN.mmdb");

        let united_states = || Value::names(&[("en", "United States"), ("ja", "アメリカ合衆国")]);
        let united_kingdom = || Value::names(&[("en", "United Kingdom"), ("ja", "イギリス")]);

        MmdbBuilder::new("GeoIP2-City")
            .insert(
                Ipv4Addr::new(72, 234, 1, 0),
                24,
                Value::map(vec![
                    ("city", Value::names(&[("en", "Hilo"), ("ja", "ヒロ")])),
                    ("country", united_states()),
                    (
                        "location",
                        Value::map(vec![
                            ("latitude", Value::Double(19.706)),
                            ("longitude", Value::Double(-155.0928)),
                        ]),
                    ),
                    ("postal", Value::map(vec![("code", Value::str("96720"))])),
                    (
                        "subdivisions",
                        Value::Array(vec![Value::names(&[("en", "Hawaii")])]),
                    ),
                ]),
            )
            .insert(
                Ipv4Addr::new(81, 2, 69, 160),
                27,
                Value::map(vec![
                    ("city", Value::names(&[("en", "London")])),
                    ("country", united_kingdom()),
                    (
                        "location",
                        Value::map(vec![
                            ("latitude", Value::Double(51.5142)),
                            ("longitude", Value::Double(-0.0931)),
                        ]),
                    ),
                    (
                        "subdivisions",
                        Value::Array(vec![Value::names(&[("en", "England")])]),
                    ),
                ]),
            )
            .insert(
                Ipv4Addr::new(2, 125, 160, 216),
                29,
                Value::map(vec![
                    ("city", Value::names(&[("en", "Boxford")])),
                    ("country", united_kingdom()),
                    ("postal", Value::map(vec![("code", Value::str("OX1"))])),
                    (
                        "subdivisions",
                        Value::Array(vec![
                            Value::names(&[("en", "England")]),
                            Value::names(&[("en", "West Berkshire")]),
                        ]),
                    ),
                ]),
            )
            .write_to(&city_db);

        MmdbBuilder::new("GeoIP2-Country")
            .insert(
                Ipv4Addr::new(72, 234, 1, 0),
                24,
                Value::map(vec![("country", united_states())]),
            )
            .insert(
                Ipv4Addr::new(81, 2, 69, 160),
                27,
                Value::map(vec![("country", united_kingdom())]),
            )
            .insert(
                Ipv4Addr::new(2, 125, 160, 216),
                29,
                Value::map(vec![("country", united_kingdom())]),
            )
            .write_to(&country_db);

        MmdbBuilder::new("GeoLite2-ASN")
            .insert(
                Ipv4Addr::new(72, 234, 1, 0),
                24,
                Value::map(vec![
                    ("autonomous_system_number", Value::U32(36149)),
                    (
                        "autonomous_system_organization",
                        Value::str("HAWAIIAN-TELCOM"),
                    ),
                ]),
            )
            .insert(
                Ipv4Addr::new(81, 2, 69, 160),
                27,
                Value::map(vec![("autonomous_system_number", Value::U32(20712))]),
            )
            .write_to(&asn_db);

        Self {
            _dir: dir,
            city_db,
            country_db,
            asn_db,
        }
    }
}
