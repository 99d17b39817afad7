//! Vector tile messages for building test tiles with `prost`.
//!
//! Scalars are `optional` so tests control exactly which fields are written.

#![allow(dead_code)]

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct Tile {
    #[prost(message, repeated, tag = "3")]
    pub layers: Vec<Layer>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Layer {
    #[prost(uint32, optional, tag = "15")]
    pub version: Option<u32>,
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub features: Vec<Feature>,
    #[prost(string, repeated, tag = "3")]
    pub keys: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub values: Vec<Value>,
    #[prost(uint32, optional, tag = "5")]
    pub extent: Option<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Feature {
    #[prost(uint64, optional, tag = "1")]
    pub id: Option<u64>,
    #[prost(uint32, repeated, packed = "true", tag = "2")]
    pub tags: Vec<u32>,
    #[prost(uint64, optional, tag = "3")]
    pub r#type: Option<u64>,
    #[prost(uint32, repeated, packed = "true", tag = "4")]
    pub geometry: Vec<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Value {
    #[prost(string, optional, tag = "1")]
    pub string_value: Option<String>,
    #[prost(float, optional, tag = "2")]
    pub float_value: Option<f32>,
    #[prost(double, optional, tag = "3")]
    pub double_value: Option<f64>,
    #[prost(int64, optional, tag = "4")]
    pub int_value: Option<i64>,
    #[prost(bool, optional, tag = "7")]
    pub bool_value: Option<bool>,
}

/// Layer carrying fields from a hypothetical schema extension.
#[derive(Clone, PartialEq, Message)]
pub struct ExtendedLayer {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub features: Vec<Feature>,
    #[prost(fixed32, optional, tag = "20")]
    pub checksum: Option<u32>,
    #[prost(double, optional, tag = "21")]
    pub scale: Option<f64>,
    #[prost(bytes = "vec", optional, tag = "22")]
    pub metadata: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ExtendedTile {
    #[prost(uint64, optional, tag = "1")]
    pub generator: Option<u64>,
    #[prost(message, repeated, tag = "3")]
    pub layers: Vec<ExtendedLayer>,
}

pub const UNKNOWN: u64 = 0;
pub const POINT: u64 = 1;
pub const LINESTRING: u64 = 2;
pub const POLYGON: u64 = 3;

pub fn feature(geom_type: Option<u64>) -> Feature {
    let geometry = match geom_type {
        Some(POINT) => vec![9, 50, 34],
        Some(LINESTRING) => vec![9, 4, 4, 18, 0, 16, 16, 0],
        Some(POLYGON) => vec![9, 6, 12, 18, 10, 12, 24, 44, 15],
        _ => Vec::new(),
    };
    Feature {
        id: Some(1),
        tags: vec![0, 0],
        r#type: geom_type,
        geometry,
    }
}

pub fn layer(name: &str, version: Option<u32>, keys: &[&str], features: Vec<Feature>) -> Layer {
    Layer {
        version,
        name: Some(name.to_string()),
        features,
        keys: keys.iter().map(|k| k.to_string()).collect(),
        values: vec![Value {
            string_value: Some("value".to_string()),
            ..Default::default()
        }],
        extent: None,
    }
}

fn repeat(geom_type: u64, n: usize) -> Vec<Feature> {
    (0..n).map(|_| feature(Some(geom_type))).collect()
}

/// A seven layer street map tile whose first layer is `landuse`.
pub fn streets_tile() -> Tile {
    let mut poi = repeat(POINT, 4);
    poi.push(feature(None));

    let mut road = repeat(LINESTRING, 6);
    road.extend(repeat(POLYGON, 2));

    Tile {
        layers: vec![
            layer("landuse", Some(2), &["class", "osm_id"], repeat(POLYGON, 5)),
            layer("waterway", Some(2), &["class", "name"], repeat(LINESTRING, 3)),
            layer("water", Some(2), &["osm_id"], repeat(POLYGON, 2)),
            layer("building", Some(2), &["osm_id", "height"], repeat(POLYGON, 11)),
            layer("road", Some(2), &["class", "oneway", "class"], road),
            layer("poi_label", Some(2), &["name", "maki"], poi),
            layer("housenum_label", Some(2), &[], Vec::new()),
        ],
    }
}
