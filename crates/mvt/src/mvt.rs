//! Walks the Mapbox Vector Tile message layout.
//!
//! See <https://github.com/mapbox/vector-tile-spec/tree/master/2.1>. Only the
//! fields needed for a summary are interpreted; geometry, tags and values are
//! stepped over by length.

use crate::error::DecodeError;
use crate::pb::{PbReader, WireType};

pub mod tile {
    pub const NAME: &str = "tile";
    pub const LAYERS: u64 = 3;
}

pub mod layer {
    pub const NAME: &str = "layer";
    pub const LAYER_NAME: u64 = 1;
    pub const FEATURES: u64 = 2;
    pub const KEYS: u64 = 3;
    pub const VALUES: u64 = 4;
    pub const EXTENT: u64 = 5;
    pub const VERSION: u64 = 15;

    pub const DEFAULT_EXTENT: u32 = 4096;
    pub const DEFAULT_VERSION: u32 = 1;
}

pub mod feature {
    pub const NAME: &str = "feature";
    pub const ID: u64 = 1;
    pub const TAGS: u64 = 2;
    pub const TYPE: u64 = 3;
    pub const GEOMETRY: u64 = 4;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeomType {
    #[default]
    Unknown = 0,
    Point = 1,
    Linestring = 2,
    Polygon = 3,
}

impl GeomType {
    /// Values outside the schema's enum are treated as `Unknown`.
    pub fn from_raw(raw: u64) -> GeomType {
        match raw {
            1 => GeomType::Point,
            2 => GeomType::Linestring,
            3 => GeomType::Polygon,
            _ => GeomType::Unknown,
        }
    }
}

/// Fields of one layer message. Byte strings and features borrow from the
/// input buffer.
#[derive(Clone, Debug)]
pub struct LayerFields<'a> {
    pub name: &'a [u8],
    pub version: u32,
    pub extent: u32,
    pub keys: Vec<&'a [u8]>,
    pub features: Vec<PbReader<'a>>,
}

/// Meaning of a field number within one message kind.
struct FieldSpec {
    message: &'static str,
    name: &'static str,
    wire_type: WireType,
}

impl FieldSpec {
    const fn new(message: &'static str, name: &'static str, wire_type: WireType) -> Self {
        Self {
            message,
            name,
            wire_type,
        }
    }

    /// Fail unless `found` is the wire type this field is declared with.
    fn expect(&self, found: WireType, offset: usize) -> Result<(), DecodeError> {
        if found == self.wire_type {
            Ok(())
        } else {
            Err(DecodeError::SchemaViolation {
                message: self.message,
                field: self.name,
                expected: self.wire_type.name(),
                found: found.name(),
                offset,
            })
        }
    }
}

fn tile_field(number: u64) -> Option<FieldSpec> {
    let spec = match number {
        tile::LAYERS => FieldSpec::new(tile::NAME, "layers", WireType::LengthDelimited),
        _ => return None,
    };
    Some(spec)
}

fn layer_field(number: u64) -> Option<FieldSpec> {
    use WireType::{LengthDelimited, Varint};
    let (name, wire_type) = match number {
        layer::LAYER_NAME => ("name", LengthDelimited),
        layer::FEATURES => ("features", LengthDelimited),
        layer::KEYS => ("keys", LengthDelimited),
        layer::VALUES => ("values", LengthDelimited),
        layer::EXTENT => ("extent", Varint),
        layer::VERSION => ("version", Varint),
        _ => return None,
    };
    Some(FieldSpec::new(layer::NAME, name, wire_type))
}

fn feature_field(number: u64) -> Option<FieldSpec> {
    use WireType::{LengthDelimited, Varint};
    let (name, wire_type) = match number {
        feature::ID => ("id", Varint),
        feature::TAGS => ("tags", LengthDelimited),
        feature::TYPE => ("type", Varint),
        feature::GEOMETRY => ("geometry", LengthDelimited),
        _ => return None,
    };
    Some(FieldSpec::new(feature::NAME, name, wire_type))
}

/// Return a reader for each layer of the tile, in wire order.
pub fn walk_tile<'a>(mut reader: PbReader<'a>) -> Result<Vec<PbReader<'a>>, DecodeError> {
    let mut layers = Vec::new();
    while reader.has_remaining() {
        let offset = reader.position();
        let (number, wire_type) = reader.read_tag()?;
        match tile_field(number) {
            Some(spec) => {
                spec.expect(wire_type, offset)?;
                layers.push(reader.read_length_delimited()?);
            }
            None => reader.skip_field(wire_type)?,
        }
    }
    Ok(layers)
}

pub fn walk_layer<'a>(mut reader: PbReader<'a>) -> Result<LayerFields<'a>, DecodeError> {
    let mut name = None;
    let mut version = layer::DEFAULT_VERSION;
    let mut extent = layer::DEFAULT_EXTENT;
    let mut keys = Vec::new();
    let mut features = Vec::new();

    while reader.has_remaining() {
        let offset = reader.position();
        let (number, wire_type) = reader.read_tag()?;
        let Some(spec) = layer_field(number) else {
            reader.skip_field(wire_type)?;
            continue;
        };
        spec.expect(wire_type, offset)?;
        match number {
            layer::LAYER_NAME => name = Some(reader.read_length_delimited()?.as_bytes()),
            layer::FEATURES => features.push(reader.read_length_delimited()?),
            layer::KEYS => keys.push(reader.read_length_delimited()?.as_bytes()),
            // uint32 fields keep the low 32 bits.
            layer::EXTENT => extent = reader.read_varint()? as u32,
            layer::VERSION => version = reader.read_varint()? as u32,
            _ => reader.skip_field(wire_type)?,
        }
    }

    let name = name.ok_or(DecodeError::MissingRequiredField {
        message: layer::NAME,
        field: "name",
    })?;

    Ok(LayerFields {
        name,
        version,
        extent,
        keys,
        features,
    })
}

pub fn walk_feature(mut reader: PbReader<'_>) -> Result<GeomType, DecodeError> {
    let mut geom_type = GeomType::Unknown;
    while reader.has_remaining() {
        let offset = reader.position();
        let (number, wire_type) = reader.read_tag()?;
        match feature_field(number) {
            Some(spec) if number == feature::TYPE => {
                spec.expect(wire_type, offset)?;
                geom_type = GeomType::from_raw(reader.read_varint()?);
            }
            Some(spec) => {
                spec.expect(wire_type, offset)?;
                reader.skip_field(wire_type)?;
            }
            None => reader.skip_field(wire_type)?,
        }
    }
    Ok(geom_type)
}
