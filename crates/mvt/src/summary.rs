use serde::Serialize;

use crate::error::DecodeError;
use crate::mvt::{walk_feature, walk_layer, walk_tile, GeomType, LayerFields};
use crate::pb::PbReader;

/// Per-layer metadata and feature counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub version: u32,
    pub extent: u32,
    pub keys: Vec<String>,
    pub features: u64,
    pub points: u64,
    pub linestrings: u64,
    pub polygon_features: u64,
    pub unknown_features: u64,
}

impl LayerSummary {
    fn new(fields: &LayerFields<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(fields.name).into_owned(),
            version: fields.version,
            extent: fields.extent,
            keys: fields
                .keys
                .iter()
                .map(|k| String::from_utf8_lossy(k).into_owned())
                .collect(),
            ..Default::default()
        }
    }

    fn count(&mut self, geom_type: GeomType) {
        match geom_type {
            GeomType::Unknown => self.unknown_features += 1,
            GeomType::Point => self.points += 1,
            GeomType::Linestring => self.linestrings += 1,
            GeomType::Polygon => self.polygon_features += 1,
        }
    }
}

/// Layers of a tile in the order they appear on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub layers: Vec<LayerSummary>,
}

impl Summary {
    pub fn layer(&self, name: &str) -> Option<&LayerSummary> {
        self.layers.iter().find(|l| l.name == name)
    }
}

pub(crate) fn summarize(buffer: &[u8]) -> Result<Summary, DecodeError> {
    if buffer.is_empty() {
        return Err(DecodeError::TruncatedMessage {
            offset: 0,
            needed: 1,
            remaining: 0,
        });
    }

    let mut layers = Vec::new();
    for layer in walk_tile(PbReader::new(buffer))? {
        let fields = walk_layer(layer)?;
        let mut summary = LayerSummary::new(&fields);
        for feature in fields.features {
            summary.count(walk_feature(feature)?);
        }
        summary.features = summary.points
            + summary.linestrings
            + summary.polygon_features
            + summary.unknown_features;
        layers.push(summary);
    }
    Ok(Summary { layers })
}
