use std::fmt::{Display, Formatter};

use vtinfo_mvt::{LayerSummary, Summary};

/// Human-readable rendering of a [`Summary`], one block per layer.
pub struct SummaryView<'a>(pub &'a Summary);

impl Display for SummaryView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} layers", self.0.layers.len())?;
        for layer in &self.0.layers {
            write!(f, "{}", LayerView(layer))?;
        }
        Ok(())
    }
}

struct LayerView<'a>(&'a LayerSummary);

impl Display for LayerView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let l = self.0;
        writeln!(f)?;
        writeln!(f, "{} (version {}, extent {})", l.name, l.version, l.extent)?;
        writeln!(
            f,
            "  features: {}  points: {}  linestrings: {}  polygons: {}  unknown: {}",
            l.features, l.points, l.linestrings, l.polygon_features, l.unknown_features
        )?;
        if l.keys.is_empty() {
            writeln!(f, "  keys: (none)")
        } else {
            writeln!(f, "  keys: {}", l.keys.join(", "))
        }
    }
}

#[test]
fn test_summary_view() {
    let summary = Summary {
        layers: vec![
            LayerSummary {
                name: "landuse".into(),
                version: 2,
                extent: 4096,
                keys: vec!["class".into(), "osm_id".into()],
                features: 5,
                polygon_features: 5,
                ..Default::default()
            },
            LayerSummary {
                name: "empty".into(),
                version: 1,
                extent: 512,
                ..Default::default()
            },
        ],
    };
    let text = SummaryView(&summary).to_string();
    assert_eq!(
        text,
        "2 layers

landuse (version 2, extent 4096)
  features: 5  points: 0  linestrings: 0  polygons: 5  unknown: 0
  keys: class, osm_id

empty (version 1, extent 512)
  features: 0  points: 0  linestrings: 0  polygons: 0  unknown: 0
  keys: (none)
"
    );
}
