//! Structural summaries of Mapbox Vector Tiles.
//!
//! [`decode`] validates a vector tile buffer and reports, for each layer, its
//! name, version, extent, declared attribute keys and the number of features
//! of each geometry type. Geometries and attribute values are not decoded.
//!
//! ```
//! let err = vtinfo_mvt::decode(b"waka").unwrap_err();
//! assert!(err.to_string().contains("error decoding the vector tile buffer"));
//! ```

mod error;
pub mod mvt;
pub mod pb;
mod summary;

pub use error::{DecodeError, Error};
pub use summary::{LayerSummary, Summary};

/// Engine revision.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize the vector tile in `buffer`.
///
/// Any structural problem fails the whole call with [`Error::DecodeFailure`];
/// no partial summary is returned. An empty buffer is not a tile.
pub fn decode(buffer: &[u8]) -> Result<Summary, Error> {
    Ok(summary::summarize(buffer)?)
}

/// Entry point for bindings whose argument may be absent or not a buffer.
///
/// `None` fails with [`Error::InvalidArgument`] before any parsing.
pub fn info(buffer: Option<&[u8]>) -> Result<Summary, Error> {
    let buffer = buffer.ok_or(Error::InvalidArgument)?;
    decode(buffer)
}
