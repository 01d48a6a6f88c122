//! Sorties : GeoJSON et carte s2map

pub mod geojson;
pub mod map;

pub use self::geojson::export_to_geojson;
pub use map::{open_in_browser, s2map_url};
