//! # plot-ellipse
//!
//! Trace l'ellipse définie par deux foyers lat/lng et un rayon focal total,
//! puis l'affiche sur s2map.
//!
//! ## Features
//!
//! - Configuration typée (arguments CLI ou fichier JSON)
//! - URL s2map et ouverture dans le navigateur
//! - Export GeoJSON standalone
//!
//! ## Usage CLI
//!
//! ```bash
//! plot-ellipse --p1-lat 32.076761 --p1-lng 34.792510 \
//!              --p2-lat 32.083257 --p2-lng 34.767737 -r 3000 --open
//!
//! # Export GeoJSON
//! plot-ellipse --config ellipse.json --geojson ellipse.geojson
//! ```

pub mod config;
pub mod export;

pub use config::{EllipseConfig, MapConfig};
