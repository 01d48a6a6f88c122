//! Export vers GeoJSON avec geozero

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, Geometry, LineString, Point, Polygon};
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;
use serde_json::{json, Value};

use ellipse::{EllipsePerimeter, GeoPoint};

/// Exporte le périmètre et les deux foyers en GeoJSON (EPSG:4326)
pub fn export_to_geojson(
    perimeter: &EllipsePerimeter,
    focus1: GeoPoint,
    focus2: GeoPoint,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_feature_collection(&mut writer, perimeter, focus1, focus2)?;
    writer.flush()?;

    Ok(())
}

/// Écrit la FeatureCollection complète
fn write_feature_collection<W: Write>(
    writer: &mut W,
    perimeter: &EllipsePerimeter,
    focus1: GeoPoint,
    focus2: GeoPoint,
) -> Result<()> {
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::4326"}}}},"features":["#
    )?;

    let exterior: LineString = perimeter.points.iter().map(|&p| Coord::from(p)).collect();
    // Polygon::new ferme l'anneau
    let polygon = Geometry::Polygon(Polygon::new(exterior, vec![]));
    let properties = json!({
        "semi_major_m": perimeter.axes.semi_major,
        "semi_minor_m": perimeter.axes.semi_minor,
        "focal_distance_m": perimeter.focal_distance,
        "bearing_deg": perimeter.bearing_deg,
        "num_points": perimeter.points.len(),
    });
    write_feature(writer, "perimeter", &polygon, &properties)?;

    for (id, focus) in [("focus1", focus1), ("focus2", focus2)] {
        write!(writer, ",")?;
        let point = Geometry::Point(Point::from(Coord::from(focus)));
        write_feature(writer, id, &point, &json!({ "role": "focus" }))?;
    }

    write!(writer, "]}}")?;
    Ok(())
}

/// Écrit une feature en GeoJSON
fn write_feature<W: Write>(
    writer: &mut W,
    id: &str,
    geometry: &Geometry,
    properties: &Value,
) -> Result<()> {
    write!(
        writer,
        r#"{{"type":"Feature","id":{},"geometry":"#,
        serde_json::to_string(id)?
    )?;

    // Géométrie via geozero
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    geometry.process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    write!(writer, r#","properties":{}}}"#, serde_json::to_string(properties)?)?;

    Ok(())
}
