//! Tests d'intégration : config JSON → périmètre → GeoJSON

use geojson::{feature::Id, GeoJson, Value};
use plot_ellipse::config::EllipseConfig;
use plot_ellipse::export;

fn write_config(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_config_to_geojson() {
    let config_path = write_config(
        "plot_ellipse_it_config.json",
        r#"{
            "focus1": {"lat": 32.076761, "lng": 34.792510},
            "focus2": {"lat": 32.083257, "lng": 34.767737},
            "radius_meters": 3000,
            "num_points": 12
        }"#,
    );
    let output_path = std::env::temp_dir().join("plot_ellipse_it.geojson");

    let config = EllipseConfig::load(&config_path).unwrap();
    config.validate().unwrap();
    let perimeter = ellipse::perimeter(
        config.focus1,
        config.focus2,
        config.radius_meters,
        config.num_points,
    )
    .unwrap();
    export::export_to_geojson(&perimeter, config.focus1, config.focus2, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let geojson: GeoJson = content.parse().expect("valid GeoJSON");

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        other => panic!("expected a FeatureCollection, got {:?}", other),
    };
    assert_eq!(collection.features.len(), 3);

    let ellipse_feature = &collection.features[0];
    assert_eq!(ellipse_feature.id, Some(Id::String("perimeter".to_string())));
    match &ellipse_feature.geometry.as_ref().unwrap().value {
        Value::Polygon(rings) => {
            assert_eq!(rings.len(), 1);
            // 2n - 2 points + fermeture
            assert_eq!(rings[0].len(), 2 * 12 - 2 + 1);
            assert_eq!(rings[0].first(), rings[0].last());

            // [lng, lat] autour du point milieu
            for position in &rings[0] {
                assert!((position[0] - perimeter.midpoint.lng).abs() < 0.05);
                assert!((position[1] - perimeter.midpoint.lat).abs() < 0.05);
            }
        }
        other => panic!("expected a Polygon, got {:?}", other),
    }

    let semi_minor = ellipse_feature
        .property("semi_minor_m")
        .and_then(|v| v.as_f64())
        .unwrap();
    assert!((semi_minor - perimeter.axes.semi_minor).abs() < 1e-9);

    match &collection.features[2].geometry.as_ref().unwrap().value {
        Value::Point(position) => {
            assert!((position[0] - config.focus2.lng).abs() < 1e-12);
            assert!((position[1] - config.focus2.lat).abs() < 1e-12);
        }
        other => panic!("expected a Point, got {:?}", other),
    }

    std::fs::remove_file(config_path).ok();
    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_invalid_config_file() {
    let path = write_config(
        "plot_ellipse_it_invalid.json",
        r#"{"focus1": {"lat": 1.0}, "radius_meters": 10}"#,
    );

    let err = EllipseConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_map_url_matches_points() {
    let f1 = ellipse::GeoPoint::new(48.8566, 2.3522);
    let f2 = ellipse::GeoPoint::new(48.8606, 2.3376);
    let perimeter = ellipse::perimeter(f1, f2, 2500.0, 4).unwrap();

    let url = export::s2map_url("http://s2map.com/", &perimeter.points);
    let list = url.split("points=").nth(1).unwrap();
    let values: Vec<f64> = list.split(',').map(|v| v.parse().unwrap()).collect();

    assert_eq!(values.len(), 2 * perimeter.points.len());
    assert_eq!(values[0], perimeter.points[0].lat);
    assert_eq!(values[1], perimeter.points[0].lng);
}
