//! Arguments et exécution de la commande
//!
//! Les valeurs passées en ligne de commande écrasent celles du fichier
//! `--config`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ellipse::{EllipsePerimeter, GeoPoint};
use tracing::info;

use plot_ellipse::config::{EllipseConfig, MapConfig};
use plot_ellipse::export;

#[derive(Args, Debug, Default)]
pub struct EllipseArgs {
    /// Latitude of the first focus
    #[arg(long, alias = "p1_lat", allow_hyphen_values = true)]
    pub p1_lat: Option<f64>,

    /// Longitude of the first focus
    #[arg(long, alias = "p1_lng", allow_hyphen_values = true)]
    pub p1_lng: Option<f64>,

    /// Latitude of the second focus
    #[arg(long, alias = "p2_lat", allow_hyphen_values = true)]
    pub p2_lat: Option<f64>,

    /// Longitude of the second focus
    #[arg(long, alias = "p2_lng", allow_hyphen_values = true)]
    pub p2_lng: Option<f64>,

    /// Joint radius in meters (must be at least the distance between the foci)
    #[arg(short, long = "radius-in-meters", aliases = ["radius", "radius_in_meters"])]
    pub radius: Option<f64>,

    /// Number of points sampled along the major axis (default: 20)
    #[arg(short, long, alias = "num_points")]
    pub num_points: Option<usize>,

    /// JSON config file (focus1, focus2, radius_meters, num_points)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the ellipse and its foci to a GeoJSON file
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Open the ellipse on s2map in a browser tab
    #[arg(long)]
    pub open: bool,

    /// Print the points as a JSON array of [lat, lng] instead of the map URL
    #[arg(long)]
    pub json: bool,
}

/// Fusionne le fichier de config et les arguments, puis valide
pub fn resolve_config(args: &EllipseArgs) -> Result<EllipseConfig> {
    let base = args
        .config
        .as_deref()
        .map(EllipseConfig::load)
        .transpose()?;

    let config = EllipseConfig {
        focus1: GeoPoint::new(
            pick(args.p1_lat, base.as_ref().map(|c| c.focus1.lat), "--p1-lat")?,
            pick(args.p1_lng, base.as_ref().map(|c| c.focus1.lng), "--p1-lng")?,
        ),
        focus2: GeoPoint::new(
            pick(args.p2_lat, base.as_ref().map(|c| c.focus2.lat), "--p2-lat")?,
            pick(args.p2_lng, base.as_ref().map(|c| c.focus2.lng), "--p2-lng")?,
        ),
        radius_meters: pick(
            args.radius,
            base.as_ref().map(|c| c.radius_meters),
            "--radius-in-meters",
        )?,
        num_points: args
            .num_points
            .or(base.as_ref().map(|c| c.num_points))
            .unwrap_or(ellipse::DEFAULT_NUM_POINTS),
    };

    config.validate()?;
    Ok(config)
}

fn pick<T>(flag: Option<T>, from_file: Option<T>, name: &str) -> Result<T> {
    flag.or(from_file)
        .ok_or_else(|| anyhow::anyhow!("Missing required argument: {}", name))
}

/// Calcule l'ellipse et produit les sorties demandées
pub fn cmd_plot(args: &EllipseArgs, map: &MapConfig) -> Result<()> {
    let config = resolve_config(args)?;

    info!(
        focus1 = ?config.focus1,
        focus2 = ?config.focus2,
        radius = config.radius_meters,
        num_points = config.num_points,
        "Computing ellipse"
    );

    let perimeter = ellipse::perimeter(
        config.focus1,
        config.focus2,
        config.radius_meters,
        config.num_points,
    )
    .context("Failed to compute the ellipse perimeter")?;

    info!(
        semi_major = perimeter.axes.semi_major,
        semi_minor = perimeter.axes.semi_minor,
        points = perimeter.points.len(),
        "Ellipse computed"
    );

    if let Some(path) = &args.geojson {
        write_geojson(&perimeter, &config, path)?;
    }

    let url = export::s2map_url(&map.map_url, &perimeter.points);
    if args.json {
        println!("{}", serde_json::to_string(&perimeter.lat_lng_pairs())?);
    } else {
        println!("{}", url);
    }

    if args.open {
        export::open_in_browser(&url, map.browser.as_deref())?;
    }

    Ok(())
}

fn write_geojson(perimeter: &EllipsePerimeter, config: &EllipseConfig, path: &Path) -> Result<()> {
    export::export_to_geojson(perimeter, config.focus1, config.focus2, path)?;
    info!(path = %path.display(), "GeoJSON written");
    Ok(())
}
