//! Point d'entrée CLI pour plot-ellipse

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use plot_ellipse::MapConfig;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::EllipseArgs;

/// Tracer une ellipse autour de deux points lat/lng
#[derive(Parser)]
#[command(name = "plot-ellipse")]
#[command(author, version)]
#[command(about = "Tracer une ellipse autour de deux foyers lat/lng et l'afficher sur s2map")]
#[command(long_about = "Trace une ellipse autour de deux foyers lat/lng.\n\nLe rayon joint (grand axe, en mètres) doit être au moins égal à la distance entre les deux points. Par défaut l'URL s2map est affichée ; --open l'ouvre dans un onglet du navigateur.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    ellipse: EllipseArgs,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let map = MapConfig::from_env();
    debug!(map_url = %map.map_url, browser = ?map.browser, "Map configuration");

    cli::cmd_plot(&cli.ellipse, &map)
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout est réservé à l'URL / au JSON
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
