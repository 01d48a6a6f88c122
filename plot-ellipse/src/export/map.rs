//! Affichage du périmètre sur s2map

use std::process::Command;

use anyhow::{Context, Result};
use ellipse::GeoPoint;
use tracing::debug;

/// Construit l'URL s2map d'un polygone (ordre lat, lng)
pub fn s2map_url(base: &str, points: &[GeoPoint]) -> String {
    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("{},{}", p.lat, p.lng))
        .collect();

    format!(
        "{}#order=latlng&mode=polygon&s2=false&points={}",
        base,
        coords.join(",")
    )
}

/// Ouvre l'URL dans un navigateur
///
/// Utilise `browser` s'il est fourni, sinon l'ouvreur du système. Le
/// processus est lancé sans attendre sa fin.
pub fn open_in_browser(url: &str, browser: Option<&str>) -> Result<()> {
    let mut cmd = match browser {
        Some(program) => Command::new(program),
        None => system_opener(),
    };
    cmd.arg(url);

    let child = cmd
        .spawn()
        .context(format!("Failed to launch browser ({:?})", cmd.get_program()))?;
    debug!(command = ?cmd, pid = child.id(), "Browser launched");

    Ok(())
}

#[cfg(target_os = "macos")]
fn system_opener() -> Command {
    Command::new("open")
}

// `cmd /C start` couperait l'URL au premier `&`
#[cfg(target_os = "windows")]
fn system_opener() -> Command {
    Command::new("explorer")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn system_opener() -> Command {
    Command::new("xdg-open")
}
