//! Configuration de l'outil

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{bail, Context, Result};
use ellipse::{GeoPoint, DEFAULT_NUM_POINTS};

/// URL de base de s2map
pub const DEFAULT_MAP_URL: &str = "http://s2map.com/";

/// Paramètres de l'ellipse à tracer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EllipseConfig {
    /// Premier foyer
    pub focus1: GeoPoint,

    /// Second foyer
    pub focus2: GeoPoint,

    /// Rayon focal total (grand axe) en mètres
    pub radius_meters: f64,

    /// Nombre d'abscisses échantillonnées sur le grand axe
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

fn default_num_points() -> usize {
    DEFAULT_NUM_POINTS
}

impl EllipseConfig {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Vérifie les paramètres avant de lancer le calcul
    pub fn validate(&self) -> Result<()> {
        self.focus1.validate().context("Invalid focus1")?;
        self.focus2.validate().context("Invalid focus2")?;

        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            bail!(
                "Radius must be a positive number of meters, got: {}",
                self.radius_meters
            );
        }
        if self.num_points < 2 {
            bail!("Number of points must be at least 2, got: {}", self.num_points);
        }

        Ok(())
    }
}

/// Configuration de l'affichage cartographique
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// URL de base de la carte (s2map)
    pub map_url: String,

    /// Commande du navigateur (défaut : ouvreur du système)
    pub browser: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_url: DEFAULT_MAP_URL.into(),
            browser: None,
        }
    }
}

impl MapConfig {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self {
            map_url: std::env::var("PLOT_ELLIPSE_MAP_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MAP_URL.into()),
            browser: std::env::var("PLOT_ELLIPSE_BROWSER")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }
}
