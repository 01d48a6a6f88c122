//! Modèle de Terre sphérique

/// Sphère terrestre utilisée pour les distances et les conversions locales
pub struct Sphere;

impl Sphere {
    /// Rayon moyen en mètres
    pub const R: f64 = 6_371_000.0;

    /// Longueur d'un degré de latitude (arc de grand cercle), en mètres
    #[cfg(test)]
    pub(crate) const METERS_PER_DEGREE: f64 = Self::R * std::f64::consts::PI / 180.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_degree() {
        assert!((Sphere::METERS_PER_DEGREE - 111_194.93).abs() < 0.01);
    }
}
