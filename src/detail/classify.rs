//! Planet type classification by radius

use serde::Serialize;

/// Size class of a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanetType {
    #[serde(rename = "Sub-Earth")]
    SubEarth,
    #[serde(rename = "Earth-like")]
    EarthLike,
    #[serde(rename = "Super-Earth")]
    SuperEarth,
    #[serde(rename = "Neptune-like")]
    NeptuneLike,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    Unknown,
}

impl PlanetType {
    /// Classify by radius in Earth radii
    ///
    /// | radius      | type         |
    /// |-------------|--------------|
    /// | < 0.5       | Sub-Earth    |
    /// | 0.5 - 1.6   | Earth-like   |
    /// | 1.6 - 4     | Super-Earth  |
    /// | 4 - 10      | Neptune-like |
    /// | >= 10       | Gas Giant    |
    ///
    /// Missing, zero or non-finite radii are `Unknown`.
    pub fn from_radius(radius: Option<f64>) -> Self {
        match radius {
            Some(r) if r.is_finite() && r > 0.0 => {
                if r < 0.5 {
                    PlanetType::SubEarth
                } else if r < 1.6 {
                    PlanetType::EarthLike
                } else if r < 4.0 {
                    PlanetType::SuperEarth
                } else if r < 10.0 {
                    PlanetType::NeptuneLike
                } else {
                    PlanetType::GasGiant
                }
            }
            _ => PlanetType::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanetType::SubEarth => "Sub-Earth",
            PlanetType::EarthLike => "Earth-like",
            PlanetType::SuperEarth => "Super-Earth",
            PlanetType::NeptuneLike => "Neptune-like",
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::Unknown => "Unknown",
        }
    }

    /// Badge classes for the detail header
    pub fn badge_class(&self) -> &'static str {
        match self {
            PlanetType::EarthLike => "bg-green-500/20 text-green-400 border-green-500/30",
            PlanetType::SuperEarth => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            PlanetType::NeptuneLike => "bg-indigo-500/20 text-indigo-400 border-indigo-500/30",
            PlanetType::GasGiant => "bg-purple-500/20 text-purple-400 border-purple-500/30",
            PlanetType::SubEarth => "bg-yellow-500/20 text-yellow-400 border-yellow-500/30",
            PlanetType::Unknown => "bg-gray-500/20 text-gray-400 border-gray-500/30",
        }
    }

    /// Gradient used for the planet illustration
    pub fn gradient_class(&self) -> &'static str {
        match self {
            PlanetType::EarthLike => "from-blue-600 to-green-800",
            PlanetType::SuperEarth => "from-indigo-600 to-blue-800",
            PlanetType::NeptuneLike => "from-indigo-600 to-purple-800",
            PlanetType::GasGiant => "from-purple-600 to-red-800",
            PlanetType::SubEarth => "from-yellow-600 to-orange-800",
            PlanetType::Unknown => "from-gray-600 to-gray-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(PlanetType::from_radius(Some(0.3)), PlanetType::SubEarth);
        assert_eq!(PlanetType::from_radius(Some(0.5)), PlanetType::EarthLike);
        assert_eq!(PlanetType::from_radius(Some(1.59)), PlanetType::EarthLike);
        assert_eq!(PlanetType::from_radius(Some(1.6)), PlanetType::SuperEarth);
        assert_eq!(PlanetType::from_radius(Some(4.0)), PlanetType::NeptuneLike);
        assert_eq!(PlanetType::from_radius(Some(10.0)), PlanetType::GasGiant);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(PlanetType::from_radius(None), PlanetType::Unknown);
        assert_eq!(PlanetType::from_radius(Some(0.0)), PlanetType::Unknown);
        assert_eq!(PlanetType::from_radius(Some(f64::NAN)), PlanetType::Unknown);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PlanetType::GasGiant).unwrap();
        assert_eq!(json, "\"Gas Giant\"");
    }
}
