use thiserror::Error;

/// Errors raised while configuring orbits and simulations.
///
/// Propagation itself never fails: invalid elements that slip past validation
/// come out of the propagators as NaN or infinite coordinates.
#[derive(Error, Debug)]
pub enum OrbiterError {
    #[error("Invalid semi-major axis: {0} (must be finite and > 0)")]
    InvalidSemiMajorAxis(f64),

    #[error("Invalid eccentricity: {0} (closed orbits need 0 <= e < 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid inclination: {0} deg (must lie in [0, 180])")]
    InvalidInclination(f64),

    #[error("Non-finite orbital element `{name}`: {value}")]
    NonFiniteElement { name: &'static str, value: f64 },

    #[error("Invalid visual scale: {0} (must be finite and > 0)")]
    InvalidVisualScale(f64),

    #[error("Invalid gravitational parameter: {0} (must be finite and > 0)")]
    InvalidGravitationalParameter(f64),

    #[error("Orbit path needs at least {min} samples, got {got}")]
    TooFewPathSamples { got: usize, min: usize },

    #[error("Invalid time step: {0} (must be finite)")]
    InvalidTimeStep(f64),

    #[error("Duplicate body name in system configuration: {0}")]
    DuplicateBodyName(String),

    #[error("Body `{name}` rejected: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: Box<OrbiterError>,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse system configuration: {0}")]
    ConfigParseError(#[from] serde_json::Error),
}

impl PartialEq for OrbiterError {
    fn eq(&self, other: &Self) -> bool {
        use OrbiterError::*;
        match (self, other) {
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a == b,
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidInclination(a), InvalidInclination(b)) => a == b,
            (
                NonFiniteElement { name: n1, value: v1 },
                NonFiniteElement { name: n2, value: v2 },
            ) => n1 == n2 && (v1 == v2 || (v1.is_nan() && v2.is_nan())),
            (InvalidVisualScale(a), InvalidVisualScale(b)) => a == b,
            (InvalidGravitationalParameter(a), InvalidGravitationalParameter(b)) => a == b,
            (
                TooFewPathSamples { got: g1, min: m1 },
                TooFewPathSamples { got: g2, min: m2 },
            ) => g1 == g2 && m1 == m2,
            (InvalidTimeStep(a), InvalidTimeStep(b)) => a == b,
            (DuplicateBodyName(a), DuplicateBodyName(b)) => a == b,
            (
                InvalidBody {
                    name: n1,
                    source: s1,
                },
                InvalidBody {
                    name: n2,
                    source: s2,
                },
            ) => n1 == n2 && s1 == s2,

            // Not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (ConfigParseError(_), ConfigParseError(_)) => true,

            _ => false,
        }
    }
}
