//! Assembly vectors and their normalization.
//!
//! An assembly vector is the direction along which a module element is
//! inserted during fabrication. Besides literal directions, models may use
//! the symbolic `"gravity"` placeholder, which resolves to `(0, 0, -1)`.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ModuleError, ModuleResult};

/// Token used by models for the gravity placeholder.
pub const GRAVITY_TOKEN: &str = "gravity";

/// Decimal precision used by [`round_vector`] callers that have no better choice.
///
/// Module retrieval never relies on this; it always passes
/// [`RetrievalParams::precision`](crate::RetrievalParams::precision).
pub const DEFAULT_ROUND_DECIMALS: u32 = 3;

/// Largest precision that still leaves headroom in an `f64` mantissa.
pub const MAX_PRECISION: u32 = 15;

/// The unit vector substituted for the gravity placeholder.
#[must_use]
pub fn gravity() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// A direction vector or the symbolic gravity placeholder.
///
/// # Example
///
/// ```
/// use mesh_modules::AssemblyVector;
///
/// let up: AssemblyVector = "(0, 0, 1)".parse().unwrap();
/// let down: AssemblyVector = "gravity".parse().unwrap();
///
/// assert!(!up.is_gravity());
/// assert!(down.is_gravity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VectorRepr", into = "VectorRepr"))]
pub enum AssemblyVector {
    /// A literal direction.
    Direction(Vector3<f64>),
    /// The gravity placeholder, resolving to `(0, 0, -1)`.
    Gravity,
}

impl AssemblyVector {
    /// Create a literal direction from components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::Direction(Vector3::new(x, y, z))
    }

    /// Check whether this is the gravity placeholder.
    #[must_use]
    pub fn is_gravity(&self) -> bool {
        matches!(self, Self::Gravity)
    }

    /// Resolve to a concrete vector, substituting gravity.
    #[must_use]
    pub fn resolve(&self) -> Vector3<f64> {
        match self {
            Self::Direction(v) => *v,
            Self::Gravity => gravity(),
        }
    }
}

impl From<Vector3<f64>> for AssemblyVector {
    fn from(v: Vector3<f64>) -> Self {
        Self::Direction(v)
    }
}

impl From<[f64; 3]> for AssemblyVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for AssemblyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direction(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Self::Gravity => f.write_str(GRAVITY_TOKEN),
        }
    }
}

impl FromStr for AssemblyVector {
    type Err = ModuleError;

    /// Parse `"gravity"` or three comma-separated components.
    ///
    /// Components may be wrapped in one pair of parentheses or brackets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ModuleError::ParseVector {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(GRAVITY_TOKEN) {
            return Ok(Self::Gravity);
        }

        let inner = strip_delimiters(trimmed, '(', ')')
            .or_else(|| strip_delimiters(trimmed, '[', ']'))
            .unwrap_or(trimmed);

        let components = inner
            .split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| parse_error())?;

        match components.as_slice() {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(parse_error()),
        }
    }
}

fn strip_delimiters(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

/// Round a single value to `decimals` places.
///
/// Rounds the exact binary value, with exact ties going to the even digit,
/// so `2.5` rounds to `2.0` and `0.123_456_5` to `0.123_456`.
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals.min(MAX_PRECISION) as usize;
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Round the x, y, z components of a vector to `decimals` places.
///
/// # Example
///
/// ```
/// use mesh_modules::{round_vector, Vector3};
///
/// let v = round_vector(&Vector3::new(1.0, 2.0, 3.123_456_7), 6);
/// assert!((v.z - 3.123_457).abs() < 1e-12);
/// ```
#[must_use]
pub fn round_vector(vector: &Vector3<f64>, decimals: u32) -> Vector3<f64> {
    vector.map(|c| round_to(c, decimals))
}

/// Resolve and round one entry.
///
/// # Errors
///
/// Returns [`ModuleError::MalformedVector`] if a component is not finite.
pub fn normalize_vector(
    entry: &AssemblyVector,
    index: usize,
    decimals: u32,
) -> ModuleResult<Vector3<f64>> {
    let resolved = entry.resolve();

    for (axis, component) in ["x", "y", "z"].iter().zip(resolved.iter()) {
        if !component.is_finite() {
            return Err(ModuleError::MalformedVector {
                module: None,
                index,
                reason: format!("component {axis} is {component}"),
            });
        }
    }

    Ok(round_vector(&resolved, decimals))
}

/// Resolve gravity placeholders and round every entry, preserving order.
///
/// # Errors
///
/// Returns [`ModuleError::MalformedVector`] for the first non-finite entry.
///
/// # Example
///
/// ```
/// use mesh_modules::{normalize_vectors, AssemblyVector};
///
/// let vectors = [AssemblyVector::Gravity, AssemblyVector::new(1.0, 2.0, 3.123_456_7)];
/// let normalized = normalize_vectors(&vectors, 6).unwrap();
///
/// assert_eq!(normalized[0].z, -1.0);
/// assert!((normalized[1].z - 3.123_457).abs() < 1e-12);
/// ```
pub fn normalize_vectors(
    entries: &[AssemblyVector],
    decimals: u32,
) -> ModuleResult<Vec<Vector3<f64>>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_vector(entry, index, decimals))
        .collect()
}

/// Wire form: either the gravity token or a component triple.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum VectorRepr {
    Token(String),
    Components([f64; 3]),
}

#[cfg(feature = "serde")]
impl TryFrom<VectorRepr> for AssemblyVector {
    type Error = ModuleError;

    fn try_from(repr: VectorRepr) -> Result<Self, Self::Error> {
        match repr {
            VectorRepr::Token(token) => token.parse(),
            VectorRepr::Components(c) => Ok(c.into()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<AssemblyVector> for VectorRepr {
    fn from(vector: AssemblyVector) -> Self {
        match vector {
            AssemblyVector::Direction(v) => Self::Components([v.x, v.y, v.z]),
            AssemblyVector::Gravity => Self::Token(GRAVITY_TOKEN.to_string()),
        }
    }
}
