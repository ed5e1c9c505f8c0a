use super::field::FieldElement;
use crate::{Curve, PointError};

use std::fmt;

/// The coordinate representation a point is currently held in.
///
/// A point is in exactly one representation at a time; converting
/// replaces the representation instead of adding a second view. Adding
/// a new coordinate system later means adding a variant here, which
/// forces every match in the crate to handle it.
///
/// The point at infinity is an affine point with both coordinates
/// absent. A half-infinite pair (exactly one coordinate absent) is
/// rejected at construction and never occurs in a live value. The
/// affine point behind a Jacobian triple is (X/Z², Y/Z³); a zero Z is
/// rejected at construction, so infinity is representable in affine
/// form only.
#[derive(Debug, Clone)]
pub enum Coordinate<C: Curve> {
    Affine {
        x: Option<FieldElement<C>>,
        y: Option<FieldElement<C>>,
    },
    Jacobian {
        x: FieldElement<C>,
        y: FieldElement<C>,
        z: FieldElement<C>,
    },
}

/// A point on the curve `C`, without any arithmetic: representation,
/// conversion and equality only. The curve is the type parameter, so
/// points on different curves are different types and cannot meet in
/// a comparison.
#[derive(Debug, Clone)]
pub struct Point<C: Curve> {
    coordinate: Coordinate<C>,
}

impl<C: Curve> Point<C> {
    /// An affine point from an optional coordinate pair. Both absent
    /// is the point at infinity; exactly one absent is rejected.
    pub fn new_affine(
        x: Option<FieldElement<C>>,
        y: Option<FieldElement<C>>,
    ) -> Result<Self, PointError> {
        if x.is_some() != y.is_some() {
            return Err(PointError::InvalidState(
                "exactly one affine coordinate is absent",
            ));
        }
        Ok(Self {
            coordinate: Coordinate::Affine { x, y },
        })
    }

    /// The group identity in its canonical affine form.
    pub fn infinity() -> Self {
        Self {
            coordinate: Coordinate::Affine { x: None, y: None },
        }
    }

    /// A Jacobian point from an (X, Y, Z) triple. Z must not be zero:
    /// infinity is only representable in affine form.
    pub fn new_jacobian(
        x: FieldElement<C>,
        y: FieldElement<C>,
        z: FieldElement<C>,
    ) -> Result<Self, PointError> {
        if z.is_zero() {
            return Err(PointError::InvalidState("zero z coordinate"));
        }
        Ok(Self {
            coordinate: Coordinate::Jacobian { x, y, z },
        })
    }

    pub fn coordinate(&self) -> &Coordinate<C> {
        &self.coordinate
    }

    /// Whether this point is the group identity. Only the affine
    /// representation can hold infinity, so a Jacobian point is never
    /// the identity.
    pub fn is_infinity(&self) -> bool {
        match self.coordinate {
            Coordinate::Affine { ref x, ref y } => x.is_none() && y.is_none(),
            Coordinate::Jacobian { .. } => false,
        }
    }

    /// Convert an affine point into Jacobian representation with
    /// Z = 1. Consumes the point so the old representation cannot be
    /// used afterwards. Fails on infinity (no Jacobian form exists for
    /// it) and on points that are already Jacobian.
    pub fn into_jacobian(self) -> Result<Self, PointError> {
        match self.coordinate {
            Coordinate::Affine {
                x: Some(x),
                y: Some(y),
            } => Ok(Self {
                coordinate: Coordinate::Jacobian {
                    x,
                    y,
                    z: FieldElement::ONE,
                },
            }),
            Coordinate::Affine { .. } => Err(PointError::InvalidState(
                "infinity has no jacobian representation",
            )),
            Coordinate::Jacobian { .. } => {
                Err(PointError::InvalidState("already a jacobian coordinate"))
            }
        }
    }

    /// Convert a Jacobian point into affine representation via
    /// x = X/Z², y = Y/Z³. Fails on points that are already affine.
    /// The zero-Z guard is unreachable through the public
    /// constructors but a division by zero must never pass silently.
    pub fn into_affine(self) -> Result<Self, PointError> {
        match self.coordinate {
            Coordinate::Jacobian { x, y, z } => {
                if z.is_zero() {
                    return Err(PointError::DivisionByZero);
                }
                let z2 = z * z;
                let z3 = z2 * z;
                Ok(Self {
                    coordinate: Coordinate::Affine {
                        x: Some(x / z2),
                        y: Some(y / z3),
                    },
                })
            }
            Coordinate::Affine { .. } => {
                Err(PointError::InvalidState("already an affine coordinate"))
            }
        }
    }

    /// Representation-aware equality. Both points must be in the same
    /// representation; comparing across representations is a caller
    /// error, not a `false` — normalize both sides first.
    ///
    /// Affine points compare componentwise, with absent == absent.
    /// Jacobian triples compare cross-multiplied, X₁Z₂² = X₂Z₁² and
    /// Y₁Z₂³ = Y₂Z₁³, so two scalings of the same point are equal.
    pub fn try_eq(&self, other: &Self) -> Result<bool, PointError> {
        match (&self.coordinate, &other.coordinate) {
            (Coordinate::Affine { x: x1, y: y1 }, Coordinate::Affine { x: x2, y: y2 }) => {
                Ok(x1 == x2 && y1 == y2)
            }
            (
                Coordinate::Jacobian {
                    x: x1,
                    y: y1,
                    z: z1,
                },
                Coordinate::Jacobian {
                    x: x2,
                    y: y2,
                    z: z2,
                },
            ) => {
                let z1_sq = *z1 * *z1;
                let z2_sq = *z2 * *z2;
                let x_eq = *x1 * z2_sq == *x2 * z1_sq;
                let y_eq = *y1 * (z2_sq * *z2) == *y2 * (z1_sq * *z1);
                Ok(x_eq && y_eq)
            }
            _ => Err(PointError::UnsupportedOperation(
                "comparing different coordinate systems",
            )),
        }
    }
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coordinate {
            Coordinate::Affine {
                x: Some(ref x),
                y: Some(ref y),
            } => write!(f, "({}, {})", x, y),
            Coordinate::Affine { .. } => write!(f, "Infinity"),
            Coordinate::Jacobian {
                ref x,
                ref y,
                ref z,
            } => write!(f, "({}:{}:{})", x, y, z),
        }
    }
}
