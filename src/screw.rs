use std::fmt;
use std::ops::{Add, BitXor, Mul, Neg};

use algebra::{GeometricAlgebra, Multivector};
use approx::AbsDiffEq;

use crate::{Error, Result};

/// Reduction of a screw-like element at a reference point.
///
/// The moment is only meaningful together with the point it is expressed at. Moving to another
/// point `Q` from `P` recomputes it as `M - (Q - P) ^ S`, `S` being the direction, which does not
/// depend on the point.
pub trait ScrewBase: Sized {
    /// Name used when rendering.
    const NAME: &'static str;

    /// Validating constructor shared by the point transport.
    fn from_parts(
        ref_point: Multivector,
        direction: Multivector,
        moment: Multivector,
    ) -> Result<Self>;

    fn ref_point(&self) -> &Multivector;

    fn direction(&self) -> &Multivector;

    fn moment(&self) -> &Multivector;

    fn algebra(&self) -> &GeometricAlgebra {
        self.ref_point().algebra()
    }

    /// The same element reduced at `new_point`.
    fn change_point(&self, new_point: &Multivector) -> Result<Self> {
        let offset = new_point.checked_sub(self.ref_point())?;
        let moment = self
            .moment()
            .checked_sub(&offset.checked_wedge(self.direction())?)?;
        tracing::trace!(
            kind = Self::NAME,
            from = %self.ref_point(),
            to = %new_point,
            "changed reduction point"
        );
        Self::from_parts(new_point.clone(), self.direction().clone(), moment)
    }

    /// Renders the element at `point`, or at its own reference point for `None`.
    fn show(&self, point: Option<&Multivector>) -> Result<String> {
        let text = match point {
            Some(point) => {
                let moved = self.change_point(point)?;
                Reduction::new::<Self>(moved.direction(), moved.moment()).to_string()
            }
            None => Reduction::new::<Self>(self.direction(), self.moment()).to_string(),
        };
        Ok(text)
    }

    /// Direction and moment within the algebra's tolerance of zero.
    fn is_zero(&self) -> bool {
        self.direction().is_zero() && self.moment().is_zero()
    }

    fn is_zero_within(&self, tolerance: f64) -> bool {
        self.direction().is_zero_within(tolerance) && self.moment().is_zero_within(tolerance)
    }
}

struct Reduction<'a> {
    name: &'static str,
    direction: &'a Multivector,
    moment: &'a Multivector,
}

impl<'a> Reduction<'a> {
    fn new<T: ScrewBase>(direction: &'a Multivector, moment: &'a Multivector) -> Self {
        Reduction {
            name: T::NAME,
            direction,
            moment,
        }
    }
}

impl fmt::Display for Reduction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(\n\tdirection={}\n\tmoment={}\n)",
            self.name, self.direction, self.moment
        )
    }
}

fn validate(ref_point: &Multivector, direction: &Multivector, moment: &Multivector) -> Result<()> {
    for part in [direction, moment] {
        if !ref_point.algebra().is_compatible(part.algebra()) {
            return Err(algebra::Error::IncompatibleAlgebra {
                lhs: ref_point.algebra().to_string(),
                rhs: part.algebra().to_string(),
            }
            .into());
        }
    }
    if !ref_point.is_grade(1) {
        return Err(Error::NotAPoint {
            point: ref_point.to_string(),
        });
    }
    Ok(())
}

macro_rules! screw_type {
    ($(#[$attr:meta])* $ty:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            ref_point: Multivector,
            direction: Multivector,
            moment: Multivector,
        }

        impl $ty {
            /// Fails when the parts come from incompatible algebras or when `ref_point` is not
            /// a grade-1 multivector. The zero multivector is accepted as the origin.
            pub fn new(
                ref_point: Multivector,
                direction: Multivector,
                moment: Multivector,
            ) -> Result<Self> {
                validate(&ref_point, &direction, &moment)?;
                Ok(Self {
                    ref_point,
                    direction,
                    moment,
                })
            }

            /// Sum reduced at `self`'s point, `rhs` is moved there first.
            pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
                let rhs = rhs.change_point(&self.ref_point)?;
                Ok(Self {
                    ref_point: self.ref_point.clone(),
                    direction: self.direction.checked_add(&rhs.direction)?,
                    moment: self.moment.checked_add(&rhs.moment)?,
                })
            }

            pub fn scale(&self, factor: f64) -> Self {
                Self {
                    ref_point: self.ref_point.clone(),
                    direction: &self.direction * factor,
                    moment: &self.moment * factor,
                }
            }
        }

        impl ScrewBase for $ty {
            const NAME: &'static str = stringify!($ty);

            fn from_parts(
                ref_point: Multivector,
                direction: Multivector,
                moment: Multivector,
            ) -> Result<Self> {
                Self::new(ref_point, direction, moment)
            }

            fn ref_point(&self) -> &Multivector {
                &self.ref_point
            }

            fn direction(&self) -> &Multivector {
                &self.direction
            }

            fn moment(&self) -> &Multivector {
                &self.moment
            }
        }

        /// Reduction at the stored reference point.
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&Reduction::new::<Self>(&self.direction, &self.moment), f)
            }
        }

        impl AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                Multivector::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.ref_point.abs_diff_eq(&other.ref_point, epsilon)
                    && self.direction.abs_diff_eq(&other.direction, epsilon)
                    && self.moment.abs_diff_eq(&other.moment, epsilon)
            }
        }

        impl Add<&$ty> for &$ty {
            type Output = $ty;

            fn add(self, rhs: &$ty) -> $ty {
                self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl Add for $ty {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                &self + &rhs
            }
        }

        impl Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                self.scale(-1.0)
            }
        }

        impl Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                self.scale(-1.0)
            }
        }

        impl Mul<&$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: &$ty) -> $ty {
                rhs.scale(self)
            }
        }

        impl Mul<$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                rhs.scale(self)
            }
        }
    };
}

screw_type! {
    /// A generalized screw: a direction and a moment about a reference point.
    ///
    /// Velocities of rigid bodies and lines are screws. They pair with [`CoScrew`]s through
    /// [`comoment`].
    ///
    /// # Panics
    ///
    /// `+` and `^` panic when the operands come from incompatible algebras, see
    /// [`Screw::checked_add`] and [`Screw::checked_wedge`].
    Screw
}

screw_type! {
    /// The dual of a [`Screw`], such as a force and its torque about the reference point.
    ///
    /// # Panics
    ///
    /// `+` panics when the operands come from incompatible algebras, see
    /// [`CoScrew::checked_add`].
    CoScrew
}

impl Screw {
    /// Outer product of two screws, reduced at `self`'s point.
    ///
    /// With `rhs` moved to that point, the direction is `S1 ^ M2 + M1 ^ S2` and the moment is
    /// `M1 ^ M2`. The product of a screw with itself, wherever the second factor is reduced, is
    /// zero when both parts are vectors or when the moment has the form `P ^ S`.
    pub fn checked_wedge(&self, rhs: &Screw) -> Result<Screw> {
        let rhs = rhs.change_point(&self.ref_point)?;
        let direction = self
            .direction
            .checked_wedge(&rhs.moment)?
            .checked_add(&self.moment.checked_wedge(&rhs.direction)?)?;
        let moment = self.moment.checked_wedge(&rhs.moment)?;
        Ok(Screw {
            ref_point: self.ref_point.clone(),
            direction,
            moment,
        })
    }
}

impl BitXor<&Screw> for &Screw {
    type Output = Screw;

    fn bitxor(self, rhs: &Screw) -> Screw {
        self.checked_wedge(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl BitXor for Screw {
    type Output = Screw;

    fn bitxor(self, rhs: Screw) -> Screw {
        &self ^ &rhs
    }
}

/// Scalar pairing of a coscrew with a screw, the power of a force on a velocity.
///
/// The screw is reduced at the coscrew's point, then the result is the scalar part of
/// `S * C - grade_involution(R) * grade_involution(M)`, with `R`, `C` the coscrew's direction and
/// moment and `S`, `M` the screw's.
pub fn comoment(coscrew: &CoScrew, screw: &Screw) -> Result<f64> {
    let screw = screw.change_point(&coscrew.ref_point)?;
    let direct = screw
        .direction
        .checked_scalar_product(&coscrew.moment)?;
    let crossed = coscrew
        .direction
        .grade_involution()
        .checked_scalar_product(&screw.moment.grade_involution())?;
    Ok(direct - crossed)
}
