use std::fmt;
use std::ops::{Add, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;

use crate::blade::Blade;
use crate::{Error, GeometricAlgebra, Involution, Product, Result, DEFAULT_TOLERANCE};

/// An element of a geometric algebra: one coefficient per basis blade.
///
/// Multivectors are values. Every operation returns a new multivector tied to the algebra of its
/// left operand.
///
/// # Panics
///
/// `+`, `-`, `*`, `^` and `|` between multivectors panic when the operands come from algebras
/// with different signatures. Use the `checked_*` methods to get an
/// [`Error::IncompatibleAlgebra`] instead.
#[derive(Clone)]
pub struct Multivector {
    algebra: GeometricAlgebra,
    coefficients: Vec<f64>,
}

impl Multivector {
    pub(crate) fn from_parts(algebra: GeometricAlgebra, coefficients: Vec<f64>) -> Self {
        debug_assert_eq!(algebra.algebra().len(), coefficients.len());
        Self {
            algebra,
            coefficients,
        }
    }

    pub(crate) fn from_blade(algebra: &GeometricAlgebra, blade: Blade, value: f64) -> Self {
        let mut coefficients = vec![0.0; algebra.algebra().len()];
        if !blade.is_zero() {
            coefficients[blade] = blade.signum() * value;
        }
        Self::from_parts(algebra.clone(), coefficients)
    }

    pub fn algebra(&self) -> &GeometricAlgebra {
        &self.algebra
    }

    /// Coefficients indexed by generator bitmask: `[s, e0, e1, e01, e2, ...]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of a signed blade, so that `get(-b) == -get(b)`.
    pub fn get(&self, blade: Blade) -> f64 {
        if blade.is_zero() || blade.index() >= self.coefficients.len() {
            return 0.0;
        }
        blade.signum() * self.coefficients[blade]
    }

    /// Coefficient of a named blade, `coefficient("e10") == -coefficient("e01")`.
    pub fn coefficient(&self, name: &str) -> Result<f64> {
        let blade = self.algebra.algebra().parse_blade(name)?;
        Ok(self.get(blade))
    }

    /// Blades with a non-zero coefficient, in bitmask order.
    pub fn terms(&self) -> impl Iterator<Item = (Blade, f64)> + Clone + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| (Blade(i as u32), *c))
    }

    /// Grade projection, `<self>_grade`.
    pub fn grade(&self, grade: u32) -> Multivector {
        self.map(|blade, c| if blade.grade() == grade { c } else { 0.0 })
    }

    pub fn scalar_part(&self) -> f64 {
        self.coefficients[0]
    }

    /// Grades holding a coefficient above tolerance, ascending.
    pub fn grades(&self) -> Vec<u32> {
        let config = self.algebra.config();
        self.terms()
            .filter(|(_, c)| !config.is_negligible(*c))
            .map(|(blade, _)| blade.grade())
            .sorted()
            .dedup()
            .collect()
    }

    /// True when every coefficient outside `grade` is within tolerance of zero.
    pub fn is_grade(&self, grade: u32) -> bool {
        self.grades().iter().all(|g| *g == grade)
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.algebra.tolerance())
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.coefficients.iter().all(|c| c.abs() <= tolerance)
    }

    pub fn involute(&self, involution: Involution) -> Multivector {
        self.map(|blade, c| involution.apply(blade).signum() * c)
    }

    pub fn grade_involution(&self) -> Multivector {
        self.involute(Involution::GradeInvolution)
    }

    pub fn reverse(&self) -> Multivector {
        self.involute(Involution::Reverse)
    }

    pub fn clifford_conjugate(&self) -> Multivector {
        self.involute(Involution::CliffordConjugate)
    }

    /// `<self * reverse(self)>_0`, negative for some elements of non-Euclidean algebras.
    pub fn norm2(&self) -> f64 {
        self.product(&self.reverse(), Product::Scalar).scalar_part()
    }

    pub fn norm(&self) -> f64 {
        self.norm2().abs().sqrt()
    }

    /// Inverse of a versor, `reverse(self) / (self * reverse(self))`.
    ///
    /// Fails when `self * reverse(self)` is not a non-zero scalar, which is the case for zero,
    /// null vectors and most non-versors.
    pub fn inverse(&self) -> Result<Multivector> {
        let reverse = self.reverse();
        let square = self.product(&reverse, Product::Geometric);
        let norm2 = square.scalar_part();
        let config = self.algebra.config();
        if config.is_negligible(norm2) || !(square.grade(0) - &square).is_zero() {
            return Err(Error::NotInvertible {
                value: self.to_string(),
            });
        }
        Ok(reverse / norm2)
    }

    pub fn checked_add(&self, rhs: &Multivector) -> Result<Multivector> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Multivector) -> Result<Multivector> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn checked_geo(&self, rhs: &Multivector) -> Result<Multivector> {
        self.checked_product(rhs, Product::Geometric)
    }

    pub fn checked_wedge(&self, rhs: &Multivector) -> Result<Multivector> {
        self.checked_product(rhs, Product::Wedge)
    }

    /// Left contraction.
    pub fn checked_inner(&self, rhs: &Multivector) -> Result<Multivector> {
        self.checked_product(rhs, Product::LeftContraction)
    }

    pub fn checked_scalar_product(&self, rhs: &Multivector) -> Result<f64> {
        self.checked_product(rhs, Product::Scalar)
            .map(|mv| mv.scalar_part())
    }

    pub fn checked_product(&self, rhs: &Multivector, product: Product) -> Result<Multivector> {
        self.algebra.check_compatible(&rhs.algebra)?;
        Ok(self.product(rhs, product))
    }

    /// Bilinear extension of a blade product. Both operands must share a signature.
    fn product(&self, rhs: &Multivector, product: Product) -> Multivector {
        let algebra = self.algebra.algebra();
        let mut coefficients = vec![0.0; self.coefficients.len()];
        for ((lhs_blade, lhs), (rhs_blade, rhs)) in self.terms().cartesian_product(rhs.terms()) {
            let blade = product.apply(algebra, lhs_blade, rhs_blade);
            if !blade.is_zero() {
                coefficients[blade] += blade.signum() * lhs * rhs;
            }
        }
        Multivector::from_parts(self.algebra.clone(), coefficients)
    }

    fn map<F: Fn(Blade, f64) -> f64>(&self, f: F) -> Multivector {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| f(Blade(i as u32), *c))
            .collect();
        Multivector::from_parts(self.algebra.clone(), coefficients)
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, rhs: &Multivector, f: F) -> Result<Multivector> {
        self.algebra.check_compatible(&rhs.algebra)?;
        let coefficients = self
            .coefficients
            .iter()
            .zip(&rhs.coefficients)
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Multivector::from_parts(self.algebra.clone(), coefficients))
    }

    fn add_scalar(&self, value: f64) -> Multivector {
        let mut output = self.clone();
        output.coefficients[0] += value;
        output
    }
}

impl PartialEq for Multivector {
    fn eq(&self, other: &Self) -> bool {
        self.algebra.is_compatible(&other.algebra) && self.coefficients == other.coefficients
    }
}

impl AbsDiffEq for Multivector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.algebra.is_compatible(&other.algebra)
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Multivector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.algebra.is_compatible(&other.algebra)
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Terms in grade order, `2 + 3*e1 - e12`. The formatter precision applies to coefficients.
impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algebra = self.algebra.algebra();
        let mut first = true;
        for blade in algebra.blades_by_grade() {
            let value = self.coefficients[blade];
            if value == 0.0 {
                continue;
            }

            let sign = if value < 0.0 { "-" } else { "+" };
            if first {
                if value < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            first = false;

            let magnitude = value.abs();
            let name = algebra.blade_name(blade);
            let unit = magnitude == 1.0 && !blade.is_scalar();
            match (unit, f.precision()) {
                (true, _) => write!(f, "{name}")?,
                (false, Some(precision)) if blade.is_scalar() => {
                    write!(f, "{magnitude:.precision$}")?
                }
                (false, None) if blade.is_scalar() => write!(f, "{magnitude}")?,
                (false, Some(precision)) => write!(f, "{magnitude:.precision$}*{name}")?,
                (false, None) => write!(f, "{magnitude}*{name}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Multivector")
            .field(&format_args!("{self}"))
            .finish()
    }
}

// The operators panic on incompatible algebras, the checked methods report it.
macro_rules! binary_op {
    ($op:ident, $fn:ident, $checked:ident) => {
        impl $op<&Multivector> for &Multivector {
            type Output = Multivector;
            fn $fn(self, rhs: &Multivector) -> Multivector {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl $op<Multivector> for Multivector {
            type Output = Multivector;
            fn $fn(self, rhs: Multivector) -> Multivector {
                $op::$fn(&self, &rhs)
            }
        }

        impl $op<&Multivector> for Multivector {
            type Output = Multivector;
            fn $fn(self, rhs: &Multivector) -> Multivector {
                $op::$fn(&self, rhs)
            }
        }

        impl $op<Multivector> for &Multivector {
            type Output = Multivector;
            fn $fn(self, rhs: Multivector) -> Multivector {
                $op::$fn(self, &rhs)
            }
        }
    };
}

binary_op!(Add, add, checked_add);
binary_op!(Sub, sub, checked_sub);
binary_op!(Mul, mul, checked_geo);
binary_op!(BitXor, bitxor, checked_wedge);
binary_op!(BitOr, bitor, checked_inner);

macro_rules! scalar_op {
    ($op:ident, $fn:ident, |$mv:ident, $x:ident| $body:expr) => {
        impl $op<f64> for &Multivector {
            type Output = Multivector;
            fn $fn(self, $x: f64) -> Multivector {
                let $mv = self;
                $body
            }
        }

        impl $op<f64> for Multivector {
            type Output = Multivector;
            fn $fn(self, rhs: f64) -> Multivector {
                $op::$fn(&self, rhs)
            }
        }
    };
}

scalar_op!(Mul, mul, |mv, x| mv.map(|_, c| c * x));
scalar_op!(Div, div, |mv, x| mv.map(|_, c| c / x));
scalar_op!(Add, add, |mv, x| mv.add_scalar(x));
scalar_op!(Sub, sub, |mv, x| mv.add_scalar(-x));

impl Mul<&Multivector> for f64 {
    type Output = Multivector;
    fn mul(self, rhs: &Multivector) -> Multivector {
        rhs * self
    }
}

impl Mul<Multivector> for f64 {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        &rhs * self
    }
}

impl Add<&Multivector> for f64 {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        rhs + self
    }
}

impl Add<Multivector> for f64 {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        &rhs + self
    }
}

impl Sub<&Multivector> for f64 {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        -rhs + self
    }
}

impl Sub<Multivector> for f64 {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        -rhs + self
    }
}

impl Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.map(|_, c| -c)
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        -&self
    }
}

/// Reverse, written `~` in most geometric algebra texts.
impl Not for &Multivector {
    type Output = Multivector;
    fn not(self) -> Multivector {
        self.reverse()
    }
}

impl Not for Multivector {
    type Output = Multivector;
    fn not(self) -> Multivector {
        self.reverse()
    }
}
