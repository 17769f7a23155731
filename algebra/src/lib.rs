//! Runtime Clifford algebras of arbitrary signature.
//!
//! A [`GeometricAlgebra`] is built once per working dimension and hands out [`Multivector`]s:
//! its basis blades, scalars, vectors. Multivectors stay tied to the algebra that produced them
//! and combine through the usual operators:
//!
//! - `+`, `-`: coefficient-wise sum and difference
//! - `*`: geometric product, or scaling by an `f64`
//! - `^`: outer (wedge) product
//! - `|`: left contraction
//! - `!`: reverse
//!
//! Operators panic when the operands come from incompatible algebras, the `checked_*` methods
//! return [`Error::IncompatibleAlgebra`] instead.

pub mod blade;

mod binary;
mod config;
mod constructor;
mod error;
mod multivector;
mod parse;
mod unary;


use std::fmt::Display;
use std::sync::Arc;

use itertools::Itertools;
use strum::EnumIter;

use crate::blade::Blade;

pub use crate::binary::Product;
pub use crate::config::{Config, DEFAULT_TOLERANCE};
pub use crate::constructor::BasisBlades;
pub use crate::error::{Error, Result};
pub use crate::multivector::Multivector;
pub use crate::unary::Involution;

/// Largest supported number of generators. Coefficients are stored densely, 2^n per multivector.
pub const MAX_DIMENSION: usize = 16;

pub trait IsEven {
    fn is_even(&self) -> bool;
}

impl IsEven for u32 {
    fn is_even(&self) -> bool {
        self & 1 != 1
    }
}

/// How a generator squares under the geometric product.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, EnumIter, strum::Display)]
pub enum Square {
    #[default]
    #[strum(serialize = "+")]
    Pos,
    #[strum(serialize = "-")]
    Neg,
    #[strum(serialize = "0")]
    Zero,
}

impl Square {
    pub fn blade(self) -> Blade {
        match self {
            Self::Pos => Blade::scalar(),
            Self::Neg => -Blade::scalar(),
            Self::Zero => Blade::zero(),
        }
    }
}

/// Signature and numeric settings shared by every multivector of one algebra.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Algebra {
    signature: Vec<Square>,
    config: Config,
}

impl Algebra {
    pub(crate) fn dim(&self) -> u32 {
        self.signature.len() as u32
    }

    /// Number of blades, and so of coefficients in a multivector.
    pub(crate) fn len(&self) -> usize {
        1 << self.signature.len()
    }

    pub(crate) fn iter_bases(&self, set: Blade) -> impl Iterator<Item = Square> + '_ {
        self.signature
            .iter()
            .enumerate()
            .filter_map(move |(i, b)| set.contains(i as u32).then_some(*b))
    }

    pub(crate) fn grade_range(&self) -> std::ops::RangeInclusive<u32> {
        0..=self.dim()
    }

    pub(crate) fn blades(&self) -> Blades {
        Blades::from(self.dim())
    }

    /// Every blade, sorted by grade and then by generator set.
    pub(crate) fn blades_by_grade(&self) -> impl Iterator<Item = Blade> + '_ {
        self.grade_range()
            .flat_map(move |g| self.blades().filter(move |b| b.grade() == g))
    }

    pub(crate) fn pseudoscalar(&self) -> Blade {
        Blade::pseudoscalar(self.dim())
    }

    pub(crate) fn geo(&self, lhs: Blade, rhs: Blade) -> Blade {
        let overlap = Blade(lhs.bits() & rhs.bits());
        let mut product = lhs.product(rhs);
        for square in self.iter_bases(overlap) {
            product = product.product(square.blade());
        }
        product
    }

    pub(crate) fn dot(&self, lhs: Blade, rhs: Blade) -> Blade {
        let output_grade = lhs.grade().abs_diff(rhs.grade());
        let product = self.geo(lhs, rhs);
        product.filter(|p| p.grade() == output_grade)
    }

    pub(crate) fn wedge(&self, lhs: Blade, rhs: Blade) -> Blade {
        let output_grade = lhs.grade() + rhs.grade();
        let product = self.geo(lhs, rhs);
        product.filter(|b| b.grade() == output_grade)
    }

    pub(crate) fn left_con(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.grade() <= rhs.grade() {
            self.dot(lhs, rhs)
        } else {
            Blade::zero()
        }
    }

    pub(crate) fn right_con(&self, lhs: Blade, rhs: Blade) -> Blade {
        if lhs.grade() >= rhs.grade() {
            self.dot(lhs, rhs)
        } else {
            Blade::zero()
        }
    }

    pub(crate) fn scalar_product(&self, lhs: Blade, rhs: Blade) -> Blade {
        self.geo(lhs, rhs).filter(|b| b.is_scalar())
    }
}

impl Display for Algebra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G[{}]", self.signature.iter().join(", "))
    }
}

/// Iterates every blade of an algebra in generator-bitmask order.
#[derive(Clone)]
pub struct Blades {
    range: std::ops::RangeInclusive<u32>,
}

impl From<u32> for Blades {
    fn from(dim: u32) -> Self {
        let pseudoscalar = Blade::pseudoscalar(dim);
        Blades {
            range: 0..=pseudoscalar.0,
        }
    }
}

impl Iterator for Blades {
    type Item = Blade;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(Blade)
    }
}

/// Handle on a Clifford algebra.
///
/// Cloning is cheap: the signature and configuration are shared with every multivector the
/// algebra creates. Two handles are compatible when their signatures match, whatever their
/// tolerances.
#[derive(Clone)]
pub struct GeometricAlgebra {
    algebra: Arc<Algebra>,
}

impl GeometricAlgebra {
    /// Euclidean algebra over generators `e0..e(dim-1)`, each squaring to `+1`.
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_signature(std::iter::repeat(Square::Pos).take(dim))
    }

    /// Algebra with one generator per item, `e0` first.
    pub fn with_signature<I: IntoIterator<Item = Square>>(signature: I) -> Result<Self> {
        let signature = signature.into_iter().collect::<Vec<_>>();
        let dim = signature.len();
        if dim < 1 || dim > MAX_DIMENSION {
            return Err(Error::InvalidDimension {
                dim,
                max: MAX_DIMENSION,
            });
        }

        let algebra = Algebra {
            signature,
            config: Config::default(),
        };
        tracing::debug!(dim, signature = %algebra, "constructed geometric algebra");

        Ok(Self {
            algebra: Arc::new(algebra),
        })
    }

    /// The same algebra with different numeric settings.
    ///
    /// Multivectors created before keep the settings they were created with.
    pub fn with_config(&self, config: Config) -> Self {
        let algebra = Algebra {
            signature: self.algebra.signature.clone(),
            config,
        };
        Self {
            algebra: Arc::new(algebra),
        }
    }

    pub fn dim(&self) -> usize {
        self.algebra.signature.len()
    }

    pub fn signature(&self) -> &[Square] {
        &self.algebra.signature
    }

    pub fn config(&self) -> &Config {
        &self.algebra.config
    }

    pub fn tolerance(&self) -> f64 {
        self.algebra.config.tolerance()
    }

    pub fn is_compatible(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.algebra, &other.algebra)
            || self.algebra.signature == other.algebra.signature
    }

    pub(crate) fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(Error::IncompatibleAlgebra {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })
        }
    }

    pub(crate) fn algebra(&self) -> &Algebra {
        &self.algebra
    }
}

impl PartialEq for GeometricAlgebra {
    fn eq(&self, other: &Self) -> bool {
        self.algebra == other.algebra
    }
}

impl std::fmt::Debug for GeometricAlgebra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometricAlgebra")
            .field("signature", &self.algebra.signature)
            .field("tolerance", &self.tolerance())
            .finish()
    }
}

impl Display for GeometricAlgebra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.algebra, f)
    }
}
