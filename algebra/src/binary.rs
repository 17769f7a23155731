use strum::EnumIter;

use crate::blade::Blade;
use crate::Algebra;

/// Bilinear products, each defined blade by blade and extended to multivectors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, EnumIter, Hash)]
pub enum Product {
    Geometric,
    /// Grade `lhs + rhs` part of the geometric product.
    Wedge,
    /// Grade `rhs - lhs` part, zero when `lhs` has the higher grade.
    LeftContraction,
    /// Grade `lhs - rhs` part, zero when `rhs` has the higher grade.
    RightContraction,
    /// Grade `|lhs - rhs|` part.
    Dot,
    /// Grade 0 part.
    Scalar,
}

impl Product {
    pub(crate) fn apply(self, algebra: &Algebra, lhs: Blade, rhs: Blade) -> Blade {
        match self {
            Product::Geometric => algebra.geo(lhs, rhs),
            Product::Wedge => algebra.wedge(lhs, rhs),
            Product::LeftContraction => algebra.left_con(lhs, rhs),
            Product::RightContraction => algebra.right_con(lhs, rhs),
            Product::Dot => algebra.dot(lhs, rhs),
            Product::Scalar => algebra.scalar_product(lhs, rhs),
        }
    }

    pub fn is_associative(self) -> bool {
        matches!(self, Product::Geometric | Product::Wedge)
    }
}
