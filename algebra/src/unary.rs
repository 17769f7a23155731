use strum::EnumIter;

use crate::blade::Blade;

/// Sign-flipping automorphisms of the algebra, each its own inverse.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, EnumIter, Hash)]
pub enum Involution {
    /// Negates the odd grades.
    GradeInvolution,
    /// Reverses the order of the generators in every blade.
    Reverse,
    /// Reverse composed with the grade involution.
    CliffordConjugate,
}

impl Involution {
    pub fn apply(self, blade: Blade) -> Blade {
        match self {
            Involution::GradeInvolution => blade.grade_involution(),
            Involution::Reverse => blade.rev(),
            Involution::CliffordConjugate => blade.clifford_conjugate(),
        }
    }
}
