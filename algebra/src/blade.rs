use crate::IsEven;

/// A signed basis blade.
///
/// Bit `i` is set when generator `e_i` is a factor of the blade. Bit 31 carries the sign and
/// bit 30 marks the zero blade, which absorbs every product.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blade(pub u32);

impl std::fmt::Debug for Blade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "Blade(0)");
        }
        let sign = if self.is_positive() { '+' } else { '-' };
        write!(f, "Blade({sign}{:06b})", self.bits())
    }
}

impl Ord for Blade {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.unsigned().0.cmp(&other.unsigned().0) {
            std::cmp::Ordering::Equal => match (self.is_negative(), other.is_negative()) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                (true, true) | (false, false) => std::cmp::Ordering::Equal,
            },
            cmp => cmp,
        }
    }
}

impl PartialOrd for Blade {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Blade {
    const SIGN: u32 = 1 << 31;
    const ZERO: u32 = 1 << 30;

    /// Largest number of generators a blade can hold.
    pub const MAX_GENERATORS: u32 = 30;

    pub const fn scalar() -> Self {
        Self(0)
    }

    pub const fn zero() -> Self {
        Self(Self::ZERO)
    }

    /// The grade-1 blade `e_i`.
    pub const fn generator(i: u32) -> Self {
        Self(1 << i)
    }

    pub fn pseudoscalar(dim: u32) -> Self {
        let inverse = u32::MAX << dim;
        Blade(!inverse)
    }

    pub fn filter<F: FnOnce(Self) -> bool>(self, f: F) -> Blade {
        if self.is_zero() {
            return self;
        }

        if f(self) {
            self
        } else {
            Blade::zero()
        }
    }

    /// Sign picked up when the order of the generators is reversed: `(-1)^(k(k-1)/2)`.
    pub fn rev(self) -> Self {
        let half = self.grade() / 2;
        if half.is_even() {
            self
        } else {
            -self
        }
    }

    pub fn grade_involution(self) -> Self {
        if self.grade().is_even() {
            self
        } else {
            -self
        }
    }

    pub fn clifford_conjugate(self) -> Self {
        self.rev().grade_involution()
    }

    pub fn unsigned(self) -> Self {
        Blade(self.0 & !Self::SIGN)
    }

    pub const fn is_positive(self) -> bool {
        self.0 & Self::SIGN != Self::SIGN && !self.is_zero()
    }

    pub const fn is_negative(self) -> bool {
        self.0 & Self::SIGN == Self::SIGN && !self.is_zero()
    }

    pub const fn is_zero(self) -> bool {
        self.0 & Self::ZERO == Self::ZERO
    }

    pub fn is_scalar(self) -> bool {
        self == Blade(0)
    }

    /// The generator set, stripped of sign and zero flags.
    pub const fn bits(self) -> u32 {
        self.0 & !(Self::SIGN | Self::ZERO)
    }

    /// Position of the blade in a dense coefficient array.
    pub const fn index(self) -> usize {
        self.bits() as usize
    }

    /// The sign of the blade as a coefficient factor, `0.0` for the zero blade.
    pub fn signum(self) -> f64 {
        if self.is_zero() {
            0.0
        } else if self.is_negative() {
            -1.0
        } else {
            1.0
        }
    }

    pub fn grade(self) -> u32 {
        self.bits().count_ones()
    }

    pub fn contains(self, i: u32) -> bool {
        let flag = 1 << i;
        self.0 & flag == flag
    }

    /// Indices of the generators in ascending order.
    pub fn generators(self) -> impl Iterator<Item = u32> {
        let bits = self.bits();
        (0..Self::MAX_GENERATORS).filter(move |i| bits & (1 << i) != 0)
    }

    /// Product of two blades assuming every generator squares to one.
    ///
    /// The sign is the parity of the transpositions needed to sort the concatenated generators
    /// into ascending order. Repeated generators cancel; callers apply the actual squares.
    pub fn product(self, rhs: Self) -> Self {
        if (self | rhs).is_zero() {
            return Self::zero();
        }

        let lhs_bits = self.bits();
        let rhs_bits = rhs.bits();
        let sign = (self.0 ^ rhs.0) & Self::SIGN;
        let output = Blade((lhs_bits ^ rhs_bits) | sign);

        if Self::swaps(lhs_bits, rhs_bits).is_even() {
            output
        } else {
            -output
        }
    }

    /// Counts, for every generator of `rhs`, the generators of `lhs` it has to move past.
    fn swaps(lhs: u32, rhs: u32) -> u32 {
        let mut lhs = lhs >> 1;
        let mut count = 0;
        while lhs != 0 {
            count += (lhs & rhs).count_ones();
            lhs >>= 1;
        }
        count
    }
}

impl std::ops::Neg for Blade {
    type Output = Self;
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self(self.0 ^ Self::SIGN)
        }
    }
}

impl std::ops::BitOr for Blade {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Blade {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::Index<Blade> for Vec<f64> {
    type Output = f64;

    fn index(&self, index: Blade) -> &Self::Output {
        self.index(index.index())
    }
}

impl std::ops::IndexMut<Blade> for Vec<f64> {
    fn index_mut(&mut self, index: Blade) -> &mut Self::Output {
        self.index_mut(index.index())
    }
}
