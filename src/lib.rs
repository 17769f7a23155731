//! Generalized mechanical screws over geometric algebra multivectors.
//!
//! A [`Screw`] pairs a direction with a moment expressed at a reference point, a [`CoScrew`] is
//! its dual, and [`comoment`] pairs the two into a scalar.
//!
//! ```
//! use gscrew::{GeometricAlgebra, Screw, ScrewBase};
//!
//! let ga = GeometricAlgebra::new(3)?;
//! let e = ga.blades();
//! let a = &e["e1"] + &e["e2"];
//! let b = &e["e1"] - &e["e2"];
//!
//! let screw = Screw::new(a, e["e0"].clone(), 2.0 * &e["e2"])?;
//! let moved = screw.change_point(&b)?;
//! assert!((&screw ^ &moved).is_zero());
//! # Ok::<(), gscrew::Error>(())
//! ```

mod error;
mod screw;

pub use algebra::blade;
pub use algebra::Error as AlgebraError;
pub use algebra::{
    BasisBlades, Config, GeometricAlgebra, Involution, Multivector, Product, Square,
    DEFAULT_TOLERANCE, MAX_DIMENSION,
};

pub use crate::error::{Error, Result};
pub use crate::screw::{comoment, CoScrew, Screw, ScrewBase};
