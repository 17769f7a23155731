use std::collections::HashMap;

use crate::blade::Blade;
use crate::{Error, GeometricAlgebra, Multivector, Result};

impl GeometricAlgebra {
    pub fn zero(&self) -> Multivector {
        Multivector::from_parts(self.clone(), vec![0.0; self.algebra().len()])
    }

    pub fn scalar(&self, value: f64) -> Multivector {
        Multivector::from_blade(self, Blade::scalar(), value)
    }

    /// The grade-1 multivector `components[0] * e0 + components[1] * e1 + ...`.
    pub fn vector(&self, components: &[f64]) -> Result<Multivector> {
        if components.len() != self.dim() {
            return Err(Error::IncompatibleAlgebra {
                lhs: self.to_string(),
                rhs: format!("vector of {} components", components.len()),
            });
        }

        let mut coefficients = vec![0.0; self.algebra().len()];
        for (i, value) in components.iter().enumerate() {
            coefficients[Blade::generator(i as u32)] = *value;
        }
        Ok(Multivector::from_parts(self.clone(), coefficients))
    }

    /// Builds a multivector from one coefficient per blade, indexed by generator bitmask.
    pub fn from_coefficients(&self, coefficients: Vec<f64>) -> Result<Multivector> {
        if coefficients.len() != self.algebra().len() {
            return Err(Error::IncompatibleAlgebra {
                lhs: self.to_string(),
                rhs: format!("{} coefficients", coefficients.len()),
            });
        }
        Ok(Multivector::from_parts(self.clone(), coefficients))
    }

    /// The generator `e_i`.
    pub fn generator(&self, i: usize) -> Result<Multivector> {
        if i >= self.dim() {
            return Err(Error::UnknownBlade {
                name: format!("e{i}"),
                dim: self.dim(),
            });
        }
        Ok(Multivector::from_blade(self, Blade::generator(i as u32), 1.0))
    }

    pub fn pseudoscalar(&self) -> Multivector {
        Multivector::from_blade(self, self.algebra().pseudoscalar(), 1.0)
    }

    /// Looks up a basis blade by name, see [`BasisBlades`] for the naming scheme.
    pub fn blade(&self, name: &str) -> Result<Multivector> {
        let blade = self.algebra().parse_blade(name)?;
        Ok(Multivector::from_blade(self, blade, 1.0))
    }

    /// Every basis blade of the algebra, keyed by name.
    pub fn blades(&self) -> BasisBlades {
        let algebra = self.algebra();
        let entries = algebra
            .blades_by_grade()
            .map(|blade| {
                let name = algebra.blade_name(blade);
                (name, Multivector::from_blade(self, blade, 1.0))
            })
            .collect::<Vec<_>>();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        BasisBlades { entries, index }
    }
}

/// The basis blades of an algebra, from the scalar unit `s` to the pseudoscalar.
///
/// Blades are named `e` followed by their generator indices in ascending order: `e0`, `e12`,
/// `e012`. Past ten generators the indices are separated by underscores: `e3_11`.
#[derive(Debug, Clone)]
pub struct BasisBlades {
    entries: Vec<(String, Multivector)>,
    index: HashMap<String, usize>,
}

impl BasisBlades {
    pub fn get(&self, name: &str) -> Option<&Multivector> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Blades sorted by grade, then by generator set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Multivector)> {
        self.entries.iter().map(|(name, mv)| (name.as_str(), mv))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// # Panics
///
/// Panics if no blade has this name.
impl std::ops::Index<&str> for BasisBlades {
    type Output = Multivector;

    fn index(&self, name: &str) -> &Multivector {
        self.get(name)
            .unwrap_or_else(|| panic!("no basis blade named '{name}'"))
    }
}

impl IntoIterator for BasisBlades {
    type Item = (String, Multivector);
    type IntoIter = std::vec::IntoIter<(String, Multivector)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
