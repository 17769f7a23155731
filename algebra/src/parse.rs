use crate::blade::Blade;
use crate::{Algebra, Error, Result};

/// Beyond this many generators indices need more than one digit and are written `e3_11`.
const SINGLE_DIGIT_DIM: u32 = 10;

impl Algebra {
    /// `s` for the scalar, otherwise `e` followed by the generator indices in ascending order.
    pub(crate) fn blade_name(&self, blade: Blade) -> String {
        if blade.grade() == 0 {
            return String::from("s");
        }

        let mut output = String::from("e");
        if self.dim() <= SINGLE_DIGIT_DIM {
            for i in blade.generators() {
                output.push_str(&i.to_string());
            }
        } else {
            let indices = blade.generators().map(|i| i.to_string()).collect::<Vec<_>>();
            output.push_str(&indices.join("_"));
        }
        output
    }

    /// Reads a blade name back into a signed blade.
    ///
    /// Generators may be listed in any order, `e10` gives `-e01`. Repeating a generator is an
    /// error since the result would no longer be a basis blade.
    pub(crate) fn parse_blade(&self, name: &str) -> Result<Blade> {
        let unknown = || Error::UnknownBlade {
            name: name.to_owned(),
            dim: self.dim() as usize,
        };

        if name == "s" {
            return Ok(Blade::scalar());
        }

        let indices = name.strip_prefix('e').ok_or_else(unknown)?;
        if indices.is_empty() {
            return Err(unknown());
        }

        let indices: Vec<u32> = if indices.contains('_') {
            indices
                .split('_')
                .map(|i| parse_index(i).ok_or_else(unknown))
                .collect::<Result<_>>()?
        } else if self.dim() <= SINGLE_DIGIT_DIM {
            indices
                .chars()
                .map(|c| c.to_digit(10).ok_or_else(unknown))
                .collect::<Result<_>>()?
        } else {
            vec![parse_index(indices).ok_or_else(unknown)?]
        };

        let mut blade = Blade::scalar();
        for i in indices {
            if i >= self.dim() || blade.contains(i) {
                return Err(unknown());
            }
            blade = blade.product(Blade::generator(i));
        }
        Ok(blade)
    }
}

/// A generator index written in decimal without sign or leading zeros, so `e01` in a large
/// algebra is rejected rather than read as `e1`.
fn parse_index(token: &str) -> Option<u32> {
    let canonical = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if canonical {
        token.parse().ok()
    } else {
        None
    }
}
