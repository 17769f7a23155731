//! The wedge of a screw with the same screw reduced elsewhere vanishes.

use gscrew::{GeometricAlgebra, Screw, ScrewBase};

fn main() -> gscrew::Result<()> {
    let ga = GeometricAlgebra::new(3)?;
    let e = ga.blades();

    let a = &e["e1"] + &e["e2"];
    let b = &e["e1"] - &e["e2"];

    let screw1 = Screw::new(a, e["e0"].clone(), 2. * &e["e2"])?;
    let screw2 = screw1.change_point(&b)?;

    println!("screw1 = {screw1}");
    println!("screw1 at B = {}", screw1.show(Some(&b))?);
    println!("screw2 = {screw2}");

    let wedge = screw1.checked_wedge(&screw2)?;
    println!("screw1 ^ screw2 = {wedge}");
    println!("zero: {}", wedge.is_zero());

    Ok(())
}
