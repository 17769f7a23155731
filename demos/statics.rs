//! Sums loads reduced at different points and pairs them with a screw.

use gscrew::{comoment, CoScrew, GeometricAlgebra, Screw, ScrewBase};

fn main() -> gscrew::Result<()> {
    let ga = GeometricAlgebra::new(3)?;
    let e = ga.blades();
    let origin = ga.zero();

    let velocity = Screw::new(origin.clone(), e["e1"].clone(), ga.zero())?;

    let tip = 2. * &e["e0"];
    let load = CoScrew::new(tip, 5. * &e["e1"], 4. * &e["e1"])?;
    let support = CoScrew::new(e["e0"].clone(), -3. * &e["e1"], -&e["e1"] + &e["e2"])?;

    let total = &load + &support;
    println!("total at the tip = {total}");
    println!("total at the origin = {}", total.show(Some(&origin))?);

    for (name, coscrew) in [("load", &load), ("support", &support), ("total", &total)] {
        println!("comoment of {name}: {:.3}", comoment(coscrew, &velocity)?);
    }

    Ok(())
}
