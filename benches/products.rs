use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gscrew::{GeometricAlgebra, Screw, ScrewBase, Square};

criterion_main! { products }
criterion_group! { products, geometric_product, screw_wedge }

fn geometric_product(crit: &mut Criterion) {
    let signature = [Square::Zero, Square::Pos, Square::Pos, Square::Pos];
    let pga = GeometricAlgebra::with_signature(signature).unwrap();
    let e = pga.blades();

    let a = 1. + &e["e12"] + 2. * &e["e03"];
    let b = &e["e1"] - 3. * &e["e23"] + &e["e0123"];

    crit.bench_function("geometric_product_pga_3d", |bench| {
        bench.iter(|| {
            black_box(&a * &b);
        })
    });

    let ga = GeometricAlgebra::new(8).unwrap();
    let x = ga.from_coefficients((0..256).map(|i| i as f64).collect()).unwrap();
    let y = ga.from_coefficients((0..256).map(|i| (256 - i) as f64).collect()).unwrap();

    crit.bench_function("geometric_product_dense_8d", |bench| {
        bench.iter(|| {
            black_box(&x * &y);
        })
    });
}

fn screw_wedge(crit: &mut Criterion) {
    let ga = GeometricAlgebra::new(3).unwrap();
    let e = ga.blades();

    let screw = Screw::new(&e["e1"] + &e["e2"], e["e0"].clone(), 2. * &e["e2"]).unwrap();
    let moved = screw.change_point(&(&e["e1"] - &e["e2"])).unwrap();

    crit.bench_function("screw_wedge", |bench| {
        bench.iter(|| {
            black_box(&screw ^ &moved);
        })
    });
}
