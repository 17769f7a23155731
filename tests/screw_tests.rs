use approx::assert_abs_diff_eq;
use gscrew::*;
use rand::{thread_rng, Rng};

fn ga_3d() -> (GeometricAlgebra, BasisBlades) {
    let ga = GeometricAlgebra::new(3).unwrap();
    let blades = ga.blades();
    (ga, blades)
}

/// Integer coefficients keep the transported moments exact.
fn random_mv(ga: &GeometricAlgebra, rng: &mut impl Rng) -> Multivector {
    let len = 1 << ga.dim();
    let coefficients = (0..len).map(|_| rng.gen_range(-5..=5) as f64).collect();
    ga.from_coefficients(coefficients).unwrap()
}

fn random_point(ga: &GeometricAlgebra, rng: &mut impl Rng) -> Multivector {
    let components = (0..ga.dim())
        .map(|_| rng.gen_range(-5..=5) as f64)
        .collect::<Vec<_>>();
    ga.vector(&components).unwrap()
}

#[test]
fn zero_screw() {
    let (_, e) = ga_3d();
    let a = &e["e1"] + &e["e2"];
    let b = &e["e1"] - &e["e2"];

    let screw1 = Screw::new(a, e["e0"].clone(), 2. * &e["e2"]).unwrap();
    let screw2 = screw1.change_point(&b).unwrap();

    let wedge = &screw1 ^ &screw2;
    assert!(wedge.is_zero(), "{wedge}");
}

#[test]
fn wedge_with_itself() {
    let (ga, e) = ga_3d();
    let point = ga.vector(&[1., -2., 3.]).unwrap();
    let direction = ga.vector(&[2., 1., 0.]).unwrap();
    let moment = &point ^ &direction;

    let screw = Screw::new(ga.zero(), direction, moment).unwrap();
    let elsewhere = screw.change_point(&(5. * &e["e2"])).unwrap();

    assert!((&screw ^ &screw).is_zero());
    assert!((&screw ^ &elsewhere).is_zero());
    assert!((&elsewhere ^ &screw).is_zero());
}

#[test]
fn wedge_is_reduced_at_lhs_point() {
    let (ga, e) = ga_3d();
    let lhs = Screw::new(e["e0"].clone(), e["e1"].clone(), ga.zero()).unwrap();
    let rhs = Screw::new(ga.zero(), e["e2"].clone(), e["e0"].clone()).unwrap();

    let wedge = lhs.checked_wedge(&rhs).unwrap();

    // rhs at e0: moment e0 - e0 ^ e2
    assert_eq!(&e["e0"], wedge.ref_point());
    assert_eq!(e["e1"].clone() ^ (&e["e0"] - &e["e02"]), *wedge.direction());
    assert!(wedge.moment().is_zero());
}

#[test]
fn change_point_moves_moment() {
    let (ga, e) = ga_3d();
    let screw = Screw::new(ga.zero(), e["e0"].clone(), ga.zero()).unwrap();

    let moved = screw.change_point(&e["e1"]).unwrap();

    assert_eq!(&e["e1"], moved.ref_point());
    assert_eq!(&e["e0"], moved.direction());
    assert_eq!(e["e01"], *moved.moment());
}

#[test]
fn change_point_matches_vector_form() {
    let (ga, _) = ga_3d();
    let p = ga.vector(&[1., 2., 3.]).unwrap();
    let q = ga.vector(&[-4., 0., 2.]).unwrap();
    let s = ga.vector(&[0., 1., -1.]).unwrap();
    let m = ga.vector(&[3., 3., 0.]).unwrap() ^ ga.vector(&[0., 0., 1.]).unwrap();

    let screw = Screw::new(p.clone(), s.clone(), m.clone()).unwrap();
    let moved = screw.change_point(&q).unwrap();

    assert_abs_diff_eq!(m + (&s ^ (&q - &p)), moved.moment().clone());
}

#[test]
fn change_point_round_trip() {
    let (ga, e) = ga_3d();
    let p = ga.vector(&[1., 0., 2.]).unwrap();
    let q = ga.vector(&[-3., 5., 1.]).unwrap();
    let screw = Screw::new(
        p.clone(),
        &e["e0"] + 2. * &e["e12"],
        3. + &e["e1"] - &e["e02"],
    )
    .unwrap();

    let at_q = screw.change_point(&q).unwrap();

    let direct = screw.change_point(&e["e2"]).unwrap();
    let through_q = at_q.change_point(&e["e2"]).unwrap();
    assert_abs_diff_eq!(direct, through_q);

    let back = at_q.change_point(&p).unwrap();
    assert_abs_diff_eq!(screw, back);
}

#[test]
fn random_transports() {
    let (ga, _) = ga_3d();
    let mut rng = thread_rng();

    for _ in 0..100 {
        let p = random_point(&ga, &mut rng);
        let q = random_point(&ga, &mut rng);
        let r = random_point(&ga, &mut rng);
        let direction = random_mv(&ga, &mut rng);
        let moment = random_mv(&ga, &mut rng);
        let screw = Screw::new(p.clone(), direction, moment).unwrap();

        let at_q = screw.change_point(&q).unwrap();
        assert_eq!(screw.direction(), at_q.direction());
        assert_eq!(screw, at_q.change_point(&p).unwrap());
        assert_eq!(
            screw.change_point(&r).unwrap(),
            at_q.change_point(&r).unwrap()
        );
    }
}

#[test]
fn change_point_keeps_direction() {
    let (ga, e) = ga_3d();
    let direction = &e["e0"] - 4. * &e["e12"];
    let screw = CoScrew::new(ga.zero(), direction.clone(), e["e1"].clone()).unwrap();

    let moved = screw.change_point(&ga.vector(&[7., -1., 2.]).unwrap()).unwrap();
    assert_eq!(&direction, moved.direction());
}

#[test]
fn zero_direction() {
    let (ga, e) = ga_3d();
    let screw = Screw::new(e["e0"].clone(), ga.zero(), 2. * &e["e12"]).unwrap();

    let moved = screw.change_point(&e["e2"]).unwrap();
    assert_eq!(screw.moment(), moved.moment());

    let coscrew = CoScrew::new(ga.zero(), ga.zero(), ga.zero()).unwrap();
    let value = comoment(&coscrew, &screw).unwrap();
    assert!(value.is_finite());
    assert_eq!(0., value);
}

#[test]
fn show_at_other_point() {
    let (ga, e) = ga_3d();
    let screw = Screw::new(ga.zero(), e["e0"].clone(), 2. * &e["e12"]).unwrap();

    assert_eq!(
        "Screw(\n\tdirection=e0\n\tmoment=2*e12\n)",
        screw.show(None).unwrap()
    );
    assert_eq!(screw.to_string(), screw.show(None).unwrap());
    assert_eq!(
        "Screw(\n\tdirection=e0\n\tmoment=e01 + 2*e12\n)",
        screw.show(Some(&e["e1"])).unwrap()
    );
    // showing does not move the screw
    assert!(screw.ref_point().is_zero());
}

#[test]
fn coscrew_display() {
    let (_, e) = ga_3d();
    let coscrew = CoScrew::new(e["e2"].clone(), -&e["e1"], 0.5 * &e["e0"]).unwrap();
    assert_eq!(
        "CoScrew(\n\tdirection=-e1\n\tmoment=0.5*e0\n)",
        coscrew.to_string()
    );
}

#[test]
fn point_must_be_a_vector() {
    let (ga, e) = ga_3d();

    let err = Screw::new(e["e12"].clone(), e["e0"].clone(), ga.zero()).unwrap_err();
    assert_eq!(
        Error::NotAPoint {
            point: String::from("e12")
        },
        err
    );

    let screw = Screw::new(ga.zero(), e["e0"].clone(), ga.zero()).unwrap();
    assert!(matches!(
        screw.change_point(&(1. + &e["e1"])),
        Err(Error::NotAPoint { .. })
    ));
}

#[test]
fn point_within_tolerance() {
    let (_, e) = ga_3d();
    let nearly = &e["e1"] + 1e-12 * &e["e12"];
    assert!(Screw::new(nearly, e["e0"].clone(), e["e1"].clone()).is_ok());
}

#[test]
fn incompatible_parts() {
    let (ga, e) = ga_3d();
    let other = GeometricAlgebra::new(2).unwrap();

    let err = Screw::new(ga.zero(), other.scalar(1.), ga.zero()).unwrap_err();
    assert!(matches!(
        err,
        Error::Algebra(AlgebraError::IncompatibleAlgebra { .. })
    ));

    let screw = Screw::new(ga.zero(), e["e0"].clone(), ga.zero()).unwrap();
    let foreign = Screw::new(other.zero(), other.scalar(1.), other.zero()).unwrap();
    assert!(screw.checked_wedge(&foreign).is_err());
    assert!(screw.checked_add(&foreign).is_err());
}

#[test]
#[should_panic(expected = "incompatible algebras")]
fn incompatible_wedge_panics() {
    let ga = GeometricAlgebra::new(3).unwrap();
    let other = GeometricAlgebra::new(2).unwrap();
    let screw = Screw::new(ga.zero(), ga.scalar(1.), ga.zero()).unwrap();
    let foreign = Screw::new(other.zero(), other.scalar(1.), other.zero()).unwrap();
    let _ = screw ^ foreign;
}

#[test]
fn tolerance_follows_algebra() {
    let ga = GeometricAlgebra::new(3)
        .unwrap()
        .with_config(Config::new(1e-3).unwrap());
    let e = ga.blades();

    let screw = Screw::new(ga.zero(), 1e-4 * &e["e0"], 1e-5 * &e["e12"]).unwrap();
    assert!(screw.is_zero());
    assert!(!screw.is_zero_within(1e-6));
}

#[test]
fn sum_moves_rhs() {
    let (ga, e) = ga_3d();
    let lhs = Screw::new(ga.zero(), e["e0"].clone(), e["e12"].clone()).unwrap();
    let rhs = Screw::new(e["e1"].clone(), e["e0"].clone(), ga.zero()).unwrap();

    let sum = &lhs + &rhs;

    assert!(sum.ref_point().is_zero());
    assert_eq!(2. * &e["e0"], *sum.direction());
    // rhs at the origin: -(0 - e1) ^ e0 = e1 ^ e0
    assert_eq!(&e["e12"] - &e["e01"], *sum.moment());
}

#[test]
fn scaling_and_negation() {
    let (ga, e) = ga_3d();
    let coscrew = CoScrew::new(e["e2"].clone(), e["e0"].clone(), 2. + &e["e1"]).unwrap();

    let scaled = 3. * &coscrew;
    assert_eq!(coscrew.ref_point(), scaled.ref_point());
    assert_eq!(3. * &e["e0"], *scaled.direction());
    assert_eq!(6. + 3. * &e["e1"], *scaled.moment());

    let cancelled = &coscrew + &(-&coscrew);
    assert!(cancelled.is_zero());
    assert_eq!(ga.zero(), *cancelled.direction());
}

#[test]
fn comoment_value() {
    let (ga, e) = ga_3d();
    let coscrew = CoScrew::new(ga.zero(), e["e1"].clone(), 3. * &e["e0"]).unwrap();
    let screw = Screw::new(ga.zero(), e["e0"].clone(), 2. * &e["e1"]).unwrap();

    // <e0 * 3e0> - <(-e1) * (-2e1)> = 3 - 2
    assert_eq!(1., comoment(&coscrew, &screw).unwrap());
}

#[test]
fn comoment_is_linear_in_coscrew() {
    let (ga, e) = ga_3d();
    let c1 = CoScrew::new(ga.zero(), e["e1"].clone(), 3. * &e["e0"] + &e["e12"]).unwrap();
    let c2 = CoScrew::new(e["e2"].clone(), &e["e0"] - &e["e2"], 2. - &e["e1"]).unwrap();
    let s = Screw::new(e["e1"].clone(), &e["e0"] + &e["e2"], 5. * &e["e1"] + &e["e01"]).unwrap();

    let sum = comoment(&(&c1 + &c2), &s).unwrap();
    let parts = comoment(&c1, &s).unwrap() + comoment(&c2, &s).unwrap();
    assert_abs_diff_eq!(parts, sum, epsilon = 1e-9);

    let scaled = comoment(&(-2. * &c2), &s).unwrap();
    assert_abs_diff_eq!(-2. * comoment(&c2, &s).unwrap(), scaled, epsilon = 1e-9);
}

#[test]
fn comoment_independent_of_common_point() {
    let (ga, e) = ga_3d();
    let c_direction = ga.vector(&[1., 2., 0.]).unwrap();
    let s_direction = ga.vector(&[0., -1., 3.]).unwrap();
    let c = CoScrew::new(e["e0"].clone(), c_direction, 4. - &e["e2"]).unwrap();
    let s = Screw::new(e["e2"].clone(), s_direction, 2. * &e["e0"]).unwrap();

    let expected = comoment(&c, &s).unwrap();
    for point in [ga.zero(), e["e1"].clone(), ga.vector(&[2., -3., 5.]).unwrap()] {
        let c = c.change_point(&point).unwrap();
        let s = s.change_point(&point).unwrap();
        assert_abs_diff_eq!(expected, comoment(&c, &s).unwrap(), epsilon = 1e-9);
    }
}

#[test]
fn projective_screws() {
    let signature = [Square::Zero, Square::Pos, Square::Pos, Square::Pos];
    let ga = GeometricAlgebra::with_signature(signature).unwrap();
    let e = ga.blades();
    let a = &e["e1"] + &e["e2"];
    let b = &e["e1"] - &e["e2"];

    let screw = Screw::new(a, e["e3"].clone(), 2. * &e["e2"]).unwrap();
    let moved = screw.change_point(&b).unwrap();

    assert!((&screw ^ &moved).is_zero());
    assert_eq!(screw.algebra(), moved.algebra());
}

#[test]
fn screws_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Screw>();
    assert_send_sync::<CoScrew>();
}
