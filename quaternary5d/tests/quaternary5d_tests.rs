use quaternary5d::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random5d(rng: &mut StdRng, shape: Shape5D) -> Array5D<f64> {
    filled5d_by(shape, |_| rng.gen_range(-1.0..1.0))
}

fn at<T: Copy>(a: &Array5D<T>, [i0, i1, i2, i3, i4]: IndexPath5D) -> T {
    a[i0][i1][i2][i3][i4]
}

#[test]
fn test_documented_example() {
    let shape = [1, 1, 1, 2, 2];

    let x: Array5D<f64> = ones5d(shape);
    let y: Array5D<f64> = ones5d(shape);
    let z: Array5D<f64> = ones5d(shape);
    let w: Array5D<f64> = ones5d(shape);
    let mut out: Array5D<f64> = zeros5d(shape);

    quaternary5d((&x, &y, &z, &w, &mut out), shape, add4);

    assert_eq!(out, vec![vec![vec![vec![vec![4.0, 4.0], vec![4.0, 4.0]]]]]);
    assert_eq!(shape5d_of(&out), shape);
}

#[test]
fn test_call_count_matches_num_elements() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..20 {
        let shape: Shape5D = core::array::from_fn(|_| rng.gen_range(0..4));
        let x: Array5D<u8> = zeros5d(shape);
        let mut out: Array5D<u8> = zeros5d(shape);
        let mut calls = 0;
        quaternary5d((&x, &x, &x, &x, &mut out), shape, |_, _, _, _| {
            calls += 1;
            0
        });
        assert_eq!(calls, num_elements(shape), "shape = {shape:?}");
    }
}

#[test]
fn test_random_inputs_correspond_by_index() {
    let mut rng = StdRng::seed_from_u64(432);
    let shape = [3, 2, 4, 2, 3];
    let x = random5d(&mut rng, shape);
    let y = random5d(&mut rng, shape);
    let z = random5d(&mut rng, shape);
    let w = random5d(&mut rng, shape);
    let mut out: Array5D<f64> = zeros5d(shape);

    quaternary5d((&x, &y, &z, &w, &mut out), shape, |a, b, c, d| a * b - c * d);

    for p in index_paths(shape) {
        let expected = at(&x, p) * at(&y, p) - at(&z, p) * at(&w, p);
        assert_eq!(at(&out, p), expected, "index path = {p:?}");
    }
}

#[test]
fn test_zero_dimension_is_noop() {
    let shape = [4, 3, 0, 2, 1];
    let x: Array5D<f32> = ones5d(shape);
    let mut out: Array5D<f32> = zeros5d(shape);
    let before = out.clone();
    let mut called = false;
    quaternary5d((&x, &x, &x, &x, &mut out), shape, |_, _, _, _| {
        called = true;
        1.0
    });
    assert!(!called);
    assert_eq!(out, before);
}

#[test]
fn test_repeated_application_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let shape = [2, 2, 3, 1, 4];
    let x = random5d(&mut rng, shape);
    let y = random5d(&mut rng, shape);
    let z = random5d(&mut rng, shape);
    let w = random5d(&mut rng, shape);

    let mut out: Array5D<f64> = zeros5d(shape);
    quaternary5d((&x, &y, &z, &w, &mut out), shape, add4);
    let first = out.clone();
    quaternary5d((&x, &y, &z, &w, &mut out), shape, add4);
    assert_eq!(out, first);
}

#[test]
fn test_traversal_is_lexicographic() {
    let shape = [2, 3, 2, 1, 3];
    let paths = filled5d_by(shape, |p| p);
    let mut out = filled5d(0usize, shape);
    let mut visited: Vec<IndexPath5D> = Vec::new();
    quaternary5d((&paths, &paths, &paths, &paths, &mut out), shape, |p, _, _, _| {
        visited.push(*p);
        visited.len()
    });

    assert_eq!(visited.len(), num_elements(shape));
    assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(visited[0], [0; 5]);
    assert_eq!(visited[visited.len() - 1], [1, 2, 1, 0, 2]);
    for (i, p) in index_paths(shape).enumerate() {
        assert_eq!(at(&out, p), i + 1);
    }
}

#[test]
fn test_try_quaternary5d_rejects_ragged_output() {
    let shape = [2, 1, 1, 2, 2];
    let x: Array5D<i32> = ones5d(shape);
    let mut out: Array5D<i32> = zeros5d(shape);
    out[1][0][0].push(vec![0, 0]);
    let before = out.clone();

    let err = try_quaternary5d((&x, &x, &x, &x, &mut out), shape, add4).unwrap_err();

    assert_eq!(
        err,
        Error::ShapeMismatch {
            array: 4,
            dim: 3,
            index: [1, 0, 0, 0],
            expected: 2,
            found: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "array 4 has 3 elements at dimension 3 (index [1, 0, 0]), expected 2"
    );
    assert_eq!(out, before);
}

#[test]
fn test_try_quaternary5d_matches_unchecked() {
    let mut rng = StdRng::seed_from_u64(1);
    let shape = [1, 4, 2, 3, 2];
    let x = random5d(&mut rng, shape);
    let y = random5d(&mut rng, shape);
    let z = random5d(&mut rng, shape);
    let w = random5d(&mut rng, shape);

    let mut checked: Array5D<f64> = zeros5d(shape);
    let mut unchecked: Array5D<f64> = zeros5d(shape);
    try_quaternary5d((&x, &y, &z, &w, &mut checked), shape, add4).unwrap();
    quaternary5d((&x, &y, &z, &w, &mut unchecked), shape, add4);
    assert_eq!(checked, unchecked);
}

#[test]
#[cfg(feature = "std")]
fn test_error_is_std_error() {
    fn takes_err(_: &dyn std::error::Error) {}
    let err = validate5d::<u8, u8, u8, u8, u8>((&[], &[], &[], &[], &[]), [1, 1, 1, 1, 1])
        .unwrap_err();
    takes_err(&err);
}
