use halfdist::{
    KernelError, Operand, decode_vector, distance, distance_f16, distance_scalar, encode_vector,
    f16, l2_distance, try_distance,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn random_vector(rng: &mut fastrand::Rng, dim: usize) -> Vec<f32> {
    (0..dim).map(|_| rng.f32() * 2.0 - 1.0).collect()
}

fn reference(a: &[u8], b: &[u8]) -> f64 {
    decode_vector(a)
        .into_iter()
        .zip(decode_vector(b))
        .map(|(x, y)| (f64::from(x) - f64::from(y)).powi(2))
        .sum()
}

#[test]
fn test_stepped_block_against_ones() {
    let a = encode_vector(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let b = encode_vector(&[1.0; 8]);
    assert_eq!(distance(&a, &b, 8), 140.0);
}

#[test]
fn test_identical_length_11() {
    let mut rng = fastrand::Rng::with_seed(11);
    let a = encode_vector(&random_vector(&mut rng, 11));
    assert_eq!(distance(&a, &a.clone(), 11), 0.0);
}

#[test]
fn test_random_vectors_match_reference() {
    let mut rng = fastrand::Rng::with_seed(42);

    // Common embedding widths plus widths with every residual size.
    let dims = [1, 2, 3, 4, 5, 6, 7, 8, 9, 15, 17, 96, 100, 128, 383, 384, 768, 1000, 1536];
    for dim in dims {
        for _ in 0..8 {
            let a = encode_vector(&random_vector(&mut rng, dim));
            let b = encode_vector(&random_vector(&mut rng, dim));

            let expected = reference(&a, &b);
            let actual = distance(&a, &b, dim);
            let rel = (f64::from(actual) - expected).abs() / expected.max(f64::MIN_POSITIVE);
            assert!(rel < 1e-4, "dim {dim}: kernel {actual} vs reference {expected}");
        }
    }
}

#[test]
fn test_lane_and_sequential_kernels_agree() {
    let mut rng = fastrand::Rng::with_seed(7);
    for dim in [5, 11, 64, 333] {
        let a = encode_vector(&random_vector(&mut rng, dim));
        let b = encode_vector(&random_vector(&mut rng, dim));

        let lanes = distance(&a, &b, dim);
        let scalar = distance_scalar(&a, &b, dim);
        assert!(
            (lanes - scalar).abs() <= scalar * 1e-4,
            "dim {dim}: lanes {lanes} vs scalar {scalar}"
        );
    }
}

#[test]
fn test_typed_and_packed_inputs_agree() {
    let mut rng = fastrand::Rng::with_seed(3);
    let a = random_vector(&mut rng, 203);
    let b = random_vector(&mut rng, 203);

    let halves_a: Vec<f16> = a.iter().copied().map(f16::from_f32).collect();
    let halves_b: Vec<f16> = b.iter().copied().map(f16::from_f32).collect();

    assert_eq!(
        distance_f16(&halves_a, &halves_b).to_bits(),
        distance(&encode_vector(&a), &encode_vector(&b), 203).to_bits()
    );
}

#[test]
fn test_checked_entry_point() -> TestResult {
    let a = encode_vector(&[0.0, 0.0]);
    let b = encode_vector(&[3.0, 4.0]);

    let squared = try_distance(&a, &b, 2)?;
    assert_eq!(squared, 25.0);
    assert_eq!(l2_distance(&a, &b, 2), 5.0);

    match try_distance(&a, &b, 3) {
        Err(KernelError::BufferTooShort {
            operand,
            required,
            actual,
        }) => {
            assert_eq!(operand, Operand::First);
            assert_eq!(required, 6);
            assert_eq!(actual, 4);
        }
        other => panic!("Expected BufferTooShort error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_concurrent_callers() {
    let mut rng = fastrand::Rng::with_seed(99);
    let a = encode_vector(&random_vector(&mut rng, 384));
    let b = encode_vector(&random_vector(&mut rng, 384));
    let expected = distance(&a, &b, 384);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(distance(&a, &b, 384).to_bits(), expected.to_bits());
                }
            });
        }
    });
}
