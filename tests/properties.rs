//! Algebraic properties checked on seeded random inputs.

use gfx_linalg::*;

const ROUNDS: usize = 200;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix<const N: usize>(rng: &mut Random) -> Matrix<f64, N, N> {
    Matrix::from_columns(std::array::from_fn::<_, N, _>(|_| rng.vector::<f64, N>()))
}

#[test]
fn identity_laws() {
    init_logger();
    let mut rng = Random::with_seed(1);
    for _ in 0..ROUNDS {
        let m = random_matrix::<4>(&mut rng);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);

        let v = rng.vector::<f64, 4>();
        assert_eq!(v + Vector::ZERO, v);
        assert_eq!(Mat4::IDENTITY * v, v);
    }
}

fn check_inverse<const N: usize>(rng: &mut Random) -> anyhow::Result<()> {
    let mut checked = 0;
    while checked < ROUNDS {
        let m = random_matrix::<N>(rng);
        if m.determinant().abs() < 0.05 {
            // Badly conditioned, the round trip loses too much precision.
            continue;
        }

        let inv = m.inverse()?;
        assert_approx_eq!(m * inv, Matrix::IDENTITY).abs(1e-9);
        assert_approx_eq!(inv * m, Matrix::IDENTITY).abs(1e-9);
        checked += 1;
    }
    Ok(())
}

#[test]
fn inverse_round_trip() -> anyhow::Result<()> {
    init_logger();
    let mut rng = Random::with_seed(2);
    check_inverse::<2>(&mut rng)?;
    check_inverse::<3>(&mut rng)?;
    check_inverse::<4>(&mut rng)?;
    Ok(())
}

#[test]
fn transpose_involution() {
    let mut rng = Random::with_seed(3);
    for _ in 0..ROUNDS {
        let m = random_matrix::<3>(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
        assert_approx_eq!(m.transpose().determinant(), m.determinant()).abs(1e-12);
    }
}

#[test]
fn integer_determinant() {
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [4, 3, 1, 7],
        [2, 8, 9, 3],
        [5, 1, 7, 9],
        [8, 3, 1, 5],
    ]);
    assert_eq!(m.determinant(), -2246);
}

#[test]
fn quaternion_matrix_round_trip() -> anyhow::Result<()> {
    init_logger();
    let mut rng = Random::with_seed(4);
    for _ in 0..ROUNDS {
        let q = rng.unit_quat::<f64>();
        let back = Quat::from_rotation_matrix(&q.to_rotation_matrix()?);
        let back = if back.dot(q) < 0.0 { -back } else { back };
        assert_approx_eq!(back, q).abs(1e-9);

        let v = rng.vector::<f64, 3>();
        let rotated = q.to_rotation_matrix()? * v.extend(1.0);
        assert_approx_eq!(rotated.truncate(), q.rotate(v)).abs(1e-12);
    }
    Ok(())
}

#[test]
fn quaternion_slerp() {
    init_logger();
    let mut rng = Random::with_seed(5);
    for _ in 0..ROUNDS {
        let a = rng.unit_quat::<f64>();
        let b = rng.unit_quat::<f64>();
        let t = rng.unit::<f64>();
        assert_approx_eq!(a.slerp(b, t).length(), 1.0).abs(1e-12);

        let b = if a.dot(b) < 0.0 { -b } else { b };
        assert_approx_eq!(a.slerp(b, 0.0), a).abs(1e-9);
        assert_approx_eq!(a.slerp(b, 1.0), b).abs(1e-9);
    }
}

#[test]
fn symmetric_eigen() -> anyhow::Result<()> {
    init_logger();
    let mut rng = Random::with_seed(6);
    for _ in 0..ROUNDS {
        let (a, b, d) = (rng.range(-10.0, 10.0), rng.range(-10.0, 10.0), rng.range(-10.0, 10.0));
        let m = Mat2::from_rows([[a, b], [b, d]]);

        let eigen = m.symmetric_eigen()?;
        assert_approx_eq!(eigen.recompose(), m).abs(1e-9);

        let v0 = eigen.eigenvectors.column(0);
        let v1 = eigen.eigenvectors.column(1);
        assert_approx_eq!(v0.length(), 1.0).abs(1e-12);
        assert_approx_eq!(v1.length(), 1.0).abs(1e-12);
        assert_approx_eq!(v0.dot(v1), 0.0).abs(1e-9);
    }
    Ok(())
}

#[test]
fn symmetric_eigen_large_diagonal() -> anyhow::Result<()> {
    init_logger();
    let mut rng = Random::with_seed(8);
    for _ in 0..ROUNDS {
        let base = rng.range(1e7f32, 1e8);
        let (a, d) = (base + rng.symmetric::<f32>(), base + rng.symmetric::<f32>());
        let b = rng.range(0.001f32, 0.5);
        let m = Mat2f::from_rows([[a, b], [b, d]]);

        let eigen = m.symmetric_eigen()?;
        assert!(!eigen.eigenvalues.as_slice().iter().any(|l| l.is_nan()), "{m:?}");
        let v0 = eigen.eigenvectors.column(0);
        let v1 = eigen.eigenvectors.column(1);
        assert_approx_eq!(v0.length(), 1.0).abs(1e-5);
        assert_approx_eq!(v1.length(), 1.0).abs(1e-5);
        assert_approx_eq!(v0.dot(v1), 0.0).abs(1e-5);
    }
    Ok(())
}

#[test]
fn degenerate_inputs() {
    assert_eq!(Vec3f::ZERO.normalize(), Err(Error::DivisionByZero));

    #[rustfmt::skip]
    let singular = Mat3f::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [1.0, 2.0, 3.0],
    ]);
    assert_eq!(singular.inverse(), Err(Error::SingularMatrix));

    let zero = Quatf::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.normalize(), Err(Error::NormalizeZeroQuaternion));
}

#[test]
fn cross_product_is_perpendicular() {
    let mut rng = Random::with_seed(7);
    for _ in 0..ROUNDS {
        let a = rng.vector::<f64, 3>();
        let b = rng.vector::<f64, 3>();
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0).abs(1e-12);
        assert_approx_eq!(c.dot(b), 0.0).abs(1e-12);
    }
}

#[test]
fn errors_convert_to_anyhow() {
    let result: anyhow::Result<Mat2f> = Mat2f::ZERO.inverse().map_err(Into::into);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), Error::SingularMatrix.to_string());
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::SingularMatrix));
}
