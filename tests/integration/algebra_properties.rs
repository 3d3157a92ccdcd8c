use approx::assert_abs_diff_eq;
use numerics::{Matrix4x4, NumericsError, Quaternion, Vector3, Vector4};
use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

fn invertible_samples() -> Vec<Matrix4x4> {
    vec![
        Matrix4x4::identity(),
        Matrix4x4::new(
            6.0, 1.0, 1.0, 4.0,
            4.0, 2.0, 2.0, 4.0,
            3.0, 4.0, 2.0, 3.0,
            4.0, 4.0, 2.0, 3.0,
        ),
        Matrix4x4::for_translation_rotation_scale(
            Vector3::new(10.0, -4.0, 2.5),
            Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), FRAC_PI_3),
            Vector3::new(0.5, 2.0, 3.0),
        ),
        Matrix4x4::for_perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0),
        Matrix4x4::for_ortho(-8.0, 8.0, -4.5, 4.5, 0.1, 50.0),
        Matrix4x4::for_rotation(Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 2.0)),
    ]
}

fn arbitrary_samples() -> Vec<Matrix4x4> {
    let mut samples = invertible_samples();
    samples.push(Matrix4x4::zero());
    samples.push(Matrix4x4::from_cols_array([
        -0.0, 1.5, f32::MAX, 3.25,
        1e-30, -7.0, 0.1, 8.0,
        9.0, f32::MIN_POSITIVE, 11.0, -12.5,
        13.0, 14.0, -15.0, 16.0,
    ]));
    samples
}

#[test]
fn test_transpose_is_an_exact_involution() {
    for m in arbitrary_samples() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn test_transpose_swaps_rows_and_columns() {
    for m in arbitrary_samples() {
        let t = m.transpose();
        for i in 0..4 {
            assert_eq!(t.row(i).unwrap(), m.column(i).unwrap());
            assert_eq!(t.column(i).unwrap(), m.row(i).unwrap());
        }
    }
}

#[test]
fn test_identity_is_neutral_for_multiplication() {
    let id = Matrix4x4::identity();
    for m in invertible_samples() {
        assert_eq!(m * id, m);
        assert_eq!(id * m, m);
    }
}

#[test]
fn test_inverse_recovers_identity() {
    let id = Matrix4x4::identity();
    for m in invertible_samples() {
        let inv = m.inverse();
        assert!(inv.is_finite());
        assert_abs_diff_eq!(m * inv, id, epsilon = 1e-4);
        assert_abs_diff_eq!(inv * m, id, epsilon = 1e-4);
    }
}

#[test]
fn test_determinant_of_identity_is_one() {
    assert_eq!(Matrix4x4::<f32>::identity().determinant(), 1.0);
    assert_eq!(Matrix4x4::<f64>::identity().determinant(), 1.0);
}

#[test]
fn test_determinant_is_multiplicative() {
    let samples = invertible_samples();
    let a = samples[1];
    let b = samples[2];
    let expected = a.determinant() * b.determinant();
    assert_abs_diff_eq!((a * b).determinant(), expected, epsilon = 1e-3);
}

#[test]
fn test_determinant_of_transpose_matches() {
    for m in invertible_samples() {
        assert_abs_diff_eq!(m.transpose().determinant(), m.determinant(), epsilon = 1e-4);
    }
}

#[test]
fn test_multiplication_is_associative() {
    let samples = invertible_samples();
    let (a, b, c) = (samples[1], samples[2], samples[5]);
    assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-3);
}

#[test]
fn test_multiplication_is_not_commutative() {
    let samples = invertible_samples();
    let (a, b) = (samples[1], samples[2]);
    assert_ne!(a * b, b * a);
}

#[test]
fn test_scalar_and_negation() {
    for m in arbitrary_samples() {
        assert_eq!(-(-m), m);
        assert_eq!(m * -1.0, -m);
        assert_eq!(m * 1.0, m);
    }
}

#[test]
fn test_matrix_vector_product_uses_column_vectors() {
    let m = Matrix4x4::from_cols_array([
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ]);
    // Picking a basis vector returns the matching column.
    for i in 0..4 {
        let mut basis = [0.0f32; 4];
        basis[i] = 1.0;
        assert_eq!(m * Vector4::from(basis), m.column(i).unwrap());
    }
    assert_eq!(
        m * Vector4::new(1.0, 1.0, 1.0, 1.0),
        Vector4::new(28.0, 32.0, 36.0, 40.0)
    );
}

#[test]
fn test_normal_matrix_keeps_normals_perpendicular() {
    let m: Matrix4x4 = Matrix4x4::for_scale(Vector3::new(1.0, 4.0, 1.0));
    let tangent = Vector3::new(1.0, 1.0, 0.0);
    let normal = Vector3::new(1.0, -1.0, 0.0);

    let t = m.transform_vector(tangent);
    let n = m.normal_matrix().transform_vector(normal);
    assert_abs_diff_eq!(t.dot(&n), 0.0, epsilon = 1e-6);

    // Transforming with the model matrix itself would break perpendicularity.
    assert!(t.dot(&m.transform_vector(normal)).abs() > 1.0);
}

#[test]
fn test_columns_rebuild_the_matrix_exactly() {
    for m in arbitrary_samples() {
        let rebuilt = Matrix4x4::from_columns(
            m.column(0).unwrap(),
            m.column(1).unwrap(),
            m.column(2).unwrap(),
            m.column(3).unwrap(),
        );
        assert_eq!(rebuilt.to_cols_array().map(f32::to_bits), m.to_cols_array().map(f32::to_bits));
    }
}

#[test]
fn test_out_of_range_accessors_fail() {
    let m = Matrix4x4::<f32>::identity();
    for index in [4, 5, 16, usize::MAX] {
        assert!(matches!(
            m.row(index),
            Err(NumericsError::IndexOutOfRange { axis: "row", .. })
        ));
        assert!(matches!(
            m.column(index),
            Err(NumericsError::IndexOutOfRange { axis: "column", .. })
        ));
    }

    let err = m.column(4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "column index 4 is out of range for a 4x4 matrix (expected 0..=3)"
    );
}

#[test]
fn test_singular_inverse_propagates_non_finite_values() {
    let singular = Matrix4x4::from_cols_array([
        1.0, 2.0, 3.0, 4.0,
        2.0, 4.0, 6.0, 8.0,
        0.0, 1.0, 0.0, 1.0,
        5.0, 5.0, 5.0, 5.0,
    ]);
    assert_eq!(singular.determinant(), 0.0);
    assert!(!singular.inverse().is_finite());
    assert!(!singular.transpose().normal_matrix().is_finite());
}
