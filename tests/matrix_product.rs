//! Tests for matrix construction and multiplication

mod common;

use common::matrix;
use puzzlr::error::Error;
use puzzlr::matrix::Matrix;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_rows_round_trip() {
    let m = matrix::<i64>(&[&[1, 2], &[3, 4], &[5, 6]]);
    assert_eq!(m.shape(), [3, 2]);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(m.row(2), &[5, 6]);
}

#[test]
fn test_ragged_rows_are_rejected() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]).unwrap_err();
    match err {
        Error::RaggedMatrix { row, expected, got } => {
            assert_eq!(row, 1);
            assert_eq!(expected, 3);
            assert_eq!(got, 2);
        }
        other => panic!("expected RaggedMatrix, got {:?}", other),
    }
}

// ============================================================================
// Multiplication
// ============================================================================

#[test]
fn test_identity_preserves_any_compatible_matrix() {
    let m = matrix::<f64>(&[&[1.5, -2.0, 0.25], &[0.0, 7.0, 3.5]]);

    let left = Matrix::<f64>::identity(2).multiply(&m).unwrap();
    let right = m.multiply(&Matrix::<f64>::identity(3)).unwrap();

    assert_eq!(left, m, "I * M must equal M");
    assert_eq!(right, m, "M * I must equal M");
}

#[test]
fn test_row_times_column_is_dot_product() {
    let row = matrix::<i64>(&[&[1, 2, 3]]);
    let col = matrix::<i64>(&[&[4], &[5], &[6]]);
    let product = row.multiply(&col).unwrap();
    assert_eq!(product, matrix::<i64>(&[&[32]]));
}

#[test]
fn test_known_2x2_product() {
    let a = matrix::<i64>(&[&[1, 2], &[3, 4]]);
    let b = matrix::<i64>(&[&[5, 6], &[7, 8]]);
    assert_eq!(a.multiply(&b).unwrap(), matrix::<i64>(&[&[19, 22], &[43, 50]]));
}

#[test]
fn test_rectangular_shapes_compose() {
    // (2x3) x (3x4) -> 2x4
    let a = matrix::<i64>(&[&[1, 0, 2], &[0, 3, 1]]);
    let b = matrix::<i64>(&[&[1, 2, 0, 1], &[0, 1, 1, 0], &[2, 0, 1, 1]]);
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.shape(), [2, 4]);
    assert_eq!(product, matrix::<i64>(&[&[5, 2, 2, 3], &[2, 3, 4, 1]]));
}

#[test]
fn test_incompatible_shapes_fail_with_both_shapes() {
    let a = matrix::<i64>(&[&[1, 2]]);
    let b = matrix::<i64>(&[&[1], &[2], &[3]]);
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch {
            lhs: [1, 2],
            rhs: [3, 1]
        }
    );
}

#[test]
fn test_float_products_are_exact_in_binary_arithmetic() {
    // Halves and quarters are exact in binary floating point, so the fixed
    // summation order must reproduce these cells bit for bit.
    let a = matrix::<f64>(&[&[0.5, 0.25], &[1.5, 2.0]]);
    let b = matrix::<f64>(&[&[4.0, 0.5], &[8.0, 0.25]]);
    let product = a.multiply(&b).unwrap();
    assert_eq!(product, matrix::<f64>(&[&[4.0, 0.3125], &[22.0, 1.25]]));
}

#[test]
fn test_repeated_multiplication_is_deterministic() {
    let a = matrix::<f64>(&[&[0.1, 0.2, 0.3], &[0.4, 0.5, 0.6]]);
    let b = matrix::<f64>(&[&[0.7, 0.8], &[0.9, 1.0], &[1.1, 1.2]]);

    let first = a.multiply(&b).unwrap();
    for _ in 0..10 {
        assert_eq!(a.multiply(&b).unwrap(), first, "product must not drift");
    }
}

#[test]
fn test_zero_width_inner_dimension() {
    // (3x0) x (0x2): every cell is an empty sum.
    let a = Matrix::<i64>::zeros(3, 0);
    let b = Matrix::<i64>::zeros(0, 2);
    assert_eq!(a.multiply(&b).unwrap(), Matrix::<i64>::zeros(3, 2));
}
