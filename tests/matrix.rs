//! Integration tests for the Matrix math type.

use rasterlin::math::{Matrix, ShapeError};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_rows_round_trips_every_element() {
    let rows = vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let m = Matrix::from_rows(rows.clone()).unwrap();
    assert_eq!(m.shape(), (2, 3));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_eq!(m.get(i, j), value);
        }
    }
}

#[test]
fn from_rows_rejects_ragged_input() {
    let result = Matrix::from_rows(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0]]);
    assert!(matches!(
        result,
        Err(ShapeError::Ragged {
            row: 1,
            len: 2,
            expected: 3
        })
    ));
}

#[test]
fn from_rows_empty_is_zero_by_zero() {
    let m: Matrix<f64> = Matrix::from_rows(vec![]).unwrap();
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn from_shape_vec_checks_length() {
    let ok = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]);
    assert!(ok.is_ok());

    let bad = Matrix::<i32>::from_shape_vec((2, 3), vec![1, 2, 3]);
    assert!(matches!(bad, Err(ShapeError::Length { .. })));
}

#[test]
fn zeros_fills_with_additive_identity() {
    let m: Matrix<f64> = Matrix::zeros(3, 2);
    assert_eq!(m.shape(), (3, 2));
    for row in m.rows() {
        for &value in row {
            assert_eq!(value, 0.0);
        }
    }

    let n: Matrix<i32> = Matrix::zeros(2, 2);
    assert_eq!(n.to_vec(), vec![0, 0, 0, 0]);
}

// ---------------------------------------------------------------------------
// Access: get panics out of range, set reports
// ---------------------------------------------------------------------------

#[test]
fn get_and_index_agree() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.get(0, 1), 2);
    assert_eq!(m[(1, 0)], 3);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn get_out_of_range_panics() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let _ = m.get(2, 0);
}

#[test]
fn set_in_range_writes_and_reports_true() {
    let mut m: Matrix<i32> = Matrix::zeros(2, 2);
    assert!(m.set(1, 1, 9));
    assert_eq!(m.get(1, 1), 9);
}

#[test]
fn set_out_of_range_is_a_reported_no_op() {
    let mut m: Matrix<i32> = Matrix::zeros(2, 2);
    assert!(!m.set(2, 0, 9));
    assert!(!m.set(0, 2, 9));
    assert_eq!(m.to_vec(), vec![0, 0, 0, 0]);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_sums_elementwise() {
    let a = Matrix::from_rows(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![10.0f64, 20.0], vec![30.0, 40.0]]).unwrap();
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.to_vec(), vec![11.0, 22.0, 33.0, 44.0]);
}

#[test]
fn add_rejects_mismatched_shapes() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(3, 2);
    assert!(a.add(&b).is_err());
}

#[test]
fn mul_scalar_scales_every_element() {
    let m = Matrix::from_rows(vec![vec![1, -2], vec![3, 0]]).unwrap();
    let scaled = m.mul_scalar(3);
    assert_eq!(scaled.to_vec(), vec![3, -6, 9, 0]);
}

#[test]
fn sub_recovers_the_first_operand() {
    let a = Matrix::from_rows(vec![vec![1.5f64, -2.25], vec![0.0, 7.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0.5f64, 4.0], vec![-1.0, 2.5]]).unwrap();
    let recovered = a.add(&b).unwrap().sub(&b).unwrap();
    assert_eq!(recovered, a);
}

#[test]
fn sub_of_matrix_with_itself_is_exactly_zero() {
    let m = Matrix::from_rows(vec![vec![0.1f64, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
    let zero = m.sub(&m).unwrap();
    assert_eq!(zero, Matrix::zeros(2, 3));
}

#[test]
fn arithmetic_does_not_mutate_operands() {
    let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
    let b = Matrix::from_rows(vec![vec![3, 4]]).unwrap();
    let _ = a.add(&b).unwrap();
    let _ = a.sub(&b).unwrap();
    let _ = a.mul_scalar(5);
    assert_eq!(a.to_vec(), vec![1, 2]);
    assert_eq!(b.to_vec(), vec![3, 4]);
}

// ---------------------------------------------------------------------------
// Iteration and display
// ---------------------------------------------------------------------------

#[test]
fn rows_visits_top_to_bottom_and_restarts() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

    let collected: Vec<&[i32]> = m.rows().collect();
    assert_eq!(collected, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);

    // A second call starts over from the first row.
    assert_eq!(m.rows().next(), Some(&[1, 2, 3][..]));
}

#[test]
fn display_prints_one_row_per_line() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(format!("{}", m), "1 2\n3 4\n");
}

#[test]
fn mapv_preserves_shape() {
    let m = Matrix::from_rows(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]).unwrap();
    let doubled = m.mapv(|&v| v * 2.0);
    assert_eq!(doubled.shape(), (2, 2));
    assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn clone_copies_the_buffer() {
    let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let snapshot = m.clone();
    assert!(m.set(0, 0, 99));
    assert_eq!(snapshot.get(0, 0), 1);
}
