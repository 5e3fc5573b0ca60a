use crate::algebra::*;

fn test_matrix_3x3() -> Matrix<i32> {
    // A =
    //[ 1  2  3 ]
    //[ ⋅  4  5 ]
    //[ ⋅  ⋅  6 ]
    let mut a = Matrix::new(3).unwrap();
    a.read_from("1 2 3\n4 5\n6".as_bytes()).unwrap();
    a
}

#[test]
fn test_new() {
    let a = Matrix::<i32>::new(3).unwrap();
    assert_eq!(a.size(), 3);
    assert_eq!(a.nnz(), 6);
    assert!(a.data().iter().all(|&x| x == 0));
}

#[test]
fn test_new_zero_size() {
    let a = Matrix::<f64>::new(0).unwrap();
    assert_eq!(a.nnz(), 0);
    assert_eq!(a.rows().count(), 0);
    assert_eq!(a.to_string(), "");
}

#[test]
fn test_new_too_large() {
    assert!(Matrix::<u8>::new(MAX_MATRIX_SIZE).is_ok());
    assert!(matches!(
        Matrix::<i32>::new(MAX_MATRIX_SIZE + 1),
        Err(AlgebraError::InvalidArgument {
            max_size: MAX_MATRIX_SIZE,
            ..
        })
    ));
}

#[test]
fn test_default() {
    let a = Matrix::<i64>::default();
    assert_eq!(a.size(), 10);
    assert_eq!(a.nnz(), 55);
}

#[test]
fn test_row_shapes() {
    let a = Matrix::<i32>::new(4).unwrap();
    for (i, row) in a.rows().enumerate() {
        assert_eq!(row.size(), 4);
        assert_eq!(row.start_index(), i);
        assert_eq!(row.len(), 4 - i);
    }
    assert!(a.row(4).is_err());
}

#[test]
fn test_indexing() {
    let a = test_matrix_3x3();
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(a[(0, 1)], 2);
    assert_eq!(a[(0, 2)], 3);
    assert_eq!(a[(1, 1)], 4);
    assert_eq!(a[(1, 2)], 5);
    assert_eq!(a[(2, 2)], 6);

    assert_eq!(a.row(1).unwrap()[2], 5);
    assert_eq!(a.data(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_set_and_get() {
    let mut a = Matrix::<i32>::new(4).unwrap();
    a[(1, 1)] = 5;
    assert_eq!(a[(1, 1)], 5);

    a.row_mut(2).unwrap()[3] = 7;
    assert_eq!(*a.get((2, 3)).unwrap(), 7);

    *a.get_mut((0, 3)).unwrap() = -1;
    assert_eq!(a.row(0).unwrap()[3], -1);
}

#[test]
fn test_below_diagonal_out_of_range() {
    let mut a = test_matrix_3x3();
    assert!(matches!(
        a.get((1, 0)),
        Err(AlgebraError::IndexOutOfRange {
            index: 0,
            start_index: 1,
            size: 3
        })
    ));
    assert!(a.get((2, 1)).is_err());
    assert!(a.row(2).unwrap().get(1).is_err());
    assert!(a.row_mut(1).unwrap().get_mut(0).is_err());
}

#[test]
fn test_out_of_range() {
    let mut a = Matrix::<i32>::new(4).unwrap();
    assert!(a.get_mut((100, 100)).is_err());
    assert!(a.get((0, 4)).is_err());
    assert!(a.row(4).is_err());
}

#[test]
#[should_panic]
fn test_index_below_diagonal_panics() {
    let a = test_matrix_3x3();
    let _ = a[(2, 0)];
}

#[test]
fn test_copy_is_equal() {
    let a = Matrix::<i32>::new(2).unwrap();
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn test_copy_has_own_memory() {
    let mut a = Matrix::<i32>::new(5).unwrap();
    let mut b = a.clone();
    a[(0, 0)] = 0;
    b[(0, 0)] = 1;
    assert_ne!(a, b);
}

#[test]
fn test_equality() {
    let a = test_matrix_3x3();
    assert_eq!(a, a);
    assert_eq!(a, test_matrix_3x3());
    assert_ne!(Matrix::<i32>::new(4).unwrap(), Matrix::<i32>::new(5).unwrap());

    let mut b = a.clone();
    b[(2, 2)] = 0;
    assert_ne!(a, b);
}

#[test]
fn test_assign_equal_size() {
    let src = test_matrix_3x3();
    let mut a = Matrix::<i32>::new(3).unwrap();
    a.clone_from(&src);
    assert_eq!(a, src);
}

#[test]
fn test_assign_changes_size() {
    let mut a = Matrix::<i32>::new(4).unwrap();
    let src = Matrix::<i32>::new(5).unwrap();
    a.clone_from(&src);
    assert_eq!(a.size(), 5);
    assert_eq!(a.nnz(), 15);
    assert_eq!(a, src);

    // rows are triangular again after the resize
    assert_eq!(a.row(3).unwrap().start_index(), 3);
    assert!(a.get((4, 3)).is_err());
}

#[test]
fn test_add() {
    let a = test_matrix_3x3();
    let b = test_matrix_3x3();
    let c = (&a + &b).unwrap();
    assert_eq!(c.data(), &[2, 4, 6, 8, 10, 12]);
    assert_eq!(c[(1, 2)], 10);
}

#[test]
fn test_sub() {
    let a = test_matrix_3x3();
    let b = test_matrix_3x3();
    let c = (&a - &b).unwrap();
    assert_eq!(c, Matrix::new(3).unwrap());
}

#[test]
fn test_size_mismatch() {
    let a = Matrix::<i32>::new(4).unwrap();
    let b = Matrix::<i32>::new(5).unwrap();
    assert!(matches!(
        a.try_add(&b),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        a.try_sub(&b),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_rows_round_trip() {
    let a = test_matrix_3x3();
    let rows = a.to_rows();
    assert_eq!(rows.shape(), (3, 0));
    assert_eq!(rows[1].shape(), (3, 1));
    assert_eq!(rows[1].data(), &[4, 5]);

    assert_eq!(Matrix::try_from_rows(&rows).unwrap(), a);
    assert_eq!(Matrix::from(rows), a);
}

#[test]
fn test_try_from_rows_rejects_bad_shape() {
    let rows = Vector::from_vec(
        2,
        0,
        vec![
            Vector::from_slice(2, 0, &[1, 2]).unwrap(),
            Vector::from_slice(2, 0, &[3, 4]).unwrap(),
        ],
    )
    .unwrap();
    assert!(matches!(
        Matrix::try_from_rows(&rows),
        Err(AlgebraError::ShapeMismatch {
            lhs: (2, 1),
            rhs: (2, 0)
        })
    ));
}

#[test]
fn test_from_rows_is_trusting() {
    // packed as given; the second row is too long for a 2x2 triangle
    let rows = Vector::from_vec(
        2,
        0,
        vec![
            Vector::from_slice(2, 0, &[1, 2]).unwrap(),
            Vector::from_slice(2, 0, &[3, 4]).unwrap(),
        ],
    )
    .unwrap();
    let a = Matrix::from(rows);
    assert_eq!(a.size(), 2);
    assert_eq!(a.nnz(), 4);
    assert_eq!(a[(1, 1)], 3);
}

#[test]
fn test_from_rows_keeps_surplus_values() {
    // rows holding 3, 2 and 3 values for a 3x3 triangle
    let rows = Vector::from_vec(
        3,
        0,
        vec![
            Vector::from_slice(3, 0, &[1, 2, 3]).unwrap(),
            Vector::from_slice(3, 1, &[4, 5]).unwrap(),
            Vector::from_slice(3, 0, &[6, 7, 8]).unwrap(),
        ],
    )
    .unwrap();
    let a = Matrix::from(rows);

    // the packed buffer keeps every value
    assert_eq!(a.nnz(), 8);
    assert_eq!(a.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);

    // rows only see their triangular slots
    assert_eq!(a.rows().count(), 3);
    assert_eq!(a[(2, 2)], 6);
    assert_eq!(a.to_string(), "1 2 3\n4 5\n6\n");

    let b = (&a + &a).unwrap();
    assert_eq!(b.nnz(), 6);
    assert_eq!(b.data(), &[2, 4, 6, 8, 10, 12]);

    // equality and text input use the whole buffer
    assert_ne!(a, test_matrix_3x3());
    let mut c = a.clone();
    c.read_from("1 2 3 4 5 6 7 8".as_bytes()).unwrap();
    assert_eq!(c, a);
    assert!(c.read_from("1 2 3 4 5 6".as_bytes()).is_err());
}

#[test]
fn test_from_short_rows_stops_at_unbacked_row() {
    let rows = Vector::from_vec(
        3,
        0,
        vec![
            Vector::from_slice(3, 0, &[1, 2, 3]).unwrap(),
            Vector::from_slice(3, 2, &[4]).unwrap(),
            Vector::from_slice(3, 2, &[5]).unwrap(),
        ],
    )
    .unwrap();
    let a = Matrix::from(rows);
    assert_eq!(a.nnz(), 5);
    assert_eq!(a.rows().count(), 2);
    assert!(a.row(2).is_err());
    assert!(a.get((2, 2)).is_err());
    assert_eq!(a.to_string(), "1 2 3\n4 5\n");
}

#[test]
fn test_self_assignment_keeps_state() {
    let mut a = test_matrix_3x3();
    a = a.clone();
    assert_eq!(a.size(), 3);
    assert_eq!(a, test_matrix_3x3());

    let same = a.clone();
    a.clone_from(&same);
    assert_eq!(a.size(), 3);
    assert_eq!(a.nnz(), 6);
    assert_eq!(a.data(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_display() {
    let a = test_matrix_3x3();
    assert_eq!(a.to_string(), "1 2 3\n4 5\n6\n");
}

#[test]
fn test_read_failure_leaves_matrix_unchanged() {
    let mut a = test_matrix_3x3();
    assert!(a.read_from("1 2 3 4 5".as_bytes()).is_err());
    assert_eq!(a, test_matrix_3x3());
}
