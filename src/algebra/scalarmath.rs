// packed storage helpers for the upper triangle

pub(crate) fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

// 0-based offset of the first entry of row `i` in the row-major packed
// upper triangle of an `n x n` matrix.  Same as:
// triangular_number(n) - triangular_number(n - i)
pub(crate) fn triangular_row_offset(n: usize, i: usize) -> usize {
    debug_assert!(i <= n);
    i * n - ((i * i.saturating_sub(1)) >> 1)
}

#[test]
fn test_triangular_row_offset() {
    // rows of a 4x4 triangle hold 4, 3, 2 and 1 entries
    assert_eq!(triangular_row_offset(4, 0), 0);
    assert_eq!(triangular_row_offset(4, 1), 4);
    assert_eq!(triangular_row_offset(4, 2), 7);
    assert_eq!(triangular_row_offset(4, 3), 9);
    assert_eq!(triangular_row_offset(4, 4), triangular_number(4));
    assert_eq!(triangular_row_offset(0, 0), 0);
}
