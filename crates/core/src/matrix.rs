use std::ops::{Index, IndexMut};

/// Dense `n x n` matrix stored row-major in a single allocation.
///
/// Cell `(i, j)` lives at `cells[i * n + j]`, so a full row is one contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates an `n x n` matrix with every cell set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            cells: vec![value; n * n],
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Number of cells in an `n x n` matrix of `T`, or `None` when the cell
    /// count or its byte size exceeds what a single `Vec` can hold.
    pub fn checked_len(n: usize) -> Option<usize> {
        let len = n.checked_mul(n)?;
        let bytes = len.checked_mul(size_of::<T>().max(1))?;
        (bytes <= isize::MAX as usize).then_some(len)
    }

    /// Builds a matrix by evaluating `f(i, j)` for every cell in row-major order.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Self { n, cells }
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.n && col < self.n {
            self.cells.get(row * self.n + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on a zero chunk size; an empty matrix simply has no rows.
        self.cells.chunks(self.n.max(1))
    }

    /// Maps every cell into a new matrix of the same dimension.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            n: self.n,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.n && col < self.n);
        &self.cells[row * self.n + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.n && col < self.n);
        &mut self.cells[row * self.n + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_matrix_has_uniform_cells() {
        let m = SquareMatrix::filled(3, 7u8);
        assert_eq!(m.dim(), 3);
        assert!(m.rows().all(|row| row == [7, 7, 7]));
    }

    #[test]
    fn from_fn_is_row_major() {
        let m = SquareMatrix::from_fn(2, |i, j| i * 10 + j);
        assert_eq!(m.row(0), &[0, 1]);
        assert_eq!(m.row(1), &[10, 11]);
        assert_eq!(m[(1, 0)], 10);
    }

    #[test]
    fn get_rejects_out_of_range_cells() {
        let m = SquareMatrix::filled(2, 0.0f64);
        assert!(m.get(1, 1).is_some());
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
    }

    #[test]
    fn index_mut_writes_single_cell() {
        let mut m = SquareMatrix::filled(2, 0);
        m[(0, 1)] = 5;
        assert_eq!(m.row(0), &[0, 5]);
        assert_eq!(m.row(1), &[0, 0]);
    }

    #[test]
    fn checked_len_rejects_unaddressable_sizes() {
        assert_eq!(SquareMatrix::<f64>::checked_len(3), Some(9));
        assert_eq!(SquareMatrix::<f64>::checked_len(0), Some(0));
        assert_eq!(SquareMatrix::<f64>::checked_len(1usize << 33), None);
        assert_eq!(SquareMatrix::<Option<usize>>::checked_len(usize::MAX), None);
    }

    #[test]
    fn map_preserves_shape() {
        let m = SquareMatrix::from_fn(2, |i, j| (i + j) as f64);
        let mapped = m.map(|w| w.is_finite());
        assert_eq!(mapped.dim(), 2);
        assert_eq!(mapped.rows().count(), 2);
    }
}
