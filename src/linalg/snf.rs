/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use num_integer::Integer;

/// Dense integer matrix stored as a list of rows.
pub type IntMatrix = Vec<Vec<i64>>;

/// Result of Smith Normal Form decomposition.
///
/// See the documentation of `SmithDecomp::of` regarding conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmithDecomp {
    /// The diagonal Smith Normal Form, with the same shape as the input.
    pub smith: IntMatrix,

    /// Unimodular row transformation. (`rows x rows`)
    pub left: IntMatrix,

    /// Unimodular column transformation. (`cols x cols`)
    pub right: IntMatrix,
}

// Used for intermediate results of the computation that are not yet diagonal.
struct UnimodularState {
    /// The transformed matrix.
    matrix: IntMatrix,
    /// Accumulated row operations.
    left: IntMatrix,
    /// Accumulated column operations.
    right: IntMatrix,
}

impl SmithDecomp {
    /// Compute the Smith Normal Form of a (possibly non-square) integer matrix.
    ///
    /// The output satisfies:
    ///
    /// ```text,ignore
    /// left * original * right == smith
    /// ```
    ///
    /// where `left` and `right` are unimodular, `smith` is zero off the diagonal,
    /// its diagonal entries are non-negative, and each nonzero diagonal entry
    /// divides the next one.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all of the same length.
    pub fn of(matrix: &[Vec<i64>]) -> SmithDecomp {
        let nrows = matrix.len();
        let ncols = matrix.first().map_or(0, |row| row.len());
        assert!(matrix.iter().all(|row| row.len() == ncols), "ragged matrix");

        let mut state = UnimodularState::start(matrix.to_vec());
        let mut t = 0;
        while t < nrows.min(ncols) {
            let (pr, pc) = match state.smallest_nonzero(t) {
                Some(pos) => pos,
                None => break,
            };
            state.swap_rows(t, pr);
            state.swap_cols(t, pc);

            if state.eliminate_around(t) {
                // a remainder survived; it becomes the next (smaller) pivot
                continue;
            }

            if let Some(r) = state.row_not_divisible_by_pivot(t) {
                state.add_row(t, r);
                continue;
            }

            if state.matrix[t][t] < 0 {
                state.negate_row(t);
            }
            t += 1;
        }

        let UnimodularState { matrix: smith, left, right } = state;
        let out = SmithDecomp { smith, left, right };
        if cfg!(debug_assertions) {
            out.validate(matrix);
        }
        out
    }

    /// Number of nonzero diagonal elements.
    pub fn rank(&self) -> usize {
        let n = self.smith.len().min(self.right.len());
        (0..n).take_while(|&i| self.smith[i][i] != 0).count()
    }

    /// Solve `original * x == b (mod 1)` for a real vector `x`.
    ///
    /// The system is solvable iff every component of `left * b` that does not meet
    /// a nonzero pivot is an integer (within `tol`).  Components of `x` along the
    /// kernel of the matrix are set to zero.
    pub fn solve_mod_one(&self, b: &[f64], tol: f64) -> Option<Vec<f64>> {
        assert_eq!(b.len(), self.left.len());

        let left_b: Vec<f64> = {
            self.left.iter()
                .map(|row| row.iter().zip(b).map(|(&p, &b)| p as f64 * b).sum())
                .collect()
        };

        let ncols = self.right.len();
        let mut y = vec![0.0; ncols];
        for (i, &value) in left_b.iter().enumerate() {
            let pivot = if i < ncols { self.smith[i][i] } else { 0 };
            if pivot != 0 {
                y[i] = value / pivot as f64;
            } else if (value - value.round()).abs() >= tol {
                return None;
            }
        }

        let x = {
            self.right.iter()
                .map(|row| row.iter().zip(&y).map(|(&q, &y)| q as f64 * y).sum())
                .collect()
        };
        Some(x)
    }

    // This tests all necessary conditions to ensure that the result is correct.
    fn validate(&self, original: &[Vec<i64>]) {
        let SmithDecomp { smith, left, right } = self;
        assert_eq!(&mat_mul(&mat_mul(left, original), right), smith);

        let mut prev = None;
        for (r, row) in smith.iter().enumerate() {
            for (c, &x) in row.iter().enumerate() {
                if r != c {
                    assert_eq!(x, 0, "{:?}", smith);
                }
            }
            if let Some(&x) = row.get(r) {
                assert!(x >= 0, "{:?}", smith);
                if let Some(prev) = prev {
                    if x != 0 {
                        assert!(prev != 0 && x % prev == 0, "{:?}", smith);
                    }
                }
                prev = Some(x);
            }
        }
    }
}

impl UnimodularState {
    fn start(matrix: IntMatrix) -> Self {
        let nrows = matrix.len();
        let ncols = matrix.first().map_or(0, |row| row.len());
        UnimodularState {
            matrix,
            left: identity(nrows),
            right: identity(ncols),
        }
    }

    fn nrows(&self) -> usize { self.matrix.len() }
    fn ncols(&self) -> usize { self.right.len() }

    fn smallest_nonzero(&self, t: usize) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for r in t..self.nrows() {
            for c in t..self.ncols() {
                let x = self.matrix[r][c];
                if x == 0 {
                    continue;
                }
                match best {
                    Some((br, bc)) if self.matrix[br][bc].abs() <= x.abs() => {},
                    _ => best = Some((r, c)),
                }
            }
        }
        best
    }

    // Reduces the pivot's column and row by floored division.
    // Returns true if any nonzero remainder is left behind.
    fn eliminate_around(&mut self, t: usize) -> bool {
        let pivot = self.matrix[t][t];
        let mut dirty = false;

        for r in t + 1..self.nrows() {
            let mult = self.matrix[r][t].div_floor(&pivot);
            if mult != 0 {
                row_axpy(&mut self.matrix, r, t, -mult);
                row_axpy(&mut self.left, r, t, -mult);
            }
            dirty |= self.matrix[r][t] != 0;
        }

        for c in t + 1..self.ncols() {
            let mult = self.matrix[t][c].div_floor(&pivot);
            if mult != 0 {
                col_axpy(&mut self.matrix, c, t, -mult);
                col_axpy(&mut self.right, c, t, -mult);
            }
            dirty |= self.matrix[t][c] != 0;
        }
        dirty
    }

    fn row_not_divisible_by_pivot(&self, t: usize) -> Option<usize> {
        let pivot = self.matrix[t][t];
        (t + 1..self.nrows()).find(|&r| {
            (t + 1..self.ncols()).any(|c| self.matrix[r][c] % pivot != 0)
        })
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        self.matrix.swap(a, b);
        self.left.swap(a, b);
    }

    fn swap_cols(&mut self, a: usize, b: usize) {
        for row in self.matrix.iter_mut().chain(self.right.iter_mut()) {
            row.swap(a, b);
        }
    }

    fn add_row(&mut self, dest: usize, src: usize) {
        row_axpy(&mut self.matrix, dest, src, 1);
        row_axpy(&mut self.left, dest, src, 1);
    }

    fn negate_row(&mut self, r: usize) {
        for x in self.matrix[r].iter_mut().chain(self.left[r].iter_mut()) {
            *x = -*x;
        }
    }
}

// m[dest] += scale * m[src]
fn row_axpy(m: &mut IntMatrix, dest: usize, src: usize, scale: i64) {
    let src_row = m[src].clone();
    for (d, s) in m[dest].iter_mut().zip(src_row) {
        *d += scale * s;
    }
}

// column version of row_axpy
fn col_axpy(m: &mut IntMatrix, dest: usize, src: usize, scale: i64) {
    for row in m.iter_mut() {
        row[dest] += scale * row[src];
    }
}

fn identity(n: usize) -> IntMatrix {
    (0..n).map(|r| (0..n).map(|c| (r == c) as i64).collect()).collect()
}

fn mat_mul(a: &[Vec<i64>], b: &[Vec<i64>]) -> IntMatrix {
    let inner = b.len();
    let ncols = b.first().map_or(0, |row| row.len());
    a.iter()
        .map(|row| {
            assert_eq!(row.len(), inner);
            (0..ncols).map(|c| (0..inner).map(|k| row[k] * b[k][c]).sum()).collect()
        })
        .collect()
}
