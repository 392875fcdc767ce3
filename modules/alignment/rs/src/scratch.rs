use std::ops::{Index, IndexMut};

/// Row-major 2D buffer that only ever grows. The logical shape of the data stored inside is
/// managed by the caller; the grid only guarantees the capacity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grow the grid to hold at least `rows` x `cols` cells. Each undersized axis is grown to twice
    /// the requested size, existing cells keep their (row, col) coordinates.
    pub fn ensure(&mut self, rows: usize, cols: usize) {
        if rows <= self.rows && cols <= self.cols {
            return;
        }

        let newrows = if rows > self.rows { rows * 2 } else { self.rows };
        let newcols = if cols > self.cols { cols * 2 } else { self.cols };

        if newcols == self.cols {
            // Rows are contiguous, appending is enough
            self.data.resize(newrows * newcols, T::default());
        } else {
            let mut data = vec![T::default(); newrows * newcols];
            for (row, chunk) in self.data.chunks_exact(self.cols.max(1)).enumerate() {
                data[row * newcols..row * newcols + self.cols].copy_from_slice(chunk);
            }
            self.data = data;
        }

        self.rows = newrows;
        self.cols = newcols;
    }

    /// Overwrite the top-left `rows` x `cols` block with `value`. The rest is left untouched.
    pub fn fill(&mut self, rows: usize, cols: usize, value: T) {
        debug_assert!(rows <= self.rows && cols <= self.cols);
        for row in self.data.chunks_exact_mut(self.cols.max(1)).take(rows) {
            row[..cols].fill(value);
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Dynamic programming matrices reused across many alignments: the score matrix `H` and the
/// row/column of the predecessor of each cell.
///
/// A single instance must never be shared between concurrently running alignments. Create one
/// per worker thread and pass it explicitly into every call.
#[derive(Clone, Debug, Default)]
pub struct ScratchMemory {
    h: Grid<f64>,
    trace_row: Grid<usize>,
    trace_col: Grid<usize>,
}

impl ScratchMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        let mut scratch = Self::default();
        scratch.ensure_capacity(rows, cols);
        scratch
    }

    /// Allocated (rows, cols) of the matrices.
    pub fn capacity(&self) -> (usize, usize) {
        (self.h.rows(), self.h.cols())
    }

    pub fn ensure_capacity(&mut self, rows: usize, cols: usize) {
        self.h.ensure(rows, cols);
        self.trace_row.ensure(rows, cols);
        self.trace_col.ensure(rows, cols);
    }

    /// Prepare the matrices for an alignment with `rows` x `cols` cells. Only this active region
    /// is zeroed, anything outside it is stale and must not be read.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.ensure_capacity(rows, cols);
        self.h.fill(rows, cols, 0.0);
        self.trace_row.fill(rows, cols, 0);
        self.trace_col.fill(rows, cols, 0);
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> f64 {
        self.h[(row, col)]
    }

    #[inline(always)]
    pub fn predecessor(&self, row: usize, col: usize) -> (usize, usize) {
        (self.trace_row[(row, col)], self.trace_col[(row, col)])
    }

    /// Store the score of the cell together with the cell it was derived from.
    #[inline(always)]
    pub fn record(&mut self, row: usize, col: usize, score: f64, from: (usize, usize)) {
        self.h[(row, col)] = score;
        self.trace_row[(row, col)] = from.0;
        self.trace_col[(row, col)] = from.1;
    }

    pub fn h(&self) -> &Grid<f64> {
        &self.h
    }

    pub fn trace_row(&self) -> &Grid<usize> {
        &self.trace_row
    }

    pub fn trace_col(&self) -> &Grid<usize> {
        &self.trace_col
    }
}
