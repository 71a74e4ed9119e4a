use super::GridExtent;

/// The set of grid points lying inside of a mesh, stored as runs of consecutive `x` indices.
///
/// Each `(j, k)` row of the extent owns a sorted list of disjoint inclusive runs
/// `[first_i, last_i]`. Rows are stored contiguously: the runs of the `r`-th row are
/// `runs[row_ranges[r]..row_ranges[r + 1]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ImageStencil {
    extent: GridExtent,
    runs: Vec<[i32; 2]>,
    row_ranges: Vec<usize>,
}

impl ImageStencil {
    /// A stencil covering the given extent, with no point inside.
    pub fn empty(extent: GridExtent) -> Self {
        Self {
            extent,
            runs: vec![],
            row_ranges: vec![0],
        }
    }

    /// A stencil where every point of `extent` is inside.
    pub fn full(extent: GridExtent) -> Self {
        let mut result = Self::empty(extent);

        if !extent.is_empty() {
            let run = [extent.mins.x, extent.maxs.x];

            for k in extent.axis_range(2) {
                for j in extent.axis_range(1) {
                    result.push_row(j, k, [run]);
                }
            }
        }

        result
    }

    /// The extent covered by this stencil.
    #[inline]
    pub fn extent(&self) -> &GridExtent {
        &self.extent
    }

    fn row_id(&self, j: i32, k: i32) -> usize {
        let [_, ny, _] = self.extent.dims();
        (j - self.extent.mins.y) as usize + ny * (k - self.extent.mins.z) as usize
    }

    /// Sets the inside runs of the row `(j, k)`.
    ///
    /// The runs are clamped to the `x` range of the extent, and runs left empty are dropped.
    /// They may be given in any order: the stored runs are sorted, and overlapping or
    /// touching runs are merged.
    ///
    /// # Panics
    /// Panics if the row is outside of the extent or if a row following it (in `z` then `y`
    /// order) has already been pushed.
    pub fn push_row(&mut self, j: i32, k: i32, runs: impl IntoIterator<Item = [i32; 2]>) {
        assert!(
            self.extent.contains(self.extent.mins.x, j, k),
            "the row ({j}, {k}) is outside of the stencil extent"
        );

        let row = self.row_id(j, k);
        let num_pushed = self.row_ranges.len() - 1;
        assert!(
            row >= num_pushed,
            "stencil rows must be pushed in increasing order"
        );

        // Rows skipped so far are left empty.
        while self.row_ranges.len() <= row {
            self.row_ranges.push(self.runs.len());
        }

        let (lo, hi) = (self.extent.mins.x, self.extent.maxs.x);
        let start = self.runs.len();

        for [first, last] in runs {
            let first = first.max(lo);
            let last = last.min(hi);

            if first <= last {
                self.runs.push([first, last]);
            }
        }

        let row_runs = &mut self.runs[start..];
        row_runs.sort_unstable_by_key(|run| run[0]);

        let mut num_merged = 0;

        for id in 0..row_runs.len() {
            let run = row_runs[id];

            if num_merged > 0 && run[0] as i64 <= row_runs[num_merged - 1][1] as i64 + 1 {
                let prev = &mut row_runs[num_merged - 1];
                prev[1] = prev[1].max(run[1]);
            } else {
                row_runs[num_merged] = run;
                num_merged += 1;
            }
        }

        self.runs.truncate(start + num_merged);
        self.row_ranges.push(self.runs.len());
    }

    /// The inside runs of the row `(j, k)`.
    ///
    /// Returns an empty slice if the row is outside of the extent or has not been pushed.
    pub fn row_runs(&self, j: i32, k: i32) -> &[[i32; 2]] {
        if !self.extent.contains(self.extent.mins.x, j, k) {
            return &[];
        }

        let row = self.row_id(j, k);

        if row + 1 < self.row_ranges.len() {
            &self.runs[self.row_ranges[row]..self.row_ranges[row + 1]]
        } else {
            &[]
        }
    }

    /// Is the grid point `(i, j, k)` inside of this stencil?
    pub fn is_inside(&self, i: i32, j: i32, k: i32) -> bool {
        self.extent.contains(i, j, k)
            && self
                .row_runs(j, k)
                .iter()
                .any(|[first, last]| *first <= i && i <= *last)
    }

    /// The number of grid points inside of this stencil.
    pub fn num_inside(&self) -> usize {
        self.runs
            .iter()
            .map(|[first, last]| (last - first + 1) as usize)
            .sum()
    }
}
