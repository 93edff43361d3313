//! Percentile tables.

use std::ops::Index;

use rayon::prelude::*;
use serde::Serialize;

use crate::consts::PERCENTILE_COUNT;

/// One row of a percentile table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Percentile {
    /// Out-of-gamut ratio at this percentile.
    pub out_of_gamut: f32,
    /// Measured nits at this percentile.
    pub nits: f32,
}

/// Percentiles 0 through 100 of out-of-gamut ratio and nits.
///
/// Both columns are sorted independently, so a row does not describe a
/// single pixel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PercentileTable {
    entries: Vec<Percentile>,
}

impl PercentileTable {
    /// Builds the table from per-pixel values, sorting both in place.
    ///
    /// Entry `i < 100` reads index `i * N / 100`; entry 100 reads the
    /// largest value. Returns `None` for empty input.
    ///
    /// ```rust
    /// use hilux_analyze::PercentileTable;
    ///
    /// let mut gamut = vec![0.0, 0.5, 1.0, 0.25];
    /// let mut nits = vec![40.0, 10.0, 30.0, 20.0];
    /// let table = PercentileTable::from_unsorted(&mut gamut, &mut nits).unwrap();
    ///
    /// assert_eq!(table.len(), 101);
    /// assert_eq!(table[0].nits, 10.0);
    /// assert_eq!(table[50].nits, 30.0);
    /// assert_eq!(table[100].out_of_gamut, 1.0);
    /// ```
    pub fn from_unsorted(out_of_gamut: &mut [f32], nits: &mut [f32]) -> Option<Self> {
        let n = out_of_gamut.len().min(nits.len());
        if n == 0 {
            return None;
        }

        out_of_gamut.par_sort_unstable_by(f32::total_cmp);
        nits.par_sort_unstable_by(f32::total_cmp);

        let entries = (0..PERCENTILE_COUNT)
            .map(|i| {
                let index = if i + 1 == PERCENTILE_COUNT {
                    n - 1
                } else {
                    (i as u64 * n as u64 / 100) as usize
                };
                Percentile { out_of_gamut: out_of_gamut[index], nits: nits[index] }
            })
            .collect();

        Some(Self { entries })
    }

    /// Number of entries (always 101).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; tables are never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, percentile 0 first.
    pub fn entries(&self) -> &[Percentile] {
        &self.entries
    }

    /// Entry for percentile `p`, if `p <= 100`.
    pub fn get(&self, p: usize) -> Option<&Percentile> {
        self.entries.get(p)
    }
}

impl Index<usize> for PercentileTable {
    type Output = Percentile;

    fn index(&self, p: usize) -> &Percentile {
        &self.entries[p]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let table = PercentileTable::from_unsorted(&mut [0.3], &mut [42.0]).unwrap();
        assert_eq!(table.len(), PERCENTILE_COUNT);
        assert!(table.entries().iter().all(|p| p.nits == 42.0 && p.out_of_gamut == 0.3));
    }

    #[test]
    fn test_indexing() {
        let mut nits: Vec<f32> = (0..1000).rev().map(|i| i as f32).collect();
        let mut gamut = vec![0.0; 1000];
        let table = PercentileTable::from_unsorted(&mut gamut, &mut nits).unwrap();

        assert_eq!(table[0].nits, 0.0);
        assert_eq!(table[1].nits, 10.0);
        assert_eq!(table[99].nits, 990.0);
        assert_eq!(table[100].nits, 999.0);
    }

    #[test]
    fn test_monotonic() {
        let mut nits: Vec<f32> = (0..257).map(|i| ((i * 37) % 101) as f32).collect();
        let mut gamut: Vec<f32> = (0..257).map(|i| ((i * 13) % 7) as f32 / 7.0).collect();
        let table = PercentileTable::from_unsorted(&mut gamut, &mut nits).unwrap();

        for pair in table.entries().windows(2) {
            assert!(pair[0].nits <= pair[1].nits);
            assert!(pair[0].out_of_gamut <= pair[1].out_of_gamut);
        }
    }

    #[test]
    fn test_empty() {
        assert!(PercentileTable::from_unsorted(&mut [], &mut []).is_none());
    }
}
