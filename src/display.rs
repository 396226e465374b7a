//! Fixed-width rendering of a map for inspection.  The pipeline
//! exposes plain values; the column width lives here, derived from
//! the widest value actually present rather than a fixed constant.

use crate::gridmap::GridMap;
use itertools::Itertools;

/// Render a map as rows of zero-padded values, one line per row.
pub fn render(grid: &GridMap<u32>) -> String {
    let widest = (0..grid.height)
        .filter_map(|y| grid.row(y).iter().max())
        .max()
        .copied()
        .unwrap_or(0);
    let digits = widest.to_string().len();
    (0..grid.height)
        .map(|y| {
            grid.row(y)
                .iter()
                .map(|v| format!("{:0width$}", v, width = digits))
                .join(" ")
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_the_widest_value() {
        let grid = GridMap::from_rows(&[vec![3u32, 115], vec![27, 9]]).unwrap();
        assert_eq!(render(&grid), "003 115\n027 009");
    }

    #[test]
    fn single_digits_stay_narrow() {
        let grid = GridMap::from_rows(&[vec![1u32, 2], vec![3, 4]]).unwrap();
        assert_eq!(render(&grid), "1 2\n3 4");
    }
}
