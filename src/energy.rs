// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a graymap
//!
//! Given an intensity map, calculate the per-pixel energy map: the
//! sum of the horizontal and vertical gradient magnitudes at each
//! pixel.  A pixel on a border substitutes its own value for any
//! neighbor that would fall outside the map, so the missing direction
//! contributes nothing.  No wraparound, no reflection.

use crate::cq;
use crate::gridmap::GridMap;
use itertools::iproduct;

#[inline]
fn absdiff(a: u32, b: u32) -> u32 {
    cq!(a > b, a - b, b - a)
}

/// Compute the energy of every pixel in an intensity map.  Total over
/// any rectangular map; a 1x1 map has energy zero, all four
/// substituted neighbors being the pixel itself.
pub fn calculate_energy(image: &GridMap<u32>) -> GridMap<u32> {
    let (width, height) = (image.width, image.height);
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = GridMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let current = image[(x, y)];
        let (left, right, up, down) = (
            cq!(x == 0, current, image[(x - 1, y)]),
            cq!(x >= mw, current, image[(x + 1, y)]),
            cq!(y == 0, current, image[(x, y - 1)]),
            cq!(y >= mh, current, image[(x, y + 1)]),
        );
        emap[(x, y)] = absdiff(current, left)
            + absdiff(current, right)
            + absdiff(current, up)
            + absdiff(current, down);
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_DATA: [[u32; 5]; 4] = [
        [9, 9, 0, 9, 9],
        [9, 1, 9, 8, 9],
        [9, 9, 9, 9, 0],
        [9, 9, 9, 0, 9],
    ];
    const IMAGE_ENERGY: [[u32; 5]; 4] = [
        [0, 17, 27, 10, 0],
        [8, 32, 18, 4, 10],
        [0, 8, 0, 19, 27],
        [0, 0, 9, 27, 18],
    ];

    fn grid(rows: &[[u32; 5]; 4]) -> GridMap<u32> {
        GridMap::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn energy_generator_works() {
        assert_eq!(calculate_energy(&grid(&IMAGE_DATA)), grid(&IMAGE_ENERGY));
    }

    #[test]
    fn energy_keeps_the_dimensions() {
        let energy = calculate_energy(&grid(&IMAGE_DATA));
        assert_eq!((energy.width, energy.height), (5, 4));
    }

    #[test]
    fn single_pixel_has_zero_energy() {
        let image = GridMap::from_rows(&[vec![42u32]]).unwrap();
        assert_eq!(calculate_energy(&image).row(0), &[0]);
    }

    #[test]
    fn two_by_two_energy() {
        let image = GridMap::from_rows(&[vec![1u32, 2], vec![3, 4]]).unwrap();
        let energy = calculate_energy(&image);
        assert_eq!(energy.row(0), &[3, 3]);
        assert_eq!(energy.row(1), &[3, 3]);
    }
}
