// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Accumulate energy down the map
//!
//! The dynamic-programming half of the carve: each cell of the result
//! holds the minimum total energy of any top-to-bottom path ending at
//! that cell.  The first row is the energy row unchanged; every later
//! cell adds the smallest of its up-to-three ancestors in the row
//! above, the upper-left and upper-right candidates existing only
//! when the column has a left or right to offer.

use crate::cq;
use crate::gridmap::GridMap;

/// Build the cumulative energy map for an energy map.  The input is
/// untouched; the result has the same dimensions.
pub fn accumulate_energy(energy: &GridMap<u32>) -> GridMap<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut cmap = GridMap::new(width, height);

    // The top row has no ancestors; its cells are their own cost.
    for x in 0..width {
        cmap[(x, 0)] = energy[(x, 0)];
    }

    let mw = width - 1;
    for y in 1..height {
        for x in 0..width {
            let window = cq!(x == 0, 0, x - 1)..=cq!(x >= mw, mw, x + 1);
            let cheapest = window.map(|px| cmap[(px, y - 1)]).min().unwrap();
            cmap[(x, y)] = energy[(x, y)] + cheapest;
        }
    }
    cmap
}
