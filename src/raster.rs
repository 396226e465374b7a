// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bridges between image-rs buffers and graymap grids
//!
//! The carving pipeline only ever sees integer grids.  These two
//! converters let it borrow intensities from anything the image crate
//! can load, via the luma channel, and dump a derived map back out as
//! a viewable grayscale image.

use crate::gridmap::GridMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

/// Build an intensity map from any image view, reading each pixel's
/// luma channel.  Generic on the image type, as the carvers upstream
/// of this crate are.
pub fn grid_from_image<I, P, S>(image: &I) -> GridMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut grid = GridMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let c = image.get_pixel(x, y).to_luma().channels().to_owned();
        grid[(x, y)] = NumCast::from(c[0]).unwrap();
    }
    grid
}

/// Render a map as an 8-bit grayscale image, scaled so the largest
/// value present maps to white.  Handy for eyeballing an energy map.
pub fn grid_to_image(grid: &GridMap<u32>) -> GrayImage {
    let (width, height) = (grid.width, grid.height);
    let factor = (0..height)
        .filter_map(|y| grid.row(y).iter().max())
        .max()
        .copied()
        .unwrap_or(0)
        .max(1) as u64;
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let scaled = (grid[(x, y)] as u64 * 255 / factor) as u8;
        out.put_pixel(x, y, Luma([scaled]));
    }
    out
}
