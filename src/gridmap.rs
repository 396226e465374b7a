use failure::Fail;
use std::ops::{Index, IndexMut};

/// Errors raised when building a map from untrusted row data.  The
/// carving pipeline assumes a non-empty rectangular map, so the
/// construction boundary is where malformed input gets turned away.
#[derive(Debug, Fail, PartialEq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    #[fail(display = "a graymap needs at least one row and one column")]
    Empty,

    /// A row whose length disagrees with the first row's.
    #[fail(display = "row {} has {} cells where {} were expected", row, found, expected)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The basic two-dimensional map: an addressable, row-major field of
/// cells.  One type serves every stage of the pipeline: the intensity
/// map as parsed, the energy map derived from it, and the cumulative
/// energy map the carver traces back through.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> GridMap<P> {
    /// Define a new map of the given dimensions, every cell holding
    /// the content type's default value.
    pub fn new(width: u32, height: u32) -> Self {
        GridMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map from a row-per-entry slice, rejecting empty and
    /// ragged input.
    pub fn from_rows(rows: &[Vec<P>]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(GridMap {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Borrow a single row as a slice.  Row-major storage makes this
    /// free, and the carver's value re-lookup wants whole rows.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Remove one cell from every row, the cell in row `y` being the
    /// one at column `seam[y]`.  Survivors keep their left-to-right
    /// order and the map comes out one column narrower.  The whole
    /// compaction is a single forward pass over the backing vector;
    /// the write cursor never overtakes the read cursor.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) {
        debug_assert!(self.width > 1);
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let mut write = 0;
        for y in 0..self.height as usize {
            let cut = seam[y] as usize;
            debug_assert!(cut < width);
            for x in 0..width {
                if x == cut {
                    continue;
                }
                self.cells[write] = self.cells[y * width + x];
                write += 1;
            }
        }
        self.cells.truncate(write);
        self.width -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for GridMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
