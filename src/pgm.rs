// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain (ASCII) graymap input and output
//!
//! The P2 dialect handled here:
//!
//! ```text
//! P2                       ; plain graymap magic
//! # a comment              ; at most one, directly after the magic
//! columns rows
//! 255                      ; upper bound on sample values
//! ...                      ; whitespace-separated samples
//! ```
//!
//! Everything the carving pipeline assumes about its input is
//! enforced right here: known dimensions, both nonzero, and every
//! sample a non-negative integer within the declared bound.

use crate::gridmap::GridMap;
use failure::Fail;
use itertools::Itertools;
use std::io::{BufRead, Write};

/// A parsed plain graymap: the intensity map plus the declared
/// maximum sample value, which survives a carve unchanged.
#[derive(Debug, PartialEq)]
pub struct Graymap {
    pub maxval: u32,
    pub pixels: GridMap<u32>,
}

#[derive(Debug, Fail)]
pub enum PgmError {
    #[fail(display = "file format was read as '{}', while the only supported format is 'P2'", _0)]
    BadMagic(String),

    #[fail(display = "could not read the graymap dimensions from '{}'", _0)]
    BadDimensions(String),

    #[fail(display = "could not read the maximum sample value from '{}'", _0)]
    BadMaximum(String),

    #[fail(display = "'{}' is not a non-negative integer sample", _0)]
    BadSample(String),

    #[fail(display = "sample value {} falls outside the acceptable range of [0, {}]", value, maxval)]
    SampleOutOfRange { value: u32, maxval: u32 },

    #[fail(display = "graymap data ended early: expected {} samples, found {}", expected, found)]
    Truncated { expected: usize, found: usize },

    #[fail(display = "{}", _0)]
    Io(#[cause] std::io::Error),
}

impl From<std::io::Error> for PgmError {
    fn from(err: std::io::Error) -> PgmError {
        PgmError::Io(err)
    }
}

fn next_line<R: BufRead>(reader: &mut R) -> Result<String, PgmError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

/// Read a P2 graymap.  The header rules are strict: the magic on the
/// first line, at most one comment line and only directly after the
/// magic, then `columns rows`, then the maximum sample value.  Sample
/// data beyond the declared count is ignored.
pub fn read_graymap<R: BufRead>(reader: &mut R) -> Result<Graymap, PgmError> {
    let magic = next_line(reader)?;
    if magic.trim() != "P2" {
        return Err(PgmError::BadMagic(magic));
    }

    let mut header = next_line(reader)?;
    if header.starts_with('#') {
        header = next_line(reader)?;
    }

    // Columns first, then rows.
    let mut dims = header.split_whitespace().map(|tok| tok.parse::<u32>());
    let (columns, rows) = match (dims.next(), dims.next()) {
        (Some(Ok(c)), Some(Ok(r))) if c > 0 && r > 0 => (c, r),
        _ => return Err(PgmError::BadDimensions(header)),
    };

    let bound = next_line(reader)?;
    let maxval = bound
        .trim()
        .parse::<u32>()
        .map_err(|_| PgmError::BadMaximum(bound.clone()))?;

    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    let expected = columns as usize * rows as usize;
    let mut pixels = GridMap::new(columns, rows);
    let mut found = 0;
    for (i, tok) in body.split_whitespace().take(expected).enumerate() {
        let value = tok
            .parse::<u32>()
            .map_err(|_| PgmError::BadSample(tok.to_string()))?;
        if value > maxval {
            return Err(PgmError::SampleOutOfRange { value, maxval });
        }
        let (x, y) = (i % columns as usize, i / columns as usize);
        pixels[(x as u32, y as u32)] = value;
        found += 1;
    }
    if found < expected {
        return Err(PgmError::Truncated { expected, found });
    }

    Ok(Graymap { maxval, pixels })
}

/// Write a graymap back out as P2, one row of samples per line.
pub fn write_graymap<W: Write>(writer: &mut W, map: &Graymap) -> Result<(), PgmError> {
    writeln!(writer, "P2")?;
    writeln!(writer, "{} {}", map.pixels.width, map.pixels.height)?;
    writeln!(writer, "{}", map.maxval)?;
    for y in 0..map.pixels.height {
        writeln!(writer, "{}", map.pixels.row(y).iter().join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Result<Graymap, PgmError> {
        read_graymap(&mut Cursor::new(text))
    }

    #[test]
    fn reads_a_graymap_with_a_comment() {
        let map = read("P2\n# Created by IrfanView\n5 4\n9\n9 9 0 9 9\n9 1 9 8 9\n9 9 9 9 0\n9 9 9 0 9\n").unwrap();
        assert_eq!(map.maxval, 9);
        assert_eq!((map.pixels.width, map.pixels.height), (5, 4));
        assert_eq!(map.pixels.row(1), &[9, 1, 9, 8, 9]);
    }

    #[test]
    fn reads_samples_split_across_arbitrary_lines() {
        let map = read("P2\n3 2\n255\n1 2\n3\n4 5 6\n").unwrap();
        assert_eq!(map.pixels.row(0), &[1, 2, 3]);
        assert_eq!(map.pixels.row(1), &[4, 5, 6]);
    }

    #[test]
    fn rejects_anything_but_p2() {
        match read("P5\n2 2\n255\n1 2 3 4\n") {
            Err(PgmError::BadMagic(magic)) => assert_eq!(magic, "P5"),
            other => panic!("expected a magic failure, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(match read("P2\n0 4\n255\n") {
            Err(PgmError::BadDimensions(_)) => true,
            _ => false,
        });
        assert!(match read("P2\nfive four\n255\n") {
            Err(PgmError::BadDimensions(_)) => true,
            _ => false,
        });
    }

    #[test]
    fn rejects_a_sample_over_the_declared_maximum() {
        assert!(match read("P2\n2 2\n9\n1 2 3 10\n") {
            Err(PgmError::SampleOutOfRange { value: 10, maxval: 9 }) => true,
            _ => false,
        });
    }

    #[test]
    fn rejects_negative_samples() {
        assert!(match read("P2\n2 2\n9\n1 -2 3 4\n") {
            Err(PgmError::BadSample(_)) => true,
            _ => false,
        });
    }

    #[test]
    fn rejects_truncated_data() {
        assert!(match read("P2\n2 2\n9\n1 2 3\n") {
            Err(PgmError::Truncated { expected: 4, found: 3 }) => true,
            _ => false,
        });
    }

    #[test]
    fn writes_what_it_reads() {
        let original = "P2\n2 2\n9\n1 2\n3 4\n";
        let map = read(original).unwrap();
        let mut out = Vec::new();
        write_graymap(&mut out, &map).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), original);
    }
}
