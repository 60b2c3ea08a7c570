// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Pixel traversal: linearize a 2D grid along a geometric pattern and
//! restore it exactly.
//!
//! Every [`Direction`] is a recipe of up to three grid [`Step`]s (row flip,
//! column flip, transpose, serpentine) followed by a cyclic rotation that
//! moves the start pixel `(y, x)` to sequence index 0. Each step carries its
//! own inverse, so [`reshape_slice`] simply rotates back and undoes the
//! steps in reverse order.
//!
//! ```text
//! Raster, start (1, 1) on 3×3:     SnakeRows, start (0, 0) on 3×3:
//!   0 1 2                            0 → 1 → 2
//!   3 [4] 5   → 4 5 6 7 8 0 1 2 3              ↓
//!   6 7 8                            5 ← 4 ← 3
//!                                    ↓
//!                                    6 → 7 → 8
//! ```
//!
//! Shapes are always `(height, width)`; buffers are row-major.

use crate::image::GrayImage;
use crate::stego::error::{ConfigError, StegoError};

/// Traversal pattern. The discriminant is the 4-bit direction gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Rows top to bottom, each left to right.
    Raster = 0,
    /// Rows bottom to top, each right to left.
    RasterReversed = 1,
    /// Rows bottom to top, each left to right.
    RasterUp = 2,
    /// Rows top to bottom, each right to left.
    RasterLeft = 3,
    /// Columns left to right, each top to bottom.
    Columns = 4,
    /// Columns right to left, each bottom to top.
    ColumnsReversed = 5,
    /// Columns left to right, each bottom to top.
    ColumnsUp = 6,
    /// Columns right to left, each top to bottom.
    ColumnsLeft = 7,
    /// Boustrophedon over rows, starting top-left.
    SnakeRows = 8,
    /// Boustrophedon over rows, starting bottom-left.
    SnakeRowsUp = 9,
    /// Boustrophedon over columns, starting top-left.
    SnakeColumns = 10,
    /// Boustrophedon over columns, starting top-right.
    SnakeColumnsLeft = 11,
}

impl Direction {
    /// All recognized patterns, indexed by gene value.
    pub const ALL: [Direction; 12] = [
        Direction::Raster,
        Direction::RasterReversed,
        Direction::RasterUp,
        Direction::RasterLeft,
        Direction::Columns,
        Direction::ColumnsReversed,
        Direction::ColumnsUp,
        Direction::ColumnsLeft,
        Direction::SnakeRows,
        Direction::SnakeRowsUp,
        Direction::SnakeColumns,
        Direction::SnakeColumnsLeft,
    ];

    /// Look up a pattern by its gene value.
    ///
    /// # Errors
    /// [`ConfigError::UnknownDirection`] for values 12 and above.
    pub fn from_u8(value: u8) -> Result<Self, ConfigError> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConfigError::UnknownDirection(value))
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether consecutive sequence elements stay grid-adjacent.
    pub fn is_snake(self) -> bool {
        self.steps().contains(&Step::Serpentine)
    }

    fn steps(self) -> &'static [Step] {
        RECIPES[self as usize]
    }
}

impl TryFrom<u8> for Direction {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

/// Grid transform applied before the start rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Reverse the order of rows.
    FlipRows,
    /// Reverse every row.
    FlipCols,
    /// Swap rows and columns (column-major flattening).
    Transpose,
    /// Reverse every odd row.
    Serpentine,
}

use Step::{FlipCols, FlipRows, Serpentine, Transpose};

/// Step recipe per direction, indexed by gene value.
const RECIPES: [&[Step]; 12] = [
    &[],
    &[FlipRows, FlipCols],
    &[FlipRows],
    &[FlipCols],
    &[Transpose],
    &[FlipRows, FlipCols, Transpose],
    &[FlipRows, Transpose],
    &[FlipCols, Transpose],
    &[Serpentine],
    &[FlipRows, Serpentine],
    &[Transpose, Serpentine],
    &[FlipCols, Transpose, Serpentine],
];

impl Step {
    /// Transform a `rows × cols` buffer into a new buffer.
    fn apply<T: Copy>(self, buf: &[T], rows: usize, cols: usize) -> Vec<T> {
        match self {
            FlipRows => buf.chunks_exact(cols).rev().flatten().copied().collect(),
            FlipCols => buf
                .chunks_exact(cols)
                .flat_map(|row| row.iter().rev())
                .copied()
                .collect(),
            Transpose => (0..cols)
                .flat_map(move |c| (0..rows).map(move |r| buf[r * cols + c]))
                .collect(),
            Serpentine => {
                let mut out = Vec::with_capacity(buf.len());
                for (r, row) in buf.chunks_exact(cols).enumerate() {
                    if r % 2 == 1 {
                        out.extend(row.iter().rev());
                    } else {
                        out.extend_from_slice(row);
                    }
                }
                out
            }
        }
    }

    /// Inverse of [`apply`](Self::apply). `rows × cols` is the shape the
    /// step was applied to.
    fn undo<T: Copy>(self, buf: &[T], rows: usize, cols: usize) -> Vec<T> {
        match self {
            Transpose => Transpose.apply(buf, cols, rows),
            // Flips and the serpentine are involutions.
            other => other.apply(buf, rows, cols),
        }
    }

    /// Where grid cell `(r, c)` lands after the step.
    fn map_coord(self, (r, c): (usize, usize), rows: usize, cols: usize) -> (usize, usize) {
        match self {
            FlipRows => (rows - 1 - r, c),
            FlipCols => (r, cols - 1 - c),
            Transpose => (c, r),
            Serpentine if r % 2 == 1 => (r, cols - 1 - c),
            Serpentine => (r, c),
        }
    }

    fn output_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Transpose => (cols, rows),
            _ => (rows, cols),
        }
    }
}

/// Resolved traversal for one `(shape, start, direction)`.
struct Plan {
    steps: &'static [Step],
    /// Input shape of each step.
    shapes: Vec<(usize, usize)>,
    /// Index of the start pixel in the stepped buffer.
    start: usize,
}

fn plan(shape: (usize, usize), y: usize, x: usize, direction: Direction) -> Result<Plan, StegoError> {
    let (height, width) = shape;
    if height == 0 || width == 0 {
        return Err(ConfigError::EmptyImage.into());
    }
    if y >= height || x >= width {
        return Err(ConfigError::StartOutOfBounds { y, x, height, width }.into());
    }

    let steps = direction.steps();
    let mut shapes = Vec::with_capacity(steps.len());
    let (mut rows, mut cols) = shape;
    let mut coord = (y, x);
    for &step in steps {
        shapes.push((rows, cols));
        coord = step.map_coord(coord, rows, cols);
        (rows, cols) = step.output_shape(rows, cols);
    }

    Ok(Plan {
        steps,
        shapes,
        start: coord.0 * cols + coord.1,
    })
}

fn check_len(len: usize, shape: (usize, usize)) -> Result<(), StegoError> {
    let expected = shape.0 * shape.1;
    if len != expected {
        return Err(StegoError::ShapeMismatch { expected, actual: len });
    }
    Ok(())
}

/// Linearize a row-major `grid` of `shape` starting at `(y, x)`.
///
/// Element 0 of the result is `grid[y * width + x]`.
///
/// # Errors
/// - [`ConfigError::EmptyImage`] or [`ConfigError::StartOutOfBounds`] for a
///   start outside `shape`.
/// - [`StegoError::ShapeMismatch`] if `grid.len()` is not `height * width`.
pub fn scan_slice<T: Copy>(
    grid: &[T],
    shape: (usize, usize),
    y: usize,
    x: usize,
    direction: Direction,
) -> Result<Vec<T>, StegoError> {
    let plan = plan(shape, y, x, direction)?;
    check_len(grid.len(), shape)?;

    let mut buf = grid.to_vec();
    for (&step, &(rows, cols)) in plan.steps.iter().zip(&plan.shapes) {
        buf = step.apply(&buf, rows, cols);
    }
    buf.rotate_left(plan.start);
    Ok(buf)
}

/// Exact inverse of [`scan_slice`] for the same `(shape, y, x, direction)`.
///
/// # Errors
/// Same as [`scan_slice`], with `sequence.len()` checked against `shape`.
pub fn reshape_slice<T: Copy>(
    sequence: &[T],
    shape: (usize, usize),
    y: usize,
    x: usize,
    direction: Direction,
) -> Result<Vec<T>, StegoError> {
    let plan = plan(shape, y, x, direction)?;
    check_len(sequence.len(), shape)?;

    let mut buf = sequence.to_vec();
    buf.rotate_right(plan.start);
    for (&step, &(rows, cols)) in plan.steps.iter().zip(&plan.shapes).rev() {
        buf = step.undo(&buf, rows, cols);
    }
    Ok(buf)
}

/// Row-major grid index of every sequence element.
pub fn scan_order(
    shape: (usize, usize),
    y: usize,
    x: usize,
    direction: Direction,
) -> Result<Vec<usize>, StegoError> {
    let indices: Vec<usize> = (0..shape.0 * shape.1).collect();
    scan_slice(&indices, shape, y, x, direction)
}

/// Linearize `image` starting at `(y, x)`.
pub fn scan(image: &GrayImage, y: usize, x: usize, direction: Direction) -> Result<Vec<u8>, StegoError> {
    scan_slice(image.samples(), image.shape(), y, x, direction)
}

/// Rebuild an image of `shape` from a sequence produced by [`scan`].
pub fn reshape(
    sequence: &[u8],
    shape: (usize, usize),
    y: usize,
    x: usize,
    direction: Direction,
) -> Result<GrayImage, StegoError> {
    let samples = reshape_slice(sequence, shape, y, x, direction)?;
    GrayImage::from_vec(shape.1, shape.0, samples)
}
