//! Background acceleration grid for neighbour rejection.
//!
//! Cells are sized so that two points closer than the sizing radius are at most two cells
//! apart on every axis. A proximity query therefore only scans the 5x5x5 block (5x5 in the
//! plane) around the candidate's cell.
//!
//! Storage is flat: one head index per cell and a point arena where each point links to
//! the previous occupant of its cell. A cell holds any number of points without a
//! per-cell allocation.
use std::f32::consts::SQRT_2;

use glam::{Vec2, Vec3};

use crate::error::{Error, Result};

const EMPTY: u32 = u32::MAX;
const NEIGHBORHOOD: usize = 2;
const SQRT_3: f32 = 1.732_050_8;

/// Upper bound on the number of grid cells (256 MiB of cell heads).
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// Fixed-size grid over a cuboid (or rectangle) centered on the origin.
#[derive(Debug, Clone)]
pub struct SamplingGrid {
    half_extent: Vec3,
    cell_size: f32,
    inv_cell_size: f32,
    dims: [usize; 3],
    heads: Vec<u32>,
    points: Vec<Vec3>,
    next: Vec<u32>,
}

impl SamplingGrid {
    /// Grid over a cuboid, cell edge `radius / sqrt(3)`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the extent needs more than
    /// [`MAX_GRID_CELLS`] cells at this radius.
    pub fn volumetric(extent: Vec3, radius: f32) -> Result<Self> {
        Self::with_cell_size(extent, radius, radius / SQRT_3)
    }

    /// Grid over a rectangle in the `z = 0` plane, cell edge `radius / sqrt(2)`.
    pub fn planar(extent: Vec2, radius: f32) -> Result<Self> {
        Self::with_cell_size(extent.extend(0.0), radius, radius / SQRT_2)
    }

    fn with_cell_size(extent: Vec3, radius: f32, cell_size: f32) -> Result<Self> {
        debug_assert!(cell_size > 0.0, "cell_size must be > 0");
        // Float-to-int casts saturate; the checked product catches the rest.
        let axis = |len: f32| ((len / cell_size).ceil() as usize).max(1);
        let dims = [axis(extent.x), axis(extent.y), axis(extent.z)];

        let cells = dims[0]
            .checked_mul(dims[1])
            .and_then(|n| n.checked_mul(dims[2]))
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "extent {extent} is too large for radius {radius}: the sampling grid would \
                     exceed {MAX_GRID_CELLS} cells"
                ))
            })?;

        Ok(Self {
            half_extent: extent * 0.5,
            cell_size,
            inv_cell_size: cell_size.recip(),
            dims,
            heads: vec![EMPTY; cells],
            points: Vec::new(),
            next: Vec::new(),
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of cells along x, y and z.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cell holding `point`, from its offset to the grid's minimum corner.
    ///
    /// Callers must only pass points inside the grid's box; rounding right at the maximum
    /// faces is clamped to the last cell.
    #[inline]
    pub fn cell_of(&self, point: Vec3) -> [usize; 3] {
        let offset = (point + self.half_extent) * self.inv_cell_size;
        let mut cell = [0usize; 3];
        for (axis, slot) in cell.iter_mut().enumerate() {
            let raw = offset[axis].floor();
            debug_assert!(
                raw >= 0.0 && raw <= self.dims[axis] as f32,
                "point {point:?} lies outside the sampling grid"
            );
            *slot = (raw.max(0.0) as usize).min(self.dims[axis] - 1);
        }
        cell
    }

    #[inline]
    fn linear(&self, cell: [usize; 3]) -> usize {
        cell[0] + cell[1] * self.dims[0] + cell[2] * self.dims[0] * self.dims[1]
    }

    /// Files `point` under its cell.
    pub fn insert(&mut self, point: Vec3) {
        debug_assert!(self.points.len() < EMPTY as usize);
        let slot = self.linear(self.cell_of(point));
        let index = self.points.len() as u32;
        self.points.push(point);
        self.next.push(self.heads[slot]);
        self.heads[slot] = index;
    }

    /// Points stored in `cell`, most recent first.
    pub fn cell_points(&self, cell: [usize; 3]) -> CellPoints<'_> {
        CellPoints {
            grid: self,
            cursor: self.heads[self.linear(cell)],
        }
    }

    /// False as soon as a stored point lies strictly closer than `radius` to `candidate`.
    ///
    /// Only cells within two steps of the candidate's cell are scanned, which is complete
    /// for any `radius` up to the one the grid was sized for.
    pub fn is_far_enough(&self, candidate: Vec3, radius: f32) -> bool {
        let sqr_radius = radius * radius;
        let center = self.cell_of(candidate);

        let lo = center.map(|c| c.saturating_sub(NEIGHBORHOOD));
        let hi = [0, 1, 2].map(|axis| (center[axis] + NEIGHBORHOOD).min(self.dims[axis] - 1));

        for z in lo[2]..=hi[2] {
            for y in lo[1]..=hi[1] {
                for x in lo[0]..=hi[0] {
                    let occupied_too_close = self
                        .cell_points([x, y, z])
                        .any(|existing| existing.distance_squared(candidate) < sqr_radius);
                    if occupied_too_close {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// Iterator over one cell's occupants.
pub struct CellPoints<'a> {
    grid: &'a SamplingGrid,
    cursor: u32,
}

impl Iterator for CellPoints<'_> {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.cursor == EMPTY {
            return None;
        }
        let index = self.cursor as usize;
        self.cursor = self.grid.next[index];
        Some(self.grid.points[index])
    }
}
