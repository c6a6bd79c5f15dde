//! Neighbor enumeration for the density and force passes.
//!
//! Both strategies visit candidates in a fixed order (index order for brute
//! force; fixed cell offsets, then insertion order for the hash), so a pass
//! over the same positions always accumulates in the same order.

use std::collections::HashMap;

use crate::core::math::Vec3;
use crate::domain::params::NeighborSearch;

type CellKey = (i32, i32, i32);

/// Uniform grid keyed by `floor(position / cell_size)`.
///
/// With `cell_size >= h` every neighbor within h lives in the 3x3x3 block of
/// cells around a particle.
#[derive(Default)]
pub struct SpatialHash {
    inv_cell_size: f32,
    cells: HashMap<CellKey, Vec<u32>>,
}

impl SpatialHash {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn cell_of(&self, p: Vec3) -> CellKey {
        (
            (p.x * self.inv_cell_size).floor() as i32,
            (p.y * self.inv_cell_size).floor() as i32,
            (p.z * self.inv_cell_size).floor() as i32,
        )
    }

    /// Re-bucket every particle. Cell vectors are kept to reuse their storage.
    pub fn rebuild(&mut self, positions: &[Vec3], cell_size: f32) {
        self.inv_cell_size = 1.0 / cell_size;
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (i, &p) in positions.iter().enumerate() {
            let key = self.cell_of(p);
            self.cells.entry(key).or_default().push(i as u32);
        }
        self.cells.retain(|_, bucket| !bucket.is_empty());
    }

    /// Visit every particle index in the 27 cells around `p`.
    pub fn for_each_candidate(&self, p: Vec3, mut f: impl FnMut(usize)) {
        let (cx, cy, cz) = self.cell_of(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) {
                        for &j in bucket {
                            f(j as usize);
                        }
                    }
                }
            }
        }
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

/// Borrowed view of the active neighbor strategy for one pass.
#[derive(Clone, Copy)]
pub enum Neighbors<'a> {
    All,
    Grid(&'a SpatialHash),
}

impl<'a> Neighbors<'a> {
    pub fn select(search: NeighborSearch, grid: &'a SpatialHash) -> Self {
        match search {
            NeighborSearch::BruteForce => Neighbors::All,
            NeighborSearch::SpatialHash => Neighbors::Grid(grid),
        }
    }

    /// Call `f(j, xi - xj, |xi - xj|²)` for every j within `sqrt(h_sq)` of
    /// particle i, including i itself.
    #[inline]
    pub fn for_each_within<F>(&self, positions: &[Vec3], i: usize, h_sq: f32, mut f: F)
    where
        F: FnMut(usize, Vec3, f32),
    {
        let xi = *fast!(positions, [i]);
        let mut visit = |j: usize| {
            let r = xi - *fast!(positions, [j]);
            let r_sq = r.length_squared();
            if r_sq <= h_sq {
                f(j, r, r_sq);
            }
        };
        match self {
            Neighbors::All => {
                for j in 0..positions.len() {
                    visit(j);
                }
            }
            Neighbors::Grid(grid) => grid.for_each_candidate(xi, &mut visit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(neighbors: Neighbors, positions: &[Vec3], i: usize, h: f32) -> Vec<usize> {
        let mut out = Vec::new();
        neighbors.for_each_within(positions, i, h * h, |j, _, _| out.push(j));
        out.sort_unstable();
        out
    }

    #[test]
    fn hash_finds_same_neighbors_as_brute_force() {
        let mut positions = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                positions.push(Vec3::new(i as f32 * 0.23 - 0.7, j as f32 * 0.31 - 0.2, (i * j) as f32 * 0.05));
            }
        }
        let h = 0.5;
        let mut grid = SpatialHash::new();
        grid.rebuild(&positions, h);

        for i in 0..positions.len() {
            assert_eq!(
                collect(Neighbors::All, &positions, i, h),
                collect(Neighbors::Grid(&grid), &positions, i, h),
                "neighbor sets differ for particle {i}"
            );
        }
    }

    #[test]
    fn rebuild_drops_empty_cells() {
        let mut grid = SpatialHash::new();
        grid.rebuild(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)], 1.0);
        assert_eq!(grid.occupied_cells(), 2);
        grid.rebuild(&[Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)], 1.0);
        assert_eq!(grid.occupied_cells(), 1);
    }
}
