//! Grid heatmap accumulator
//!
//! - Truth = normalized event coordinates (0-100)
//! - Grid = view layer (rows x cols cells over the pitch or a sub-region)
//!
//! Each event adds 1.0 to its cell and `smoothing_weight` to each of the
//! four orthogonal neighbours that exist. Spreading happens per event, so a
//! cell collects its own hits plus spill from nearby events. Direct hits are
//! also counted separately so the smoothing can be told apart from the data.

use serde::{Deserialize, Serialize};

use crate::config::{HeatmapConfig, PitchRegion};
use crate::coordinates::NormPos;
use crate::events::MatchEvent;

/// A cell index in (row, col). Both are 0-based; row follows Y, col follows X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    #[inline]
    pub fn id(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Accumulated intensity grid, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapGrid {
    pub rows: usize,
    pub cols: usize,
    pub region: PitchRegion,
    /// Direct hits plus smoothing spill, len = rows*cols
    pub intensity: Vec<f64>,
    /// Direct hits only, len = rows*cols
    pub hits: Vec<u32>,
    pub max_intensity: f64,
}

impl HeatmapGrid {
    /// Empty grid. Zero dimensions are bumped to 1.
    pub fn new(rows: usize, cols: usize, region: PitchRegion) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let len = rows * cols;
        Self { rows, cols, region, intensity: vec![0.0; len], hits: vec![0; len], max_intensity: 0.0 }
    }

    /// Accumulate a set of positions
    pub fn accumulate(positions: impl IntoIterator<Item = NormPos>, config: &HeatmapConfig) -> Self {
        let mut grid = Self::new(config.rows, config.cols, config.region);
        for pos in positions {
            grid.add(pos, config.smoothing_weight);
        }
        grid
    }

    /// Accumulate event origins
    pub fn from_events(events: &[MatchEvent], config: &HeatmapConfig) -> Self {
        Self::accumulate(events.iter().map(MatchEvent::origin), config)
    }

    /// Cell for a position.
    ///
    /// On the full pitch out-of-range coordinates clamp into the edge cells.
    /// On a sub-region, positions outside the region have no cell.
    pub fn cell_of(&self, pos: NormPos) -> Option<CellIndex> {
        let region = &self.region;
        if !region.is_full() && !region.contains(pos) {
            return None;
        }
        let row = bucket((pos.y - region.y_min) / region.height(), self.rows);
        let col = bucket((pos.x - region.x_min) / region.width(), self.cols);
        Some(CellIndex { row, col })
    }

    /// Add one event at `pos`. Returns false when the position is outside
    /// the grid's region.
    pub fn add(&mut self, pos: NormPos, smoothing_weight: f64) -> bool {
        let Some(cell) = self.cell_of(pos) else {
            return false;
        };

        let idx = cell.id(self.cols);
        self.hits[idx] += 1;
        self.bump(cell, 1.0);

        if smoothing_weight > 0.0 {
            for neighbor in self.neighbors(cell) {
                self.bump(neighbor, smoothing_weight);
            }
        }
        true
    }

    fn bump(&mut self, cell: CellIndex, amount: f64) {
        let idx = cell.id(self.cols);
        self.intensity[idx] += amount;
        if self.intensity[idx] > self.max_intensity {
            self.max_intensity = self.intensity[idx];
        }
    }

    /// Up/down/left/right neighbours inside the grid
    pub fn neighbors(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> {
        let (rows, cols) = (self.rows, self.cols);
        let CellIndex { row, col } = cell;
        [
            (row > 0).then(|| CellIndex { row: row - 1, col }),
            (row + 1 < rows).then(|| CellIndex { row: row + 1, col }),
            (col > 0).then(|| CellIndex { row, col: col - 1 }),
            (col + 1 < cols).then(|| CellIndex { row, col: col + 1 }),
        ]
        .into_iter()
        .flatten()
    }

    #[inline]
    pub fn get(&self, cell: CellIndex) -> f64 {
        self.intensity[cell.id(self.cols)]
    }

    #[inline]
    pub fn hits_at(&self, cell: CellIndex) -> u32 {
        self.hits[cell.id(self.cols)]
    }

    /// Sum of direct hits; equals the number of accumulated events
    pub fn direct_total(&self) -> u64 {
        self.hits.iter().map(|&h| h as u64).sum()
    }

    pub fn total_intensity(&self) -> f64 {
        self.intensity.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.max_intensity <= 0.0
    }

    /// Intensity divided by the grid maximum, for colour mapping.
    ///
    /// `None` means "no data" (empty grid), which is different from a cell
    /// that is merely cold.
    pub fn normalized(&self, cell: CellIndex) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(cell) / self.max_intensity)
        }
    }

    /// Pitch rectangle covered by a cell
    pub fn cell_bounds(&self, cell: CellIndex) -> PitchRegion {
        let w = self.region.width() / self.cols as f64;
        let h = self.region.height() / self.rows as f64;
        PitchRegion {
            x_min: self.region.x_min + cell.col as f64 * w,
            x_max: self.region.x_min + (cell.col + 1) as f64 * w,
            y_min: self.region.y_min + cell.row as f64 * h,
            y_max: self.region.y_min + (cell.row + 1) as f64 * h,
        }
    }

    /// Intensity rows, top (row 0) first
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.intensity.chunks(self.cols)
    }
}

/// floor(fraction * n) clamped to [0, n-1]
#[inline]
fn bucket(fraction: f64, n: usize) -> usize {
    let raw = (fraction * n as f64).floor();
    if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg(rows: usize, cols: usize) -> HeatmapConfig {
        HeatmapConfig::new(rows, cols)
    }

    #[test]
    fn test_single_event_spreads_to_four_neighbors() {
        let grid = HeatmapGrid::accumulate([NormPos::new(50.0, 50.0)], &cfg(8, 12));
        // y=50 -> row 4, x=50 -> col 6
        let center = CellIndex { row: 4, col: 6 };
        assert_eq!(grid.get(center), 1.0);
        assert_eq!(grid.hits_at(center), 1);
        for n in [(3, 6), (5, 6), (4, 5), (4, 7)] {
            assert_eq!(grid.get(CellIndex { row: n.0, col: n.1 }), 0.3);
        }
        assert_eq!(grid.get(CellIndex { row: 4, col: 8 }), 0.0);
        assert!((grid.total_intensity() - 2.2).abs() < 1e-12);
        assert_eq!(grid.max_intensity, 1.0);
    }

    #[test]
    fn test_corner_event_skips_out_of_bounds_neighbors() {
        let grid = HeatmapGrid::accumulate([NormPos::new(0.0, 0.0)], &cfg(6, 10));
        assert_eq!(grid.get(CellIndex { row: 0, col: 0 }), 1.0);
        assert!((grid.total_intensity() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_far_edge_and_out_of_range_clamp() {
        let grid = HeatmapGrid::accumulate([NormPos::new(100.0, 100.0), NormPos::new(130.0, -20.0)], &cfg(6, 10));
        assert_eq!(grid.hits_at(CellIndex { row: 5, col: 9 }), 1);
        assert_eq!(grid.hits_at(CellIndex { row: 0, col: 9 }), 1);
    }

    #[test]
    fn test_neighbor_spill_accumulates_with_hits() {
        // Two events in adjacent cells: each gets 1.0 + 0.3 from the other
        let grid = HeatmapGrid::accumulate([NormPos::new(5.0, 5.0), NormPos::new(15.0, 5.0)], &cfg(10, 10));
        assert!((grid.get(CellIndex { row: 0, col: 0 }) - 1.3).abs() < 1e-12);
        assert!((grid.get(CellIndex { row: 0, col: 1 }) - 1.3).abs() < 1e-12);
        assert!((grid.max_intensity - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_empty_grid_is_no_data() {
        let grid = HeatmapGrid::accumulate(std::iter::empty(), &cfg(8, 12));
        assert_eq!(grid.max_intensity, 0.0);
        assert!(grid.is_empty());
        assert_eq!(grid.normalized(CellIndex { row: 0, col: 0 }), None);
        assert_eq!(grid.direct_total(), 0);
    }

    #[test]
    fn test_normalized_intensity() {
        let grid = HeatmapGrid::accumulate([NormPos::new(50.0, 50.0)], &cfg(8, 12));
        assert_eq!(grid.normalized(CellIndex { row: 4, col: 6 }), Some(1.0));
        assert_eq!(grid.normalized(CellIndex { row: 3, col: 6 }), Some(0.3));
        assert_eq!(grid.normalized(CellIndex { row: 0, col: 0 }), Some(0.0));
    }

    #[test]
    fn test_sub_region_skips_outside_events() {
        let config = cfg(4, 4).with_region(PitchRegion::ATTACKING_HALF);
        let grid = HeatmapGrid::accumulate([NormPos::new(20.0, 50.0), NormPos::new(75.0, 50.0)], &config);
        assert_eq!(grid.direct_total(), 1);
        // x=75 is halfway through [50, 100] -> col 2
        assert_eq!(grid.hits_at(CellIndex { row: 2, col: 2 }), 1);
        let b = grid.cell_bounds(CellIndex { row: 2, col: 2 });
        assert_eq!((b.x_min, b.x_max), (75.0, 87.5));
    }

    #[test]
    fn test_zero_smoothing_keeps_only_hits() {
        let config = HeatmapConfig { smoothing_weight: 0.0, ..cfg(8, 12) };
        let grid = HeatmapGrid::accumulate([NormPos::new(50.0, 50.0)], &config);
        assert_eq!(grid.total_intensity(), 1.0);
    }

    #[test]
    fn test_rows_iter_shape() {
        let grid = HeatmapGrid::new(3, 5, PitchRegion::FULL);
        let rows: Vec<&[f64]> = grid.rows_iter().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 5));
    }

    proptest! {
        #[test]
        fn prop_direct_hits_are_conserved(
            points in prop::collection::vec((-10.0f64..=110.0, -10.0f64..=110.0), 0..200),
            rows in 1usize..=10,
            cols in 1usize..=14,
        ) {
            let positions: Vec<NormPos> = points.iter().map(|&(x, y)| NormPos::new(x, y)).collect();
            let grid = HeatmapGrid::accumulate(positions.iter().copied(), &cfg(rows, cols));

            prop_assert_eq!(grid.direct_total(), positions.len() as u64);
            prop_assert!(grid.intensity.iter().all(|&v| v >= 0.0));
            prop_assert!(grid.total_intensity() + 1e-9 >= positions.len() as f64);
            prop_assert_eq!(grid.max_intensity == 0.0, positions.is_empty());

            let again = HeatmapGrid::accumulate(positions.iter().copied(), &cfg(rows, cols));
            prop_assert_eq!(grid, again);
        }
    }
}
