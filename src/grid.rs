use crate::Discrete;
use ndarray::Array2;

/// Row-major grid with a fixed start cell, goal cell and hazard mask.
/// Immutable once built; environments hold one and never touch it again.
#[derive(Clone, Debug)]
pub struct GridTopology {
    shape: (usize, usize),
    start: (usize, usize),
    goal: (usize, usize),
    hazards: Array2<bool>,
}

impl GridTopology {
    pub fn new(
        shape: (usize, usize),
        start: (usize, usize),
        goal: (usize, usize),
        hazards: Array2<bool>,
    ) -> Self {
        assert_eq!(hazards.dim(), shape, "Hazard mask must match the grid shape.");
        assert!(
            !hazards[start] && !hazards[goal],
            "Start and goal cells cannot be hazards."
        );

        Self {
            shape,
            start,
            goal,
            hazards,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn goal(&self) -> (usize, usize) {
        self.goal
    }

    pub fn n_s(&self) -> usize {
        self.shape.0 * self.shape.1
    }

    pub fn hazard_mask(&self) -> &Array2<bool> {
        &self.hazards
    }

    /// Clamps each axis independently into the grid, so a move off the edge
    /// is absorbed at the boundary instead of wrapping or failing.
    pub fn clamp(&self, coord: (isize, isize)) -> (usize, usize) {
        let row = coord.0.clamp(0, self.shape.0 as isize - 1) as usize;
        let col = coord.1.clamp(0, self.shape.1 as isize - 1) as usize;

        (row, col)
    }

    pub fn to_linear(&self, coord: (usize, usize)) -> Discrete {
        (coord.0 * self.shape.1 + coord.1) as Discrete
    }

    pub fn to_coord(&self, s: Discrete) -> (usize, usize) {
        let s = s as usize;

        (s / self.shape.1, s % self.shape.1)
    }

    pub fn is_hazard(&self, coord: (usize, usize)) -> bool {
        self.hazards[coord]
    }

    pub fn is_goal(&self, coord: (usize, usize)) -> bool {
        coord == self.goal
    }
}
