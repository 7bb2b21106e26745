use crate::envs::errors::EnvError;
use crate::grid::GridTopology;
use crate::mdps::Mdp;
use crate::*;
use itertools::iproduct;
use ndarray::{s, Array2};
use rand::Rng;
use std::rc::Rc;

pub const UP: Discrete = 0;
pub const RIGHT: Discrete = 1;
pub const DOWN: Discrete = 2;
pub const LEFT: Discrete = 3;

/// Row/col deltas, indexed by action.
const DELTAS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

const SHAPE: (usize, usize) = (4, 12);
const START: (usize, usize) = (3, 0);
const GOAL: (usize, usize) = (3, 11);

/// The 4x12 cliff walking gridworld - Sutton & Barto 2018, Example 6.6.
/// Every step costs -1, falling off the cliff costs -100 and ends the
/// episode, as does reaching the goal. Walking off the grid edge is a no-op.
/// Refer: https://gymnasium.farama.org/environments/toy_text/cliff_walking/
///
/// All (state, action) outcomes are computed up front; reset and step are
/// table lookups over a single cursor. The table is behind an Rc so several
/// independent episodes can share one copy.
pub struct CliffWalkingEnv {
    grid: GridTopology,
    transitions: Rc<Transitions>,
    s: Discrete,
    ready: bool,
}

impl CliffWalkingEnv {
    pub fn new() -> Self {
        let mut hazards = Array2::from_elem(SHAPE, false);
        hazards.slice_mut(s![3, 1..11]).fill(true);
        let grid = GridTopology::new(SHAPE, START, GOAL, hazards);

        let mut transitions = Transitions::new();
        for (s, a) in iproduct!(0..grid.n_s() as Discrete, 0..DELTAS.len() as Discrete) {
            transitions.insert((s, a), vec![Self::outcome(&grid, s, a)]);
        }
        tracing::debug!(n_s = grid.n_s(), n_a = DELTAS.len(), "Built transition table.");

        let start = grid.to_linear(grid.start());
        Self {
            grid,
            transitions: Rc::new(transitions),
            s: start,
            ready: false,
        }
    }

    fn outcome(grid: &GridTopology, s: Discrete, a: Discrete) -> Transition {
        let (row, col) = grid.to_coord(s);
        let (dr, dc) = DELTAS[a as usize];
        let dest = grid.clamp((row as isize + dr, col as isize + dc));

        Transition {
            next_state: grid.to_linear(dest),
            probability: 1.0,
            reward: if grid.is_hazard(dest) { -100.0 } else { -1.0 },
            done: grid.is_hazard(dest) || grid.is_goal(dest),
        }
    }

    pub fn grid(&self) -> &GridTopology {
        &self.grid
    }

    pub fn observation(&self, s: Discrete) -> Observation {
        let (row, col) = self.grid.to_coord(s);

        [row as f32, col as f32]
    }

    /// Begins a new episode at the start cell. Always succeeds, regardless of
    /// any prior episode.
    pub fn reset(&mut self) -> Observation {
        self.s = self.grid.to_linear(self.grid.start());
        self.ready = true;

        self.observation(self.s)
    }

    pub fn step(&mut self, action: Discrete) -> Result<StepInfo, EnvError> {
        if !(0..self.n_a() as Discrete).contains(&action) {
            return Err(EnvError::InvalidAction {
                action,
                n_a: self.n_a(),
            });
        }
        if !self.ready {
            return Err(EnvError::InvalidState);
        }

        let t = self.transitions[&(self.s, action)][0].clone();
        self.s = t.next_state;
        if t.done {
            self.ready = false;
        }
        tracing::trace!(s = self.s, action, reward = t.reward, "Stepped.");

        Ok(StepInfo {
            observation: self.observation(self.s),
            reward: t.reward,
            terminated: t.done,
            info: serde_json::json!({ "prob": t.probability }),
        })
    }

    pub fn action_space_sample(&self) -> Discrete {
        rand::thread_rng().gen_range(0..self.n_a() as Discrete)
    }

    pub fn render(&self, mode: RenderMode) -> RenderFrame {
        match mode {
            RenderMode::Ansi => RenderFrame::Ansi(self.render_ansi()),
            RenderMode::Array => RenderFrame::Array(self.render_array()),
        }
    }

    fn render_ansi(&self) -> String {
        let (_, cols) = self.grid.shape();
        let mut out = String::new();
        for s in 0..self.grid.n_s() as Discrete {
            let coord = self.grid.to_coord(s);
            let marker = if s == self.s {
                " x "
            } else if self.grid.is_goal(coord) {
                " T "
            } else if self.grid.is_hazard(coord) {
                " C "
            } else {
                " o "
            };

            // No padding beyond the row edges.
            let cell = match coord.1 {
                0 => marker.trim_start(),
                c if c == cols - 1 => marker.trim_end(),
                _ => marker,
            };
            out.push_str(cell);
            if coord.1 == cols - 1 {
                out.push('\n');
            }
        }
        out.push('\n');

        out
    }

    // Hazards are written first, then the cursor, then the goal, so the goal
    // marker wins when the agent is standing on it.
    fn render_array(&self) -> Array2<f64> {
        let mut maze = Array2::<f64>::zeros(self.grid.shape());
        for (coord, &hazard) in self.grid.hazard_mask().indexed_iter() {
            if hazard {
                maze[coord] = -1.0;
            }
        }
        maze[self.grid.to_coord(self.s)] = 2.0;
        maze[self.grid.goal()] = 0.5;

        maze
    }
}

impl Default for CliffWalkingEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Mdp for CliffWalkingEnv {
    fn n_s(&self) -> usize {
        self.grid.n_s()
    }

    fn n_a(&self) -> usize {
        DELTAS.len()
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}
