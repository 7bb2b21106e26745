extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod envs;
pub mod grid;
pub mod mdps;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub type Discrete = i32;
pub type Continous = f64;

/// A state as seen by an agent: the [row, col] coordinate of the current cell.
pub type Observation = [f32; 2];

/// Outcome of taking an action in a state. Deterministic environments always
/// report `probability` 1.0 and exactly one entry per (state, action) pair;
/// the list shape is kept so stochastic MDPs fit the same consumer contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: f64,
    pub done: bool,
}

pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

#[derive(Debug)]
pub struct StepInfo {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub info: Value,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Ansi,
    Array,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderFrame {
    Ansi(String),
    Array(Array2<f64>),
}

impl RenderFrame {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RenderFrame::Ansi(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array2<f64>> {
        match self {
            RenderFrame::Array(a) => Some(a),
            _ => None,
        }
    }
}
