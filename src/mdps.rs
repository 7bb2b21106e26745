use crate::*;
use rand::Rng;
use std::rc::Rc;

/// Markov Decision Process - Sutton & Barto 2018.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    fn transitions(&self) -> Rc<Transitions>;
}

pub trait Policy {
    fn policy(&self, s: &Observation) -> Discrete;
}

/// Picks actions uniformly, ignoring the observation.
pub struct RandomPolicy {
    pub n_a: usize,
}

impl Policy for RandomPolicy {
    fn policy(&self, _s: &Observation) -> Discrete {
        rand::thread_rng().gen_range(0..self.n_a as Discrete)
    }
}
