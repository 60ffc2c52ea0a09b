use crate::{peg::Peg, replay::Move, state::PuzzleState};

/// A single atomic move performed by the solver, handed to a
/// [`StepObserver`] at the moment it happens.
#[derive(Debug, Clone, Copy)]
pub struct SolverStep<'a> {
    pub initial: &'a PuzzleState,
    pub result: &'a PuzzleState,
    pub source: Peg,
    pub destination: Peg,
}

impl SolverStep<'_> {
    pub fn as_move(&self) -> Move {
        Move {
            source: self.source,
            destination: self.destination,
        }
    }
}

/// Receives every atomic move of a solve, synchronously and in the order the
/// moves are applied. Observers can only watch, they cannot alter or veto a
/// move.
///
/// Any `FnMut(&SolverStep)` closure is an observer.
pub trait StepObserver {
    fn on_step(&mut self, step: &SolverStep<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&SolverStep<'_>),
{
    fn on_step(&mut self, step: &SolverStep<'_>) {
        self(step)
    }
}

/// Observer that ignores all steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl StepObserver for NoObserver {
    fn on_step(&mut self, _step: &SolverStep<'_>) {}
}
