//! Tower of Hanoi with three pegs: an immutable puzzle state, the classical
//! recursive solver and a way to watch it move disk by disk.

pub mod disk;
pub mod error;
pub mod observer;
pub mod peg;
pub mod replay;
pub mod solver;
pub mod state;

pub use disk::Disk;
pub use error::HanoiError;
pub use observer::{NoObserver, SolverStep, StepObserver};
pub use peg::Peg;
pub use replay::{Direction, Move, Replay, StepRecorder};
pub use solver::{expected_move_count, solve, solve_with_observer, solve_with_work_stack};
pub use state::PuzzleState;
