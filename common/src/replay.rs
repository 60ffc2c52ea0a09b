//! Recording a solve and stepping through it afterwards.

use serde::{Deserialize, Serialize};

use crate::{
    error::HanoiError,
    observer::{SolverStep, StepObserver},
    peg::Peg,
    state::PuzzleState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// An atomic move, without the states around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Peg,
    pub destination: Peg,
}

/// Observer that keeps every state the solver passes through.
#[derive(Debug, Clone)]
pub struct StepRecorder {
    states: Vec<PuzzleState>,
    moves: Vec<Move>,
}

impl StepRecorder {
    /// `initial` must be the state the solve starts from.
    pub fn new(initial: PuzzleState) -> Self {
        StepRecorder {
            states: vec![initial],
            moves: vec![],
        }
    }

    pub fn into_replay(self) -> Replay {
        Replay {
            states: self.states,
            moves: self.moves,
            cursor: 0,
        }
    }
}

impl StepObserver for StepRecorder {
    fn on_step(&mut self, step: &SolverStep<'_>) {
        if self.states.last() != Some(step.initial) {
            log::warn!(
                "step {} does not continue from the last recorded state",
                self.moves.len() + 1
            );
        }
        self.moves.push(step.as_move());
        self.states.push(step.result.clone());
    }
}

/// The recorded trajectory of a solve: the initial state followed by one
/// state per move, plus a cursor pointing at the state currently shown.
///
/// Invariant: `states.len() == moves.len() + 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    states: Vec<PuzzleState>,
    moves: Vec<Move>,
    #[serde(skip)]
    cursor: usize,
}

impl Replay {
    /// Number of recorded states, including the initial one
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false, there is at least the initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[PuzzleState] {
        &self.states
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn current(&self) -> &PuzzleState {
        &self.states[self.cursor]
    }

    /// Index of the current state, 0 is the initial state.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn can_step(&self, dir: Direction) -> bool {
        match dir {
            Direction::Forward => self.cursor + 1 < self.states.len(),
            Direction::Backward => self.cursor > 0,
        }
    }

    /// Move the cursor by one state. Returns `None` and stays put when the
    /// end of the timeline is reached in that direction.
    pub fn step(&mut self, dir: Direction) -> Option<&PuzzleState> {
        if !self.can_step(dir) {
            return None;
        }

        match dir {
            Direction::Forward => self.cursor += 1,
            Direction::Backward => self.cursor -= 1,
        }
        log::debug!("stepped {dir:?} to state {}", self.cursor);
        Some(self.current())
    }

    pub fn scroll_to(&mut self, index: usize) -> Result<&PuzzleState, HanoiError> {
        if index >= self.states.len() {
            return Err(HanoiError::invalid_argument(format!(
                "replay has {} states, cannot scroll to {index}",
                self.states.len()
            )));
        }

        self.cursor = index;
        Ok(self.current())
    }

    /// The move that produced the state at `index`. The initial state has
    /// none.
    pub fn move_into(&self, index: usize) -> Option<Move> {
        self.moves.get(index.checked_sub(1)?).copied()
    }

    /// Apply every recorded move to its preceding state again and check that
    /// the recorded results agree.
    pub fn verify(&self) -> bool {
        if self.states.len() != self.moves.len() + 1 {
            log::warn!(
                "replay holds {} states for {} moves",
                self.states.len(),
                self.moves.len()
            );
            return false;
        }

        for (i, mv) in self.moves.iter().enumerate() {
            match self.states[i].move_disk(mv.source, mv.destination) {
                Ok(next) if next == self.states[i + 1] => {}
                Ok(_) => {
                    log::warn!("move {} does not lead to the recorded state", i + 1);
                    return false;
                }
                Err(e) => {
                    log::warn!("move {} cannot be replayed: {e}", i + 1);
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{expected_move_count, solve_with_observer};

    fn replay(n: u32) -> Replay {
        let initial = PuzzleState::new(n).unwrap();
        let mut recorder = StepRecorder::new(initial.clone());
        solve_with_observer(&initial, &mut recorder).unwrap();
        recorder.into_replay()
    }

    #[test]
    fn test_records_every_state() {
        let r = replay(3);

        assert_eq!(r.len() as u64, expected_move_count(3).unwrap() + 1);
        assert_eq!(r.moves().len(), 7);
        assert_eq!(r.states()[0], PuzzleState::new(3).unwrap());
        assert!(r.states()[7].is_solved());
        assert!(r.verify());
    }

    #[test]
    fn test_step_forward_and_backward() {
        let mut r = replay(2);

        assert_eq!(r.position(), 0);
        assert!(!r.can_step(Direction::Backward));
        assert!(r.step(Direction::Backward).is_none());

        let state = r.step(Direction::Forward).unwrap();
        assert_eq!(state.to_string(), "[2][1][]");
        assert_eq!(r.position(), 1);

        r.step(Direction::Forward);
        r.step(Direction::Forward);
        assert_eq!(r.current().to_string(), "[][][2, 1]");
        assert!(!r.can_step(Direction::Forward));
        assert!(r.step(Direction::Forward).is_none());
        assert_eq!(r.position(), 3);

        let state = r.step(Direction::Backward).unwrap();
        assert_eq!(state.to_string(), "[][1][2]");
    }

    #[test]
    fn test_scroll_to() {
        let mut r = replay(2);

        assert_eq!(r.scroll_to(2).unwrap().to_string(), "[][1][2]");
        assert_eq!(r.position(), 2);

        assert!(matches!(
            r.scroll_to(4),
            Err(HanoiError::InvalidArgument { .. })
        ));
        assert_eq!(r.position(), 2, "a failed scroll keeps the cursor");
    }

    #[test]
    fn test_move_into() {
        let r = replay(2);

        assert_eq!(r.move_into(0), None);
        assert_eq!(
            r.move_into(1),
            Some(Move {
                source: Peg::First,
                destination: Peg::Second
            })
        );
        assert_eq!(
            r.move_into(3),
            Some(Move {
                source: Peg::Second,
                destination: Peg::Third
            })
        );
        assert_eq!(r.move_into(4), None);
    }

    #[test]
    fn test_verify_detects_tampering() {
        let mut r = replay(2);
        r.moves[1] = Move {
            source: Peg::First,
            destination: Peg::Second,
        };
        assert!(!r.verify());

        let mut r = replay(2);
        r.states.pop();
        assert!(!r.verify());
    }

    #[test]
    fn test_json_export_skips_cursor() {
        let mut r = replay(1);
        r.step(Direction::Forward);

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "states": [
                    { "pegs": [[1], [], []] },
                    { "pegs": [[], [], [1]] },
                ],
                "moves": [
                    { "source": "First", "destination": "Third" },
                ],
            })
        );
    }
}
