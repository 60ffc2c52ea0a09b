use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{disk::Disk, error::HanoiError, peg::Peg};

/// Immutable snapshot of the three pegs.
///
/// Each peg is a stack: index 0 is the bottom disk and the last element is
/// the top. In a legally constructed puzzle every size `1..=N` occurs exactly
/// once and sizes strictly decrease towards the top, but nothing here enforces
/// that. [`PuzzleState::is_legal`] checks it on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleState {
    pegs: [Vec<Disk>; 3],
}

impl PuzzleState {
    /// The classical starting position: disks `number_of_disks..=1` stacked
    /// on [`Peg::First`], largest at the bottom.
    pub fn new(number_of_disks: u32) -> Result<Self, HanoiError> {
        if number_of_disks < 1 {
            return Err(HanoiError::invalid_argument(
                "a puzzle needs at least one disk",
            ));
        }

        let first = (1..=number_of_disks).rev().filter_map(Disk::new).collect();
        Ok(Self::from_pegs(first, vec![], vec![]))
    }

    /// Build a state from explicit stacks. No validation is done.
    pub fn from_pegs(first: Vec<Disk>, second: Vec<Disk>, third: Vec<Disk>) -> Self {
        PuzzleState {
            pegs: [first, second, third],
        }
    }

    /// Move the top disk of `from` onto `to`, returning the resulting state.
    ///
    /// The move is not checked against the stacking rule, a larger disk can be
    /// put on a smaller one. Use [`PuzzleState::is_legal_move`] for that.
    pub fn move_disk(&self, from: Peg, to: Peg) -> Result<PuzzleState, HanoiError> {
        if from == to {
            return Err(HanoiError::invalid_argument(format!(
                "cannot move a disk from peg {from} onto itself"
            )));
        }

        let mut next = self.clone();
        let disk = next.pegs[from.index()]
            .pop()
            .ok_or(HanoiError::EmptySource { peg: from })?;
        next.pegs[to.index()].push(disk);

        log::trace!("moved disk {disk} from {from} to {to}");
        Ok(next)
    }

    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }
    pub fn first(&self) -> &[Disk] {
        self.peg(Peg::First)
    }
    pub fn second(&self) -> &[Disk] {
        self.peg(Peg::Second)
    }
    pub fn third(&self) -> &[Disk] {
        self.peg(Peg::Third)
    }
    pub fn pegs(&self) -> &[Vec<Disk>; 3] {
        &self.pegs
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.peg(peg).last().copied()
    }

    /// Number of disks on all pegs combined
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Would moving from `from` to `to` respect the classical rule, i.e. is
    /// there a disk to move and is it smaller than the destination's top?
    pub fn is_legal_move(&self, from: Peg, to: Peg) -> bool {
        if from == to {
            return false;
        }
        match (self.top(from), self.top(to)) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moved), Some(below)) => moved < below,
        }
    }

    /// Check that sizes `1..=N` each appear exactly once and that every peg
    /// is stacked with strictly decreasing sizes.
    pub fn is_legal(&self) -> bool {
        let stacked = self
            .pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]));
        if !stacked {
            return false;
        }

        let mut sizes: Vec<u32> = self.pegs.iter().flatten().map(|d| d.size()).collect();
        sizes.sort_unstable();
        sizes.iter().copied().eq(1..=sizes.len() as u32)
    }

    /// All disks are on the third peg, in legal order.
    pub fn is_solved(&self) -> bool {
        self.first().is_empty() && self.second().is_empty() && self.is_legal()
    }
}

/// One-line summary, e.g. `[2, 1][][]` for the two disk start position.
impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            f.write_str("[")?;
            for (i, disk) in peg.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{disk}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
