use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fixed pegs of the puzzle. The disks start on `First` and
/// the solver moves them to `Third`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Peg {
    First,
    Second,
    Third,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::First, Peg::Second, Peg::Third];

    /// Position of the peg in storage arrays, in `0..3`
    pub const fn index(self) -> usize {
        match self {
            Peg::First => 0,
            Peg::Second => 1,
            Peg::Third => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Peg::First => "First",
            Peg::Second => "Second",
            Peg::Third => "Third",
        };
        f.write_str(name)
    }
}
