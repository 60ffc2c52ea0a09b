use colored::Colorize;
use common::{Disk, Peg, PuzzleState, Replay};

/// Draw the three pegs side by side as ASCII towers. The top disk of
/// `highlight` is colored, which is where the last move put a disk.
pub fn draw_state(state: &PuzzleState, highlight: Option<Peg>) -> String {
    let height = state.disk_count();
    let max_size = state
        .pegs()
        .iter()
        .flatten()
        .map(|d| d.size() as usize)
        .max()
        .unwrap_or(0);
    let column_width = 2 * max_size + 1;

    let mut lines = vec![];
    // one row above the tallest possible tower so the pole tip is visible
    for row in (0..=height).rev() {
        let cells: Vec<String> = Peg::ALL
            .into_iter()
            .map(|peg| {
                let disks = state.peg(peg);
                match disks.get(row) {
                    Some(&disk) => {
                        let is_top = row + 1 == disks.len();
                        draw_disk(disk, max_size, highlight == Some(peg) && is_top)
                    }
                    None => format!("{0}|{0}", " ".repeat(max_size)),
                }
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.push("-".repeat(3 * column_width + 2));

    lines.join("\n")
}

fn draw_disk(disk: Disk, max_size: usize, highlight: bool) -> String {
    let size = disk.size() as usize;
    let padding = " ".repeat(max_size.saturating_sub(size));
    let body = "=".repeat(2 * size + 1);
    if highlight {
        format!("{padding}{}{padding}", body.on_red())
    } else {
        format!("{padding}{body}{padding}")
    }
}

/// Text shown below the towers, e.g. `Move 2/3: First -> Third  [2][][1]`
pub fn frame_label(replay: &Replay) -> String {
    let total = replay.moves().len();
    let position = replay.position();
    match replay.move_into(position) {
        Some(mv) => format!(
            "Move {position}/{total}: {} -> {}  {}",
            mv.source,
            mv.destination,
            replay.current()
        ),
        None => format!("Start  {}", replay.current()),
    }
}

/// The current state of the replay, with the last moved disk highlighted.
pub fn draw_frame(replay: &Replay) -> String {
    let highlight = replay
        .move_into(replay.position())
        .map(|mv| mv.destination);
    format!(
        "{}\n{}\n",
        draw_state(replay.current(), highlight),
        frame_label(replay)
    )
}
