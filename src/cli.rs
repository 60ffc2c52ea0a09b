use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, bail};
use clap::Parser;
use common::{
    Direction, PuzzleState, Replay, StepRecorder, expected_move_count, solve_with_observer,
    solve_with_work_stack,
};

use crate::render::draw_frame;

/// 2^20 recorded states is about as much as a terminal replay is good for
const MAX_DISKS: i64 = 20;

/// Solve the Tower of Hanoi and draw every move in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Number of disks stacked on the first peg, every state is kept in memory
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=MAX_DISKS))]
    pub disks: u32,

    /// Pause between two frames, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Write the recorded states and moves as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Only print the final state
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run the solver on an explicit work stack instead of recursing
    #[arg(long)]
    pub work_stack: bool,
}

/// Solve the puzzle described by `args` and return the recorded replay.
pub fn record(args: &Args) -> anyhow::Result<Replay> {
    let initial = PuzzleState::new(args.disks).context("Cannot set up the puzzle")?;
    match expected_move_count(args.disks) {
        Some(total) => log::info!("solving {} disks in {total} moves", args.disks),
        None => log::warn!("{} disks need more than u64::MAX moves", args.disks),
    }

    let mut recorder = StepRecorder::new(initial.clone());
    let solved = if args.work_stack {
        solve_with_work_stack(&initial, &mut recorder)
    } else {
        solve_with_observer(&initial, &mut recorder)
    };
    solved.context("Solver failed")?;

    let replay = recorder.into_replay();
    if !replay.verify() {
        bail!("Recorded moves do not reproduce the recorded states");
    }
    Ok(replay)
}

pub fn write_replay_json(replay: &Replay, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create replay file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, replay)
        .with_context(|| format!("Cannot write replay to {}", path.display()))?;
    writer.flush()?;
    log::info!("wrote {} states to {}", replay.len(), path.display());
    Ok(())
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut replay = record(args)?;

    if let Some(path) = &args.json {
        write_replay_json(&replay, path)?;
    }

    if args.quiet {
        replay.scroll_to(replay.len() - 1)?;
        println!("{}", draw_frame(&replay));
        return Ok(());
    }

    println!("{}", draw_frame(&replay));
    while replay.step(Direction::Forward).is_some() {
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
        println!("{}", draw_frame(&replay));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn args(disks: u32) -> Args {
        let disks = disks.to_string();
        Args::parse_from(["hanoi", "--disks", disks.as_str()])
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["hanoi"]);
        assert_eq!(args.disks, 3);
        assert_eq!(args.delay_ms, 0);
        assert!(args.json.is_none());
        assert!(!args.quiet && !args.work_stack);
    }

    #[test]
    fn test_record() {
        let replay = record(&args(4)).unwrap();
        assert_eq!(replay.len(), 16);
        assert!(replay.states()[15].is_solved());
    }

    #[test]
    fn test_work_stack_records_the_same_replay() {
        let mut work_stack = args(5);
        work_stack.work_stack = true;
        assert_eq!(record(&work_stack).unwrap(), record(&args(5)).unwrap());
    }

    #[test]
    fn test_disk_count_is_bounded() {
        assert!(Args::try_parse_from(["hanoi", "--disks", "0"]).is_err());
        assert!(Args::try_parse_from(["hanoi", "--disks", "40"]).is_err());
        assert_eq!(Args::try_parse_from(["hanoi", "-d", "20"]).unwrap().disks, 20);
    }

    #[test]
    fn test_zero_disks_fail() {
        let mut args = args(1);
        args.disks = 0;
        let err = record(&args).unwrap_err();
        assert!(format!("{err:#}").contains("at least one disk"));
    }

    #[test]
    fn test_write_replay_json() {
        let replay = record(&args(2)).unwrap();

        let tempdir = tempdir().unwrap();
        let filename = tempdir.path().join("replay.json");
        write_replay_json(&replay, &filename).unwrap();

        let json: serde_json::Value =
            serde_json::from_reader(File::open(&filename).unwrap()).unwrap();
        assert_eq!(json["states"].as_array().unwrap().len(), 4);
        assert_eq!(json["states"][3]["pegs"], serde_json::json!([[], [], [2, 1]]));
        assert_eq!(
            json["moves"][0],
            serde_json::json!({ "source": "First", "destination": "Second" })
        );
    }

    #[test]
    fn test_run_quiet_with_json() {
        let tempdir = tempdir().unwrap();
        let filename = tempdir.path().join("out.json");
        let args = Args::parse_from([
            "hanoi",
            "--disks",
            "3",
            "--quiet",
            "--no-color",
            "--json",
            filename.to_str().unwrap(),
        ]);

        run(&args).unwrap();
        assert!(filename.is_file());
    }
}
