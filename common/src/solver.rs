use crate::{
    error::HanoiError,
    observer::{NoObserver, SolverStep, StepObserver},
    peg::Peg,
    state::PuzzleState,
};

/// Number of moves the classical algorithm needs for `n` disks, `2^n - 1`.
///
/// Returns `None` if the count does not fit into a `u64`.
pub fn expected_move_count(n: u32) -> Option<u64> {
    let count = 1u128.checked_shl(n)? - 1;
    u64::try_from(count).ok()
}

/// Deeper towers are handed to [`solve_with_work_stack`]. Beyond 64 disks the
/// move count no longer fits a `u64`, so only malformed states get there.
const MAX_RECURSION_DEPTH: u32 = 64;

/// Move the whole tower from [`Peg::First`] to [`Peg::Third`] and return the
/// terminal state.
pub fn solve(initial: &PuzzleState) -> Result<PuzzleState, HanoiError> {
    solve_with_observer(initial, &mut NoObserver)
}

/// Like [`solve`], but reports every atomic move to `observer`.
///
/// The recursion is driven by the size of the bottom disk on the first peg.
/// For a puzzle built with [`PuzzleState::new`] that equals the number of
/// disks. Any other configuration may run into an empty peg, in which case the
/// [`HanoiError::EmptySource`] of the offending move is returned.
///
/// Bottom disks larger than 64 are solved on the work stack, with the same
/// moves in the same order.
pub fn solve_with_observer<O>(
    initial: &PuzzleState,
    observer: &mut O,
) -> Result<PuzzleState, HanoiError>
where
    O: StepObserver + ?Sized,
{
    fn inner<O: StepObserver + ?Sized>(
        state: PuzzleState,
        disk_size: u32,
        source: Peg,
        dest: Peg,
        temp: Peg,
        observer: &mut O,
    ) -> Result<PuzzleState, HanoiError> {
        if disk_size == 1 {
            return apply_step(state, source, dest, observer);
        }

        let state = inner(state, disk_size - 1, source, temp, dest, observer)?;
        let state = apply_step(state, source, dest, observer)?;
        inner(state, disk_size - 1, temp, dest, source, observer)
    }

    let disk_size = bottom_disk_size(initial)?;
    if disk_size > MAX_RECURSION_DEPTH {
        log::debug!("bottom disk {disk_size} is too deep to recurse");
        return solve_with_work_stack(initial, observer);
    }
    log::debug!("solving {initial} recursively, bottom disk {disk_size}");

    let result = inner(
        initial.clone(),
        disk_size,
        Peg::First,
        Peg::Third,
        Peg::Second,
        observer,
    )?;

    log::debug!("solved: {result}");
    Ok(result)
}

/// Same moves in the same order as [`solve_with_observer`], but the recursion
/// is simulated on a heap allocated stack so that the call stack depth does
/// not grow with the disk size.
pub fn solve_with_work_stack<O>(
    initial: &PuzzleState,
    observer: &mut O,
) -> Result<PuzzleState, HanoiError>
where
    O: StepObserver + ?Sized,
{
    enum Task {
        Tower {
            disk_size: u32,
            source: Peg,
            dest: Peg,
            temp: Peg,
        },
        Disk {
            source: Peg,
            dest: Peg,
        },
    }

    let disk_size = bottom_disk_size(initial)?;
    log::debug!("solving {initial} with a work stack, bottom disk {disk_size}");

    let mut tasks = vec![Task::Tower {
        disk_size,
        source: Peg::First,
        dest: Peg::Third,
        temp: Peg::Second,
    }];
    let mut state = initial.clone();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Disk { source, dest }
            | Task::Tower {
                disk_size: 1,
                source,
                dest,
                ..
            } => {
                state = apply_step(state, source, dest, observer)?;
            }
            Task::Tower {
                disk_size,
                source,
                dest,
                temp,
            } => {
                // pushed in reverse, the first task to run goes on top
                tasks.push(Task::Tower {
                    disk_size: disk_size - 1,
                    source: temp,
                    dest,
                    temp: source,
                });
                tasks.push(Task::Disk { source, dest });
                tasks.push(Task::Tower {
                    disk_size: disk_size - 1,
                    source,
                    dest: temp,
                    temp: dest,
                });
            }
        }
    }

    log::debug!("solved: {state}");
    Ok(state)
}

fn bottom_disk_size(initial: &PuzzleState) -> Result<u32, HanoiError> {
    initial
        .first()
        .first()
        .map(|disk| disk.size())
        .ok_or(HanoiError::EmptySource { peg: Peg::First })
}

/// Perform one atomic move and report it.
fn apply_step<O: StepObserver + ?Sized>(
    state: PuzzleState,
    source: Peg,
    dest: Peg,
    observer: &mut O,
) -> Result<PuzzleState, HanoiError> {
    let result = state.move_disk(source, dest)?;
    observer.on_step(&SolverStep {
        initial: &state,
        result: &result,
        source,
        destination: dest,
    });
    Ok(result)
}
