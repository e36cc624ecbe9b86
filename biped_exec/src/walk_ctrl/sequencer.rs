//! Triangle wave walking sequencer
//!
//! A progress counter ramps up from zero to the goal one tick at a time and back down again,
//! forever. The phase of the gait cycle to send on each tick is the progress wrapped onto the
//! cycle length.

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Fixed configuration of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    goal: i64,
    cycle_len: usize,
}

/// State carried from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqState {
    pub progress: i64,
    pub dir: Direction,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Direction the progress counter is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SequencerError {
    #[error("The ramp goal must be positive, found {0}")]
    InvalidGoal(i64),

    #[error("The cycle length must be even and non-zero, found {0}")]
    InvalidCycleLen(usize),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Direction {
    /// The step applied to the progress counter.
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

impl Default for SeqState {
    fn default() -> Self {
        Self {
            progress: 0,
            dir: Direction::Forward,
        }
    }
}

impl Sequencer {
    pub fn new(goal: i64, cycle_len: usize) -> Result<Self, SequencerError> {
        if goal <= 0 {
            return Err(SequencerError::InvalidGoal(goal));
        }
        if cycle_len == 0 || cycle_len % 2 != 0 {
            return Err(SequencerError::InvalidCycleLen(cycle_len));
        }

        Ok(Self { goal, cycle_len })
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    /// Perform one tick.
    ///
    /// Returns the phase to send on this tick and the state for the next tick.
    pub fn advance(&self, state: SeqState) -> (usize, SeqState) {
        let phase = state.progress.rem_euclid(self.cycle_len as i64) as usize;

        let progress = state.progress + state.dir.step();
        let dir = if progress >= self.goal {
            Direction::Reverse
        }
        else if progress <= 0 {
            Direction::Forward
        }
        else {
            state.dir
        };

        (phase, SeqState { progress, dir })
    }
}
