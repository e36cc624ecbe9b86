//! Implementations for the WalkCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::{Params, SeqState, Sequencer, Direction, WalkCtrlError};
use crate::gait::{author_gait, Gait, CYCLE_LEN};
use crate::posture::Posture;
use util::module::State;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Walk control module state
#[derive(Default)]
pub struct WalkCtrl {

    pub(crate) params: Params,

    gait: Option<Gait>,

    sequencer: Option<Sequencer>,

    seq_state: SeqState,

    /// Number of completed cycles.
    tick: u64,
}

/// Output of one WalkCtrl cycle: the posture to dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputData {
    /// Index of the gait phase selected on this cycle.
    pub phase: usize,

    pub posture: Posture,
}

/// Status report for WalkCtrl processing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusReport {
    /// Index of this cycle, starting from zero.
    pub tick: u64,

    /// Sequencer state after this cycle.
    pub seq: SeqState,

    /// Raised on the cycle where the sequencer changed direction.
    pub reversed: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for WalkCtrl {
    type InitData = Params;
    type InitError = WalkCtrlError;

    type InputData = ();
    type OutputData = OutputData;
    type StatusReport = StatusReport;
    type ProcError = WalkCtrlError;

    /// Initialise the WalkCtrl module.
    ///
    /// Authors the gait and resets the sequencer to the start of its ramp.
    fn init(&mut self, init_data: Self::InitData) -> Result<(), Self::InitError> {
        let sequencer = Sequencer::new(init_data.cycles_to_goal, CYCLE_LEN)?;
        let gait = author_gait(&init_data.gait);

        debug!(
            "Gait authored with {} phases, ramp goal {}",
            gait.cycle.len(),
            sequencer.goal()
        );

        self.params = init_data;
        self.gait = Some(gait);
        self.sequencer = Some(sequencer);
        self.seq_state = SeqState::default();
        self.tick = 0;

        Ok(())
    }

    /// Select the posture for this cycle and advance the sequencer.
    fn proc(&mut self, _input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let (gait, sequencer) = match (&self.gait, &self.sequencer) {
            (Some(g), Some(s)) => (g, s),
            _ => return Err(WalkCtrlError::NotInitialised),
        };

        let (phase, next) = sequencer.advance(self.seq_state);
        let reversed = next.dir != self.seq_state.dir;

        let output = OutputData {
            phase,
            posture: *gait.cycle.phase(phase),
        };
        let report = StatusReport {
            tick: self.tick,
            seq: next,
            reversed,
        };

        trace!(
            "WalkCtrl tick {}: phase {}, progress {} -> {}",
            self.tick, phase, self.seq_state.progress, next.progress
        );
        if reversed {
            debug!(
                "Sequencer reversed at progress {}, now {}",
                next.progress,
                match next.dir {
                    Direction::Forward => "ramping up",
                    Direction::Reverse => "ramping down",
                }
            );
        }

        self.seq_state = next;
        self.tick += 1;

        Ok((output, report))
    }
}

impl WalkCtrl {
    /// Create and initialise a new WalkCtrl.
    pub fn new(params: Params) -> Result<Self, WalkCtrlError> {
        let mut ctrl = Self::default();
        ctrl.init(params)?;
        Ok(ctrl)
    }

    /// The authored gait, once initialised.
    pub fn gait(&self) -> Option<&Gait> {
        self.gait.as_ref()
    }

    /// The stance posture to reach before walking.
    pub fn home(&self) -> Result<&Posture, WalkCtrlError> {
        self.gait
            .as_ref()
            .map(|g| &g.home)
            .ok_or(WalkCtrlError::NotInitialised)
    }

    /// Time to wait in the stance before walking.
    pub fn settle_time_s(&self) -> f64 {
        self.params.settle_time_s
    }
}
