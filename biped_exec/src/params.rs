//! # Biped Executable Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;
use servo_if::BusParams;

use crate::walk_ctrl;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BipedExecParams {

    /// Minimum log level, one of `info`, `debug` or `trace`
    pub log_level: String,

    /// Serial link to the servo bus controller
    pub bus: BusParams,

    /// Walk control and gait tuning
    pub walk: walk_ctrl::Params,
}

impl Default for BipedExecParams {
    fn default() -> Self {
        Self {
            log_level: String::from("debug"),
            bus: BusParams::default(),
            walk: walk_ctrl::Params::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_params_file_parses() {
        let params: BipedExecParams = toml::from_str(
            include_str!("../../params/biped_exec.toml")
        ).unwrap();

        assert_eq!(params.bus.port, "/dev/ttyUSB0");
        assert_eq!(params.walk.cycles_to_goal, 70);
        assert_eq!(params.walk.gait, crate::gait::GaitParams::default());
    }

    #[test]
    fn test_empty_params_use_defaults() {
        let params: BipedExecParams = toml::from_str("").unwrap();

        assert_eq!(params.log_level, "debug");
        assert_eq!(params.bus.baud_rate, 115_200);
        assert_eq!(params.walk.settle_time_s, 1.0);
    }
}
