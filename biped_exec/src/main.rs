//! # Biped Walking Executable
//!
//! This executable drives the biped through its walking gait:
//! - Connect to the servo bus controller
//! - Author the gait and move to the standing stance
//! - Stream the gait cycle until Ctrl-C or a command error

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{Result, eyre::{WrapErr, eyre}};
use log::info;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

// Internal
use biped_lib::{
    dispatch::ThreadPacer,
    params::BipedExecParams,
    walk::{self, WalkExit},
    walk_ctrl::WalkCtrl,
};
use servo_if::Rcb4Bus;
use util::{
    host,
    logger::{logger_init, parse_level},
    session::Session,
    time::seconds_to_duration,
};

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "biped_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // ---- LOAD PARAMETERS ----

    let params: BipedExecParams = util::params::load("biped_exec.toml")
        .wrap_err("Could not load biped_exec params")?;

    // Initialise logger
    let log_level = parse_level(&params.log_level)
        .wrap_err("Invalid log level in parameters")?;
    logger_init(log_level, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Biped Walking Executable\n");
    info!(
        "Running on: {:#?}",
        host::get_uname().wrap_err("Failed to get host information")?
    );
    info!("Session directory: {:?}\n", session.session_root);

    info!("Parameters loaded");

    // ---- MODULE INITIALISATION ----

    let settle = seconds_to_duration(params.walk.settle_time_s)
        .ok_or_else(|| eyre!(
            "Settle time must be a non-negative, finite number of seconds, found {}",
            params.walk.settle_time_s
        ))?;

    let mut walk_ctrl = WalkCtrl::new(params.walk.clone())
        .wrap_err("Failed to initialise WalkCtrl")?;
    info!("WalkCtrl init complete");

    if let Some(gait) = walk_ctrl.gait() {
        session.save("gait.json", gait.clone());
    }

    // ---- SIGNAL HANDLING ----

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .wrap_err("Failed to install the Ctrl-C handler")?;
    }

    // ---- BUS INITIALISATION ----

    // Nothing has moved yet, so a connection failure only needs the session closing
    let mut bus = match Rcb4Bus::connect(&params.bus) {
        Ok(b) => b,
        Err(e) => {
            session.exit();
            return Err(e).wrap_err("Connection failed");
        }
    };

    info!("Robot connected");

    // ---- MAIN LOOP ----

    let result = walk::run(&mut bus, &mut walk_ctrl, &mut ThreadPacer, &stop, settle);

    session.exit();

    match result.wrap_err("Walk aborted")? {
        WalkExit::Interrupted { ticks } => {
            info!("Stopped after {} walking postures", ticks);
        }
    }

    Ok(())
}
