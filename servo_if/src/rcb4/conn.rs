//! Serial connection to the RCB-4 controller

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::io::{self, Read, Write};
use std::time::Duration;

use log::{debug, info, trace};
use serde::Deserialize;
use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};

use super::{parse_reply, Command, CommandKind, REPLY_LEN};
use crate::bus::{BusError, ServoBus};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters of the serial link to the controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusParams {
    /// Path of the serial device.
    pub port: String,

    /// Baud rate of the link.
    pub baud_rate: u32,

    /// Maximum time to wait for the controller to reply.
    ///
    /// Units: milliseconds
    pub timeout_ms: u64,
}

/// A servo bus backed by an RCB-4 controller on a byte stream, normally a serial port.
pub struct Rcb4Bus<P> {
    port: Option<P>,
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Byte stream the controller is reached over.
pub trait BusPort: Read + Write {
    /// Discard any bytes received but not yet read.
    fn clear_input(&mut self) -> io::Result<()>;
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for BusParams {
    fn default() -> Self {
        Self {
            port: String::from("/dev/ttyUSB0"),
            baud_rate: 115_200,
            timeout_ms: 500,
        }
    }
}

impl BusPort for Box<dyn SerialPort> {
    fn clear_input(&mut self) -> io::Result<()> {
        self.clear(ClearBuffer::Input).map_err(io::Error::from)
    }
}

impl Rcb4Bus<Box<dyn SerialPort>> {
    /// Open the serial port and check the controller is answering.
    pub fn connect(params: &BusParams) -> Result<Self, BusError> {
        info!("Opening {} at {} baud", params.port, params.baud_rate);

        let port = serialport::new(params.port.as_str(), params.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::Even)
            .stop_bits(StopBits::One)
            .timeout(Duration::from_millis(params.timeout_ms))
            .open()
            .map_err(BusError::OpenError)?;

        let mut bus = Self::from_port(port);
        bus.ping()?;

        info!("Controller on {} acknowledged", params.port);

        Ok(bus)
    }
}

impl<P> Rcb4Bus<P>
where
    P: BusPort,
{
    /// Wrap an already open port.
    pub fn from_port(port: P) -> Self {
        Self { port: Some(port) }
    }

    /// Send an `Ack` command and wait for the controller to acknowledge it.
    pub fn ping(&mut self) -> Result<(), BusError> {
        self.transmit(&Command::new(CommandKind::Ack))
    }

    /// Returns true until the bus has been disconnected.
    pub fn connected(&self) -> bool {
        self.port.is_some()
    }

    /// Write a frame and read back the controller's reply.
    fn exchange(&mut self, cmd_code: u8, frame: &[u8]) -> Result<(), BusError> {
        let port = self.port.as_mut().ok_or(BusError::Disconnected)?;

        // A late reply to an earlier exchange would shift this one
        port.clear_input().map_err(BusError::IoError)?;

        trace!("TX {:02X?}", frame);
        port.write_all(frame).map_err(BusError::IoError)?;
        port.flush().map_err(BusError::IoError)?;

        let mut reply = [0u8; REPLY_LEN];
        port.read_exact(&mut reply).map_err(BusError::IoError)?;
        trace!("RX {:02X?}", reply);

        parse_reply(cmd_code, &reply)
    }
}

impl<P> ServoBus for Rcb4Bus<P>
where
    P: BusPort,
{
    fn transmit(&mut self, cmd: &Command) -> Result<(), BusError> {
        if !self.connected() {
            return Err(BusError::Disconnected);
        }

        let frame = cmd.encode()?;
        self.exchange(cmd.kind().code(), &frame)
    }

    fn disconnect(&mut self) {
        // Dropping the port closes it
        if self.port.take().is_some() {
            debug!("Serial port released");
        }
    }
}
