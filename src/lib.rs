//! SHT31 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Sensirion SHT31
//! temperature and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - CRC-validated measurement and status reads
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`DelayNs`] for the fixed sensor settling times
//!
//! The I2C bus itself is owned by the platform: configure it for 100 kHz
//! with pull-ups through your HAL before handing it to the driver.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod error;
pub mod sht31;
pub mod status;

pub use command::Address;
pub use error::ShtError;
pub use sht31::{RawReading, Reading, Sht31};
pub use status::Status;
