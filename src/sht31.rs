use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::command::{Address, Command};
use crate::error::ShtError;
use crate::status::Status;

/// Settling time (in milliseconds) after a soft reset before the sensor
/// accepts the next command.
const SOFT_RESET_DELAY_MS: u32 = 10;

/// Conversion time (in milliseconds) for a high-repeatability measurement.
///
/// The sensor exposes no ready signal on the bus, so the driver waits this
/// fixed time instead of polling.
const MEASUREMENT_DELAY_MS: u32 = 50;

/// CRC polynomial x^8 + x^5 + x^4 + 1, per the Sensirion datasheet.
const CRC8_POLYNOMIAL: u8 = 0x31;

/// Driver for the SHT31 temperature and humidity sensor.
pub struct Sht31<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

/// Reading returned by the SHT31 sensor.
///
/// Both fields are always valid: a reading whose frame fails either
/// checksum is rejected as a whole and never constructed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

/// Raw 16-bit sensor codes, checksum-validated but not yet converted to
/// physical units.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawReading {
    /// Raw temperature code (ST).
    pub temperature: u16,
    /// Raw relative humidity code (SRH).
    pub relative_humidity: u16,
}

impl RawReading {
    /// Converts the raw codes into physical units.
    pub fn convert(self) -> Reading {
        Reading {
            temperature: convert_temperature(self.temperature),
            relative_humidity: convert_humidity(self.relative_humidity),
        }
    }
}

impl<I2C, D> Sht31<I2C, D>
where
    I2C: I2c<SevenBitAddress>,
    D: DelayNs,
{
    /// Creates a new instance of the SHT31 driver.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to. The bus itself
    ///   (clock rate, pull-ups, pin muxing) must already be configured by
    ///   the platform HAL; the sensor runs at 100 kHz nominal.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `address` - The slave address selected by the ADDR pin.
    pub fn new(i2c: I2C, delay: D, address: Address) -> Self {
        Sht31 {
            i2c,
            delay,
            address: address.value(),
        }
    }

    /// Brings the sensor into a known state.
    ///
    /// Issues a soft reset, waits out the settling time and reads the
    /// status register once to confirm the sensor is responding. The
    /// status contents are discarded; only the CRC-clean reply matters.
    pub fn init(&mut self) -> Result<(), ShtError<I2C::Error>> {
        self.reset()?;
        self.status()?;
        Ok(())
    }

    /// Soft-resets the sensor and waits for it to settle.
    pub fn reset(&mut self) -> Result<(), ShtError<I2C::Error>> {
        self.command(Command::SoftReset)?;
        self.delay.delay_ms(SOFT_RESET_DELAY_MS);
        Ok(())
    }

    /// Takes a temperature and humidity measurement.
    ///
    /// This performs the complete exchange: sending the high-repeatability
    /// measurement command, blocking for the fixed conversion time,
    /// reading the 6-byte frame, validating both checksums, and converting
    /// the raw codes to physical units.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and both checksums are valid.
    /// * `Err(ShtError)` if a bus or checksum error occurs. The driver never
    ///   retries; re-invoke to try again.
    pub fn read(&mut self) -> Result<Reading, ShtError<I2C::Error>> {
        Ok(self.read_raw()?.convert())
    }

    /// Takes a measurement and returns the checksum-validated raw codes.
    pub fn read_raw(&mut self) -> Result<RawReading, ShtError<I2C::Error>> {
        self.command(Command::MeasureHighRep)?;
        self.delay.delay_ms(MEASUREMENT_DELAY_MS);

        // [temp_hi, temp_lo, temp_crc, hum_hi, hum_lo, hum_crc]
        let mut frame = [0u8; 6];
        self.i2c.read(self.address, &mut frame)?;

        if frame[2] != crc8(&frame[0..2]) || frame[5] != crc8(&frame[3..5]) {
            return Err(ShtError::ChecksumMismatch);
        }

        Ok(RawReading {
            temperature: u16::from_be_bytes([frame[0], frame[1]]),
            relative_humidity: u16::from_be_bytes([frame[3], frame[4]]),
        })
    }

    /// Measures and returns only the temperature in degrees Celsius.
    ///
    /// This is a full measurement exchange; calling this and
    /// [`relative_humidity`](Self::relative_humidity) in sequence performs
    /// two independent bus transactions.
    pub fn temperature(&mut self) -> Result<f32, ShtError<I2C::Error>> {
        Ok(self.read()?.temperature)
    }

    /// Measures and returns only the relative humidity in percent.
    pub fn relative_humidity(&mut self) -> Result<f32, ShtError<I2C::Error>> {
        Ok(self.read()?.relative_humidity)
    }

    /// Switches the internal heater on or off. No reply is expected.
    pub fn set_heater(&mut self, on: bool) -> Result<(), ShtError<I2C::Error>> {
        self.command(if on {
            Command::HeaterEnable
        } else {
            Command::HeaterDisable
        })
    }

    /// Reads the status register.
    pub fn status(&mut self) -> Result<Status, ShtError<I2C::Error>> {
        self.command(Command::ReadStatus)?;
        let mut reply = [0u8; 3];
        self.i2c.read(self.address, &mut reply)?;
        if reply[2] != crc8(&reply[0..2]) {
            return Err(ShtError::ChecksumMismatch);
        }
        Ok(Status::from_bits(u16::from_be_bytes([reply[0], reply[1]])))
    }

    /// Clears the sticky alert and reset flags in the status register.
    pub fn clear_status(&mut self) -> Result<(), ShtError<I2C::Error>> {
        self.command(Command::ClearStatus)
    }

    /// Consumes the driver and returns the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Sends a 2-byte command.
    fn command(&mut self, command: Command) -> Result<(), ShtError<I2C::Error>> {
        self.i2c.write(self.address, &command.bytes())?;
        Ok(())
    }
}

fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * (raw as f32 / 65535.0)
}

fn convert_humidity(raw: u16) -> f32 {
    100.0 * (raw as f32 / 65535.0)
}

/// CRC-8 over `data`: seed 0xFF, polynomial 0x31, MSB first, no reflection.
fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ CRC8_POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
