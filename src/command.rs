/// I2C slave address of the SHT31, selected by the ADDR pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Address {
    /// ADDR pin pulled low (0x44). Factory default.
    #[default]
    Low,
    /// ADDR pin pulled high (0x45).
    High,
}

impl Address {
    pub(crate) const fn value(self) -> u8 {
        match self {
            Address::Low => 0x44,
            Address::High => 0x45,
        }
    }
}

/// Commands understood by the sensor, each a fixed 16-bit code sent
/// big-endian on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Single-shot measurement, high repeatability, no clock stretching.
    MeasureHighRep,
    SoftReset,
    HeaterEnable,
    HeaterDisable,
    ReadStatus,
    ClearStatus,
}

impl Command {
    pub(crate) const fn bytes(self) -> [u8; 2] {
        match self {
            // 4.3 Measurement Commands for Single Shot Data Acquisition Mode
            Command::MeasureHighRep => [0x24, 0x00],

            // 4.9 Soft Reset
            Command::SoftReset => [0x30, 0xA2],

            // 4.10 Heater
            Command::HeaterEnable => [0x30, 0x6D],
            Command::HeaterDisable => [0x30, 0x66],

            // 4.11 Status Register
            Command::ReadStatus => [0xF3, 0x2D],
            Command::ClearStatus => [0x30, 0x41],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_values() {
        assert_eq!(Address::default().value(), 0x44);
        assert_eq!(Address::High.value(), 0x45);
    }

    #[test]
    fn command_codes() {
        assert_eq!(Command::MeasureHighRep.bytes(), [0x24, 0x00]);
        assert_eq!(Command::SoftReset.bytes(), [0x30, 0xA2]);
        assert_eq!(Command::HeaterEnable.bytes(), [0x30, 0x6D]);
        assert_eq!(Command::HeaterDisable.bytes(), [0x30, 0x66]);
        assert_eq!(Command::ReadStatus.bytes(), [0xF3, 0x2D]);
        assert_eq!(Command::ClearStatus.bytes(), [0x30, 0x41]);
    }
}
