use bitfield_struct::bitfield;

/// Contents of the 16-bit status register.
///
/// Read with [`Sht31::status`](crate::Sht31::status); the sticky alert and
/// reset flags are cleared with [`Sht31::clear_status`](crate::Sht31::clear_status).
#[bitfield(u16)]
pub struct Status {
    /// The last write transfer failed its checksum.
    #[bits(1)]
    pub write_checksum_failed: bool,
    /// The last command was not processed by the sensor.
    #[bits(1)]
    pub command_failed: bool,
    #[bits(2, default = 0, access = RO)]
    rsvd: u8,
    /// A system reset occurred since the status register was last cleared.
    #[bits(1)]
    pub reset_detected: bool,
    #[bits(5, default = 0, access = RO)]
    rsvd2: u8,
    /// Temperature tracking alert.
    #[bits(1)]
    pub temperature_alert: bool,
    /// Humidity tracking alert.
    #[bits(1)]
    pub humidity_alert: bool,
    #[bits(1, default = false, access = RO)]
    rsvd3: bool,
    /// The internal heater is switched on.
    #[bits(1)]
    pub heater_on: bool,
    #[bits(1, default = false, access = RO)]
    rsvd4: bool,
    /// At least one alert is pending.
    #[bits(1)]
    pub alert_pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_value() {
        // Register value after power-up or soft reset.
        let status = Status::from_bits(0x8010);
        assert!(status.alert_pending());
        assert!(status.reset_detected());
        assert!(!status.heater_on());
        assert!(!status.write_checksum_failed());
    }

    #[test]
    fn heater_bit() {
        let status = Status::from_bits(0x2000);
        assert!(status.heater_on());
        assert!(!status.alert_pending());
    }
}
