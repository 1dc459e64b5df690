/// Possible errors from the SHT31 driver.
#[derive(Debug, PartialEq, Eq)]
pub enum ShtError<E> {
    /// A received CRC did not match the data it covers.
    ///
    /// The whole reading is discarded, even if only one of the two
    /// data groups failed its check.
    ChecksumMismatch,
    /// Error from the I2C bus. A transfer that returns fewer bytes than
    /// requested surfaces here as the HAL's bus error.
    I2c(E),
}

impl<E> From<E> for ShtError<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}
