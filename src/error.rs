use core::fmt;

/// Conditions that stop the boot. None of them are retried; they end in [`crate::panic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    /// PHY self-initialisation reported failure.
    RadioInit,
    /// Bootloader reported a band code outside the frequency table.
    UnsupportedBand(u8),
    /// PHY rejected the air data rate.
    RadioConfigure { air_speed_bps: u32 },
    ReceiverOn,
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::RadioInit => write!(f, "radio_initialise failed"),
            FatalError::UnsupportedBand(code) => write!(f, "bad board frequency {}", code),
            FatalError::RadioConfigure { air_speed_bps } => {
                write!(f, "radio_configure failed ({} bps)", air_speed_bps)
            }
            FatalError::ReceiverOn => write!(f, "failed to enable receiver"),
        }
    }
}
