use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

/// How far boot got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BootStage {
    Reset = 0,
    Identity,
    Config,
    Peripherals,
    Radio,
    Receiver,
    Running,
    Failed,
}

static STAGE: AtomicU8 = AtomicU8::new(BootStage::Reset as u8);

impl BootStage {
    const ALL: [BootStage; 8] = [
        BootStage::Reset,
        BootStage::Identity,
        BootStage::Config,
        BootStage::Peripherals,
        BootStage::Radio,
        BootStage::Receiver,
        BootStage::Running,
        BootStage::Failed,
    ];

    fn from_u8(raw: u8) -> Self {
        Self::ALL
            .get(raw as usize)
            .copied()
            .unwrap_or(BootStage::Failed)
    }

    pub fn is_failed(self) -> bool {
        matches!(self, BootStage::Failed)
    }
}

pub fn set_stage(stage: BootStage) {
    STAGE.store(stage as u8, Ordering::Relaxed);
}

pub fn stage() -> BootStage {
    BootStage::from_u8(STAGE.load(Ordering::Relaxed))
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootStage::Reset => "reset",
            BootStage::Identity => "board identity",
            BootStage::Config => "parameters",
            BootStage::Peripherals => "peripherals",
            BootStage::Radio => "radio",
            BootStage::Receiver => "receiver",
            BootStage::Running => "running",
            BootStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_values_round_trip() {
        for stage in BootStage::ALL {
            assert_eq!(BootStage::from_u8(stage as u8), stage);
        }
        assert_eq!(BootStage::from_u8(200), BootStage::Failed);
    }

    #[test]
    fn display_names() {
        assert_eq!(BootStage::Peripherals.to_string(), "peripherals");
        assert!(BootStage::Failed.is_failed());
        assert!(!BootStage::Running.is_failed());
    }
}
