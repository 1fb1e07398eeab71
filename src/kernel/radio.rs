//! Radio bring-up: PHY, channel plan, then the TDM and hopping layers.

use crate::board::{Band, BoardIdentity};
use crate::config::{Param, CHANNEL_SPACING_HZ, NUM_FREQ_CHANNELS};
use crate::error::FatalError;
use crate::hal::{FreqHopper, ParamStore, Phy, Tdm};

/// Base carrier for each band the hardware is built for.
pub fn base_frequency(band: Band) -> Result<u32, FatalError> {
    match band {
        Band::Mhz433 => Ok(433_000_000),
        Band::Mhz470 => Ok(470_000_000),
        Band::Mhz868 => Ok(868_000_000),
        Band::Mhz915 => Ok(915_000_000),
        Band::Unsupported(code) => Err(FatalError::UnsupportedBand(code)),
    }
}

/// Starting channel. Radios sharing a network id start on the same channel before hop
/// sync takes over. Takes the id as stored, before it is cut to 16 bits.
///
/// # Panics
///
/// If `channel_count` is zero.
pub const fn initial_channel(net_id: u32, channel_count: u8) -> u8 {
    (net_id % channel_count as u32) as u8
}

const _: () = assert!(NUM_FREQ_CHANNELS > 0);

/// Settings the radio came up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioSettings {
    pub base_frequency_hz: u32,
    pub channel: u8,
    pub air_speed_bps: u32,
    pub net_id: u16,
}

pub struct RadioLayers<'a> {
    pub phy: &'a mut dyn Phy,
    pub tdm: &'a mut dyn Tdm,
    pub fhop: &'a mut dyn FreqHopper,
}

pub fn bring_up(
    layers: &mut RadioLayers<'_>,
    identity: &BoardIdentity,
    params: &dyn ParamStore,
) -> Result<RadioSettings, FatalError> {
    layers.phy.initialise().map_err(|_| FatalError::RadioInit)?;

    let base_frequency_hz = base_frequency(identity.frequency)?;
    layers.phy.set_frequency(base_frequency_hz);
    layers.phy.set_channel_spacing(CHANNEL_SPACING_HZ);

    let stored_net_id = params.get(Param::NetId);
    let channel = initial_channel(stored_net_id, NUM_FREQ_CHANNELS);
    // network ids are 16 bits on air
    let net_id = stored_net_id as u16;
    layers.phy.set_channel(channel);

    let air_speed_bps = params.get(Param::AirSpeed).saturating_mul(1000);
    layers
        .phy
        .configure(air_speed_bps)
        .map_err(|_| FatalError::RadioConfigure { air_speed_bps })?;

    layers.phy.set_network_id(net_id);

    layers.tdm.init();
    layers.fhop.init(net_id);

    Ok(RadioSettings {
        base_frequency_hz,
        channel,
        air_speed_bps,
        net_id,
    })
}

#[cfg(test)]
pub(crate) mod mock {
    use crate::hal::{FreqHopper, PhyError, Phy, Tdm};
    use std::sync::{Arc, Mutex};
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Call {
        Initialise,
        Frequency(u32),
        Spacing(u32),
        Channel(u8),
        Configure(u32),
        NetworkId(u16),
        ReceiverOn,
        TdmInit,
        FhopInit(u16),
        SerialLoop,
    }

    pub type Calls = Arc<Mutex<Vec<Call>>>;

    /// Payload unwound by [`MockTdm::serial_loop`].
    pub struct SerialLoopEntered;

    #[derive(Default)]
    pub struct MockPhy {
        pub calls: Calls,
        pub fail_initialise: bool,
        pub fail_configure: bool,
        pub fail_receiver: bool,
    }

    pub struct MockTdm(pub Calls);
    pub struct MockFhop(pub Calls);

    impl MockPhy {
        pub fn tdm(&self) -> MockTdm {
            MockTdm(Arc::clone(&self.calls))
        }

        pub fn fhop(&self) -> MockFhop {
            MockFhop(Arc::clone(&self.calls))
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn push(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn outcome(fail: bool) -> Result<(), PhyError> {
        if fail {
            Err(PhyError)
        } else {
            Ok(())
        }
    }

    impl Phy for MockPhy {
        fn initialise(&mut self) -> Result<(), PhyError> {
            self.push(Call::Initialise);
            outcome(self.fail_initialise)
        }
        fn set_frequency(&mut self, hz: u32) {
            self.push(Call::Frequency(hz));
        }
        fn set_channel_spacing(&mut self, hz: u32) {
            self.push(Call::Spacing(hz));
        }
        fn set_channel(&mut self, channel: u8) {
            self.push(Call::Channel(channel));
        }
        fn configure(&mut self, air_speed_bps: u32) -> Result<(), PhyError> {
            self.push(Call::Configure(air_speed_bps));
            outcome(self.fail_configure)
        }
        fn set_network_id(&mut self, net_id: u16) {
            self.push(Call::NetworkId(net_id));
        }
        fn receiver_on(&mut self) -> Result<(), PhyError> {
            self.push(Call::ReceiverOn);
            outcome(self.fail_receiver)
        }
    }

    impl Tdm for MockTdm {
        fn init(&mut self) {
            self.0.lock().unwrap().push(Call::TdmInit);
        }

        fn serial_loop(&mut self) -> ! {
            self.0.lock().unwrap().push(Call::SerialLoop);
            std::panic::panic_any(SerialLoopEntered)
        }
    }

    impl FreqHopper for MockFhop {
        fn init(&mut self, net_id: u16) {
            self.0.lock().unwrap().push(Call::FhopInit(net_id));
        }
    }
}
