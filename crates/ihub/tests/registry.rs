use ihub::domain::config::ImsConfig;
use ihub::domain::features::SlotFeature;
use ihub::domain::registry::SlotHandle;
use ihub::kernel::telephony::{Capability, ModemCapability, Telephony};
use ihub::{ImsEndpoints, ImsHub, ServiceError};
use ihub_mmtel::MmTelFeature;
use ihub_provisioning::ImsProvisioning;
use ihub_registration::{ImsRegistration, RegistrationState};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn single_slot_hub() -> ImsHub {
    ImsHub::builder(ImsConfig::default()).build()
}

fn dual_slot_hub() -> ImsHub {
    let mut config = ImsConfig::default();
    config.slots.ims1 = true;
    config.modem.dual_ims_capable = true;
    config.modem.phone_count = 2;
    ImsHub::builder(config).build()
}

#[test]
fn gated_slots_have_no_handles() {
    let hub = single_slot_hub();

    assert!(hub.create_mmtel_feature(1).is_none());
    assert!(hub.get_registration(1).is_none());
    assert!(hub.get_config(1).is_none());
    assert!(hub.get_config(2).is_none());
}

#[test]
fn out_of_range_slots_have_no_handles() {
    let hub = dual_slot_hub();

    assert!(hub.create_mmtel_feature(2).is_none());
    assert!(hub.get_registration(2).is_none());
    assert!(hub.get_config(3).is_none());
}

#[test]
fn primary_slot_handles_are_singletons() {
    let hub = single_slot_hub();

    let first = hub.create_mmtel_feature(0).unwrap();
    let second = hub.create_mmtel_feature(0).unwrap();
    assert!(MmTelFeature::same_handle(&first, &second));
    assert_eq!(first.slot(), 0);

    let config_a = hub.get_config(0).unwrap();
    let config_b = hub.get_config(0).unwrap();
    assert!(ImsProvisioning::same_handle(&config_a, &config_b));
}

#[test]
fn mmtel_creation_pairs_the_registration_handle() {
    let hub = single_slot_hub();

    let feature = hub.create_mmtel_feature(0).unwrap();
    let registration = hub.get_registration(0).unwrap();
    assert!(ImsRegistration::same_handle(feature.registration(), &registration));
}

#[test]
fn default_single_slot_features() {
    let hub = single_slot_hub();

    let features = hub.query_supported_features();
    assert_eq!(features.len(), 1);
    assert!(features.contains(&SlotFeature::mmtel(0)));
}

#[test]
fn disabling_the_primary_flag_empties_the_feature_set() {
    let mut config = ImsConfig::default();
    config.slots.ims0 = false;
    let hub = ImsHub::builder(config).build();

    assert!(hub.query_supported_features().is_empty());
}

#[test]
fn dual_slot_device_reports_both_features() {
    let hub = dual_slot_hub();

    let features = hub.query_supported_features();
    assert!(features.contains(&SlotFeature::mmtel(0)));
    assert!(features.contains(&SlotFeature::mmtel(1)));

    let first = hub.create_mmtel_feature(1).unwrap();
    let second = hub.create_mmtel_feature(1).unwrap();
    assert!(MmTelFeature::same_handle(&first, &second));
}

#[test]
fn secondary_flag_alone_is_not_enough() {
    let mut config = ImsConfig::default();
    config.slots.ims1 = true;
    let hub = ImsHub::builder(config).build();

    let features = hub.query_supported_features();
    assert_eq!(features.len(), 1);
    assert!(!features.contains(&SlotFeature::mmtel(1)));
}

#[test]
fn spare_provisioning_cell_opens_on_dual_hardware() {
    let hub = dual_slot_hub();

    let spare = hub.get_config(2).unwrap();
    assert!(ImsProvisioning::same_handle(&spare, &hub.get_config(2).unwrap()));
}

#[test]
fn enable_and_disable_drive_the_feature() {
    let hub = single_slot_hub();

    hub.enable_ims(0).unwrap();
    let feature = hub.create_mmtel_feature(0).unwrap();
    assert!(feature.is_enabled());
    assert_eq!(feature.registration().state(), RegistrationState::Attempting);

    hub.disable_ims(0).unwrap();
    assert!(!feature.is_enabled());
    assert_eq!(feature.registration().state(), RegistrationState::NotRegistered);
}

#[test]
fn enable_ims_on_a_gated_slot_is_an_error() {
    let hub = single_slot_hub();

    assert!(matches!(hub.enable_ims(1), Err(ServiceError::UnsupportedSlot { .. })));
    assert!(matches!(hub.disable_ims(1), Err(ServiceError::UnsupportedSlot { .. })));
}

#[derive(Debug)]
struct ToggleModem {
    dual_ims: AtomicBool,
}

impl ModemCapability for ToggleModem {
    fn is_capability_supported(&self, capability: Capability) -> bool {
        match capability {
            Capability::DualIms => self.dual_ims.load(Ordering::Acquire),
            Capability::VolteSupport | Capability::VideoCall => true,
        }
    }
}

#[derive(Debug)]
struct DualSim;

impl Telephony for DualSim {
    fn phone_count(&self) -> u8 {
        2
    }
}

#[test]
fn gate_is_recomputed_on_every_call() {
    let modem = Arc::new(ToggleModem { dual_ims: AtomicBool::new(false) });
    let hub = ImsHub::builder(ImsConfig::default())
        .modem(modem.clone())
        .telephony(Arc::new(DualSim))
        .build();

    assert!(hub.create_mmtel_feature(1).is_none());

    modem.dual_ims.store(true, Ordering::Release);
    assert!(hub.create_mmtel_feature(1).is_some());
}

#[test]
fn concurrent_first_access_constructs_one_handle() {
    let hub = single_slot_hub();

    let handles: Vec<MmTelFeature> = std::thread::scope(|scope| {
        let workers: Vec<_> =
            (0..8).map(|_| scope.spawn(|| hub.create_mmtel_feature(0).unwrap())).collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let first = &handles[0];
    assert!(handles.iter().all(|h| MmTelFeature::same_handle(first, h)));
}
