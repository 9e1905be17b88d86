use ihub_domain::config::{ImsConfig, LoggingConfig, ModemConfig, SlotsConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let slots = SlotsConfig::default();
    assert!(slots.ims0, "primary slot ships enabled");
    assert!(!slots.ims1, "secondary slot ships disabled");

    let modem = ModemConfig::default();
    assert!(!modem.dual_ims_capable);
    assert_eq!(modem.phone_count, 1);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn slot_flags_cover_unknown_slots() {
    let slots = SlotsConfig { ims0: true, ims1: true };
    assert!(slots.enabled(0));
    assert!(slots.enabled(1));
    assert!(!slots.enabled(2), "flags exist only for slots 0 and 1");
}

#[test]
fn ims_config_deserializes() {
    let raw = json!({
        "slots": { "ims0": false, "ims1": true },
        "modem": { "dual_ims_capable": true, "phone_count": 2 },
        "logging": { "level": "debug", "directory": "/tmp/logs" }
    });

    let cfg: ImsConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(!cfg.slots.ims0);
    assert!(cfg.slots.ims1);
    assert!(cfg.modem.dual_ims_capable);
    assert_eq!(cfg.modem.phone_count, 2);
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn ims_config_defaults_when_sections_missing() {
    let cfg: ImsConfig = serde_json::from_value(json!({})).expect("empty config");
    assert!(cfg.slots.ims0);
    assert!(!cfg.modem.dual_ims_capable);
}
