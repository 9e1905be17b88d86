use ihub_kernel::telephony::{Capability, ModemCapability, StaticTelephony, supports_dual_ims};

#[test]
fn dual_ims_needs_flag_and_second_slot() {
    // (capability flag, phone count) -> expected gate answer
    let cases = [
        (false, 1, false),
        (false, 2, false),
        (true, 1, false),
        (true, 2, true),
        (true, 3, true),
    ];

    for (flag, phones, expected) in cases {
        let radio = StaticTelephony::new(flag, phones);
        assert_eq!(
            supports_dual_ims(&radio, &radio),
            expected,
            "flag={flag} phones={phones}"
        );
    }
}

#[test]
fn static_provider_reports_configured_capability() {
    let radio = StaticTelephony::new(false, 2);
    assert!(!radio.is_capability_supported(Capability::DualIms));
    assert!(radio.is_capability_supported(Capability::VolteSupport));
}

#[test]
fn static_provider_derives_from_modem_config() {
    let modem = ihub_domain::config::ModemConfig { dual_ims_capable: true, phone_count: 2 };
    let radio = StaticTelephony::from(&modem);
    assert!(supports_dual_ims(&radio, &radio));
}
