use ihub_event_bus::EventBus;
use ihub_registration::{
    ImsRegistration, RadioTech, RegistrationChanged, RegistrationError, RegistrationState,
};

#[test]
fn fresh_handle_is_not_registered() {
    let registration = ImsRegistration::create(0, EventBus::new());
    assert_eq!(registration.state(), RegistrationState::NotRegistered);
    assert_eq!(registration.radio_tech(), RadioTech::None);
}

#[test]
fn attempt_then_register_over_lte() {
    let registration = ImsRegistration::create(0, EventBus::new());

    registration.attempt_register().unwrap();
    assert_eq!(registration.state(), RegistrationState::Attempting);

    registration.notify_registered(RadioTech::Lte).unwrap();
    assert_eq!(registration.state(), RegistrationState::Registered);
    assert_eq!(registration.radio_tech(), RadioTech::Lte);
}

#[test]
fn registered_without_attempt_is_rejected() {
    let registration = ImsRegistration::create(1, EventBus::new());
    let err = registration.notify_registered(RadioTech::Lte).unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidTransition { .. }));
}

#[test]
fn failed_attempt_falls_back_to_not_registered() {
    let registration = ImsRegistration::create(0, EventBus::new());

    registration.attempt_register().unwrap();
    registration.notify_attempt_failed().unwrap();
    assert_eq!(registration.state(), RegistrationState::NotRegistered);

    let err = registration.notify_attempt_failed().unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidTransition { .. }));
}

#[test]
fn clones_share_state() {
    let registration = ImsRegistration::create(0, EventBus::new());
    let twin = registration.clone();

    registration.attempt_register().unwrap();
    assert_eq!(twin.state(), RegistrationState::Attempting);
    assert!(ImsRegistration::same_handle(&registration, &twin));
}

#[tokio::test]
async fn transitions_are_published() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe::<RegistrationChanged>().unwrap();

    let registration = ImsRegistration::create(1, bus);
    registration.attempt_register().unwrap();
    registration.notify_registered(RadioTech::Iwlan).unwrap();

    let first = rx.recv().await.unwrap();
    assert_eq!(first.state, RegistrationState::Attempting);

    let second = rx.recv().await.unwrap();
    assert_eq!(second.slot, 1);
    assert_eq!(second.state, RegistrationState::Registered);
    assert_eq!(second.tech, RadioTech::Iwlan);
}
