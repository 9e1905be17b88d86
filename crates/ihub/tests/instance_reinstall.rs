// Lives in its own integration test so the process-wide instance is not
// shared with other test binaries.

use ihub::domain::config::ImsConfig;
use ihub::{ImsEndpoints, ImsHub, instance};

#[test]
fn reinstalling_the_same_hub_is_a_no_op() {
    let hub = ImsHub::builder(ImsConfig::default()).build();

    hub.ready_for_feature_creation();
    hub.ready_for_feature_creation();
    instance::install(hub.clone());

    let current = instance::current().unwrap();
    assert!(ImsHub::same_hub(&current, &hub));
}
