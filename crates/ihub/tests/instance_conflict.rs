// Lives in its own integration test so the process-wide instance is not
// shared with other test binaries.

use ihub::domain::config::ImsConfig;
use ihub::{ImsHub, instance};

#[test]
#[should_panic(expected = "different IMS hub")]
fn installing_a_different_hub_panics() {
    let first = ImsHub::builder(ImsConfig::default()).build();
    let second = ImsHub::builder(ImsConfig::default()).build();

    instance::install(first);
    instance::install(second);
}
