use ihub_derive::slot_handle;
use ihub_domain::SlotId;
use ihub_domain::registry::SlotHandle;

#[slot_handle]
pub struct DemoHandle {
    slot: SlotId,
    label: &'static str,
}

fn main() {
    let handle = DemoHandle::new(DemoHandleInner { slot: 1, label: "demo" });
    let twin = handle.clone();

    assert_eq!(handle.slot(), 1);
    assert_eq!(handle.label, "demo");
    assert!(DemoHandle::same_handle(&handle, &twin));
}
