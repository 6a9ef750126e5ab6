//! System ID derivation properties.

use acp_ble_core::stack::BdAddr;
use acp_ble_core::system_id;
use proptest::prelude::*;

#[test]
fn pads_and_reverses_the_address() {
    let addr = BdAddr([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    assert_eq!(
        system_id::from_address(&addr),
        [0x06, 0x05, 0x04, 0xFF, 0xFE, 0x03, 0x02, 0x01]
    );
}

proptest! {
    #[test]
    fn layout_holds_for_any_address(addr in any::<[u8; 6]>()) {
        let id = system_id::from_address(&BdAddr(addr));
        let expected = [
            addr[5], addr[4], addr[3], 0xFF, 0xFE, addr[2], addr[1], addr[0],
        ];
        prop_assert_eq!(id, expected);
    }

    #[test]
    fn derivation_is_deterministic(addr in any::<[u8; 6]>()) {
        let a = system_id::from_address(&BdAddr(addr));
        let b = system_id::from_address(&BdAddr(addr));
        prop_assert_eq!(a, b);
    }
}
