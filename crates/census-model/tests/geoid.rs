//! Property tests for the canonical identifier codec.

use census_model::{county_id, place_id};
use proptest::prelude::*;

proptest! {
    #[test]
    fn place_ids_are_seven_digits(state in 0u32..100, place in 0u32..100_000) {
        let id = place_id(&state.to_string(), &place.to_string());
        prop_assert_eq!(id.len(), 7);
        prop_assert!(id.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(id, format!("{state:02}{place:05}"));
    }

    #[test]
    fn county_ids_are_five_digits(state in 0u32..100, county in 0u32..1000) {
        let id = county_id(&state.to_string(), &county.to_string());
        prop_assert_eq!(id.len(), 5);
        prop_assert_eq!(id, format!("{state:02}{county:03}"));
    }

    #[test]
    fn padding_is_idempotent(state in 0u32..100, place in 0u32..100_000) {
        let padded_state = format!("{state:02}");
        let padded_place = format!("{place:05}");
        prop_assert_eq!(
            place_id(&padded_state, &padded_place),
            place_id(&state.to_string(), &place.to_string())
        );
    }
}

#[test]
fn documented_examples() {
    assert_eq!(place_id("6", "12345"), "0612345");
    assert_eq!(county_id("6", "1"), "06001");
}
