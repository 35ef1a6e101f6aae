//! Canonical geographic identifiers (GEOID / FIPS).
//!
//! A place GEOID is the 2-digit state code followed by the 5-digit place code;
//! a county GEOID is the 2-digit state code followed by the 3-digit county code.
//! Source files store these codes without leading zeros, so every component is
//! left-padded before concatenation. Components longer than their width are
//! passed through as-is.

/// Width of a state FIPS code.
pub const STATE_WIDTH: usize = 2;
/// Width of a place FIPS code.
pub const PLACE_WIDTH: usize = 5;
/// Width of a county FIPS code.
pub const COUNTY_WIDTH: usize = 3;

/// Left-pad `value` with `0` to `width` characters.
///
/// Surrounding whitespace is ignored. Values already at or beyond `width`
/// are returned unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    format!("{:0>width$}", value.trim(), width = width)
}

/// Padded 2-digit state code.
pub fn pad_state(state: &str) -> String {
    zero_pad(state, STATE_WIDTH)
}

/// 7-digit place identifier (`SS` + `PPPPP`).
pub fn place_id(state: &str, place: &str) -> String {
    let mut id = pad_state(state);
    id.push_str(&zero_pad(place, PLACE_WIDTH));
    id
}

/// 5-digit county identifier (`SS` + `CCC`).
pub fn county_id(state: &str, county: &str) -> String {
    let mut id = pad_state(state);
    id.push_str(&zero_pad(county, COUNTY_WIDTH));
    id
}

/// True when a local code consists only of zeros.
///
/// County files embed a statewide total as county `000`; after padding any
/// all-zero code denotes that aggregate row.
pub fn is_all_zero(code: &str) -> bool {
    let code = code.trim();
    !code.is_empty() && code.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_place_components() {
        assert_eq!(place_id("6", "12345"), "0612345");
        assert_eq!(place_id("06", "2"), "0600002");
    }

    #[test]
    fn pads_county_components() {
        assert_eq!(county_id("6", "1"), "06001");
        assert_eq!(county_id("48", "201"), "48201");
    }

    #[test]
    fn long_components_are_not_truncated() {
        assert_eq!(county_id("123", "4567"), "1234567");
        assert_eq!(zero_pad("123456", PLACE_WIDTH), "123456");
    }

    #[test]
    fn trims_cell_padding() {
        assert_eq!(place_id(" 6 ", " 2"), "0600002");
    }

    #[test]
    fn detects_state_aggregate_sentinel() {
        assert!(is_all_zero("000"));
        assert!(is_all_zero("0"));
        assert!(!is_all_zero("001"));
        assert!(!is_all_zero(""));
    }
}
