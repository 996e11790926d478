#![no_main]

use apidefaults::Quantity;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic, and the canonical form must parse back
        // to the same amount.
        if let Ok(quantity) = input.parse::<Quantity>() {
            let canonical = quantity.to_string();
            let reparsed: Quantity = canonical
                .parse()
                .unwrap_or_else(|e| panic!("canonical form {canonical:?} does not parse: {e}"));
            assert_eq!(reparsed, quantity);
        }
    }
});
