#![no_main]

use apidefaults::{Defaulter, Manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding may fail; defaulting whatever decodes must not panic and
        // must be idempotent.
        if let Ok(mut manifest) = Manifest::from_yaml_str(content) {
            let defaulter = Defaulter::default();
            manifest.apply_defaults(&defaulter);
            let mut again = manifest.clone();
            again.apply_defaults(&defaulter);
            assert_eq!(again, manifest);
        }
    }
});
