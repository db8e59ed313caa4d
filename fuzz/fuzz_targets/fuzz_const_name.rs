#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use packmule::ConstName;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Name derivation must reject, not panic, on hostile paths
        let _ = ConstName::derive(Path::new(path));
    }
});
