#![no_main]

use libfuzzer_sys::fuzz_target;

use packmule::Encoding;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Decoding arbitrary text must error cleanly, never panic
        let _ = packmule::decode_asset(text, Encoding::Base64);
        let _ = packmule::decode_asset(text, Encoding::Codepoint);
    }
});
