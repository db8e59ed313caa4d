//! Property tests for the compression + encoding transform.

use proptest::prelude::*;

use packmule::codec::{decode, decode_asset, encode, pack_bytes};
use packmule::Encoding;

fn any_encoding() -> impl Strategy<Value = Encoding> {
    prop_oneof![Just(Encoding::Base64), Just(Encoding::Codepoint)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The full pack transform round-trips every byte string.
    #[test]
    fn property_pack_round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..4096),
        encoding in any_encoding(),
    ) {
        let (_, encoded) = pack_bytes(&bytes, encoding).expect("packing cannot fail in memory");
        let decoded = decode_asset(&encoded, encoding)
            .expect("decoding our own output must succeed");
        prop_assert_eq!(decoded, bytes);
    }

    /// PROPERTY: The text layer alone round-trips without compression.
    #[test]
    fn property_encode_decode_round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..2048),
        encoding in any_encoding(),
    ) {
        let text = encode(&bytes, encoding);
        prop_assert_eq!(decode(&text, encoding).expect("own output decodes"), bytes);
    }

    /// PROPERTY: Encoded text never contains characters that would need
    /// escaping inside a string literal.
    #[test]
    fn property_encoded_text_is_literal_safe(
        bytes in proptest::collection::vec(any::<u8>(), 0..2048),
        encoding in any_encoding(),
    ) {
        let text = encode(&bytes, encoding);
        prop_assert!(!text.contains('"'));
        prop_assert!(!text.contains('\\'));
        prop_assert!(!text.contains('\n'));
    }

    /// PROPERTY: `decode_asset` never panics on arbitrary input text.
    #[test]
    fn property_decode_never_panics(
        text in "(?s).{0,512}",
        encoding in any_encoding(),
    ) {
        let _ = decode_asset(&text, encoding);
    }
}
