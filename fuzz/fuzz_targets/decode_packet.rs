//! Decode totality: arbitrary radio bytes must never panic the decoder

#![no_main]

use libfuzzer_sys::fuzz_target;

use lorabeat_wire::{decode_packet, Decoded};

fuzz_target!(|data: &[u8]| {
    let decoded = decode_packet(data);

    // Accessors must hold for either variant
    match &decoded {
        Decoded::Parsed { timestamp, .. } => {
            assert_eq!(decoded.timestamp(), timestamp);
        }
        Decoded::Legacy { payload } => {
            assert_eq!(decoded.payload(), payload);
            assert_eq!(decoded.timestamp(), "");
            assert_eq!(decoded.sequence(), None);
        }
    }
});
