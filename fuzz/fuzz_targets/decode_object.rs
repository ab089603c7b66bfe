#![no_main]

use codec::{decode_object_stream, CimDecoder, CodecLimits, CodecOptions};
use libfuzzer_sys::fuzz_target;
use wire::{ByteOrder, Framing};

fuzz_target!(|data: &[u8]| {
    let Some((&control, payload)) = data.split_first() else {
        return;
    };
    let framing = if control & 1 == 0 {
        Framing::Framed
    } else {
        Framing::Unframed
    };
    let byte_order = if control & 2 == 0 {
        ByteOrder::native()
    } else {
        ByteOrder::native().reversed()
    };
    let options = CodecOptions::default()
        .with_framing(framing)
        .with_byte_order(byte_order)
        .with_validation(control & 4 != 0)
        .with_limits(CodecLimits::for_testing());

    let mut decoder = CimDecoder::new(payload, &options);
    match control >> 3 & 3 {
        0 => {
            let _ = decoder.get_object();
        }
        1 => {
            let _ = decoder.get_value();
        }
        2 => {
            let _ = decoder.get_property_list();
        }
        _ => {
            let _ = decode_object_stream(payload, control & 4 != 0, CodecLimits::for_testing());
        }
    }

    // Whatever decoded must re-encode to a stable native encoding.
    if let Ok(object) = CimDecoder::new(payload, &options).get_object() {
        let native = options.with_byte_order(ByteOrder::native());
        let bytes = codec::encode_object(&object, &native).expect("re-encode");
        let again = codec::decode_object(&bytes, &native).expect("re-decode");
        let bytes_again = codec::encode_object(&again, &native).expect("re-encode twice");
        assert_eq!(bytes, bytes_again);
    }
});
