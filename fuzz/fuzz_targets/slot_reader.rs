#![no_main]

use cursor::SlotReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&control, payload)) = data.split_first() else {
        return;
    };
    let mut reader = SlotReader::new(payload)
        .with_swap(control & 0x80 != 0)
        .with_validation(control & 0x40 != 0);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while reader.more() && idx < 1024 {
        let op = payload.get(idx).copied().unwrap_or(control) % 8;
        idx += 1;

        match op {
            0 => {
                let _ = reader.get_bool();
            }
            1 => {
                let _ = reader.get_u16();
            }
            2 => {
                let _ = reader.get_u32();
            }
            3 => {
                let _ = reader.get_f64();
            }
            4 => {
                let _ = reader.get_string();
            }
            5 => {
                let _ = reader.get_array::<u32>();
            }
            6 => {
                let _ = reader.get_bytes(usize::from(op) * 3);
            }
            _ => {
                let _ = reader.get_array::<bool>();
            }
        }
    }
});
