//! Fuzz target for the loco decoder.
//!
//! Feeds arbitrary word-aligned streams to the decoder; errors are
//! expected, panics and out-of-bounds access are not.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let aligned = data.len() / 8 * 8;
    let stream = &data[..aligned];

    let Ok(header) = grice::loco::header(stream) else {
        return;
    };
    let pixels = header.width as usize * header.height as usize;
    if pixels > 1 << 20 {
        return;
    }

    let mut output = vec![0u8; pixels];
    let _ = grice::loco::decode(stream, &mut output, header.width, header.height);
});
