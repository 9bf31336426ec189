#![no_main]

use libfuzzer_sys::fuzz_target;
use polyfft_transform::numeric::max_abs_diff;
use polyfft_transform::{forward_transform, inverse_transform, Complex64};

// Bytes become small integer samples; any length is fed in, and only
// power-of-two lengths may succeed.
fuzz_target!(|data: &[u8]| {
    let samples: Vec<Complex64> = data
        .chunks(2)
        .take(1024)
        .map(|c| Complex64::new(f64::from(c[0]) - 128.0, f64::from(*c.get(1).unwrap_or(&0)) - 128.0))
        .collect();

    match forward_transform(&samples) {
        Ok(spectrum) => {
            assert!(samples.len().is_power_of_two());
            let back = inverse_transform(&spectrum).unwrap();
            assert!(max_abs_diff(&back, &samples) < 1e-6);
        }
        Err(_) => assert!(!samples.len().is_power_of_two()),
    }
});
