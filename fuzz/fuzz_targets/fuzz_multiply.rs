#![no_main]

use libfuzzer_sys::fuzz_target;
use polyfft_core::{convolve, multiply, trim_to_product};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let split = usize::from(data[0]) % data.len();
    let (left, right) = data[1..].split_at(split.min(data.len() - 1));
    let a: Vec<f64> = left.iter().take(256).map(|&x| f64::from(x) - 128.0).collect();
    let b: Vec<f64> = right.iter().take(256).map(|&x| f64::from(x) - 128.0).collect();

    let fast = multiply(&a, &b).unwrap();
    let direct = convolve(&a, &b);
    for (f, d) in trim_to_product(&fast, a.len(), b.len()).iter().zip(&direct) {
        assert!((f - d).abs() < 1e-6, "fft {f} != direct {d}");
    }
});
