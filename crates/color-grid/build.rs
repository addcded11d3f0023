use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

/// sRGB transfer function, decoding direction.
fn decode_gamma(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let mut table = String::from(
        "/// Gamma-decoded value for every 8-bit sRGB channel value.\n\
         pub static SRGB_TO_LINEAR: [f32; 256] = [\n",
    );
    for row in (0..=255u8).collect::<Vec<_>>().chunks(8) {
        table.push_str("   ");
        for &byte in row {
            let linear = decode_gamma(f64::from(byte) / 255.0) as f32;
            write!(table, " {linear:.9},").unwrap();
        }
        table.push('\n');
    }
    table.push_str("];\n");

    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("gamma_lut.rs");
    fs::write(out, table).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
