use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

const COIN_SYMBOL_CSV_FILE_PATH: &str = "data/coin_symbol_list.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!("cargo:rerun-if-changed={}", COIN_SYMBOL_CSV_FILE_PATH);

    // Compressed copy lands next to the other generated build artifacts
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let output_path = out_dir.join("coin_symbol_list.csv.gz");

    // Open the input CSV file
    let mut input_file = File::open(COIN_SYMBOL_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    // Compress the data with GzEncoder
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
