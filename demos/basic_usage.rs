//! ARTC-LITE basic usage walkthrough.
//!
//! ```bash
//! cargo run --example basic_usage
//! RUST_LOG=debug cargo run --example basic_usage   # per-block decisions
//! ```

use artc_lite::{format_bytes, ArtcError, BlockRecord, CompressedSeries, Session};
use colored::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn heading(step: &str) {
    println!("\n{}", step.bold().cyan());
    println!("{}", "-".repeat(70));
}

fn main() -> Result<(), ArtcError> {
    env_logger::init();

    println!("{}", "=".repeat(70));
    println!("{}", "ARTC-LITE: Basic Usage Example".bold());
    println!("{}", "=".repeat(70));

    // Step 1: a warming trend from 20 °C to 25 °C with a little sensor noise.
    heading("Step 1: Generate sample data");
    let mut rng = StdRng::seed_from_u64(7);
    let readings: Vec<f32> = (0..100)
        .map(|i| 20.0 + 5.0 * i as f32 / 99.0 + rng.random_range(-0.02f32..0.02))
        .collect();
    println!("Generated {} temperature readings", readings.len());
    println!(
        "Range: {:.1}°C to {:.1}°C",
        readings[0],
        readings[readings.len() - 1]
    );

    // Step 2
    heading("Step 2: Create a session");
    let mut session = Session::new(8, 0.2)?;
    println!(
        "Created session with block_size={}, tolerance={}",
        session.block_size(),
        session.tolerance()
    );

    // Step 3
    heading("Step 3: Compress the data");
    let records = session.compress(&readings)?;
    println!("Compressed into {} blocks", records.len());

    // Step 4
    heading("Step 4: View compression statistics");
    session.print_stats();

    // Step 5
    heading("Step 5: Examine the first block");
    match &records[0] {
        BlockRecord::Formula { slope, intercept } => {
            println!("  Formula: y = {:.4}x + {:.4}", slope, intercept);
            println!("  Size: 8 bytes (just two numbers!)");
        }
        BlockRecord::Raw { values } => {
            println!("  Raw data: {} values", values.len());
            println!("  Size: {} bytes", values.len() * 4);
        }
    }

    // Step 6
    heading("Step 6: Decompress and verify");
    let restored = session.decompress(&records);
    let errors: Vec<f32> = readings
        .iter()
        .zip(&restored)
        .map(|(a, b)| (a - b).abs())
        .collect();
    let max_error = errors.iter().cloned().fold(0.0f32, f32::max);
    let mean_error = errors.iter().sum::<f32>() / errors.len() as f32;
    println!("Maximum error: {:.6}°C", max_error);
    println!("Mean error:    {:.6}°C", mean_error);
    if max_error <= session.tolerance() {
        println!("{}", "All values within tolerance".green());
    } else {
        println!("{}", "Some values exceed tolerance".red());
    }

    // Step 7: the same data as a self-describing byte artifact.
    heading("Step 7: Serialize");
    let mut fresh = Session::new(8, 0.2)?;
    let bytes = fresh.compress_series(&readings)?.to_bytes()?;
    let info = CompressedSeries::peek_info(&bytes)?;
    println!(
        "Serialized {} readings in {} blocks to {}",
        info.total_readings,
        info.block_count,
        format_bytes(bytes.len() as u64)
    );

    let stats = session.stats();
    println!("\n{}", "=".repeat(70));
    println!("Original size:     {:4} bytes", stats.original_size);
    println!("Compressed size:   {:4} bytes", stats.compressed_size);
    println!("Compression ratio: {:.1}x", session.get_ratio());
    println!(
        "Space saved:       {:4} bytes ({:.0}%)",
        stats.original_size.saturating_sub(stats.compressed_size),
        (1.0 - 1.0 / session.get_ratio()) * 100.0
    );
    println!("{}", "=".repeat(70));
    Ok(())
}
