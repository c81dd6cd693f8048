//! Offline research pipeline.
//!
//! Generates random self-play data, fits the per-move ridge models, saves
//! them for the interactive bot, and benchmarks the result against a random
//! player.
//!
//! Usage: research [simulations] [data_dir] [models_dir]

use anyhow::Context;
use chrono::Local;
use iothello::research;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let simulations: usize = args
        .get(1)
        .map(|s| s.parse())
        .transpose()
        .context("parsing simulation count")?
        .unwrap_or(10_000);
    let data_dir = args.get(2).cloned().unwrap_or_else(|| "Data".to_string());
    let models_dir = args.get(3).cloned().unwrap_or_else(|| "Models".to_string());

    println!("Running {} random simulations...", simulations);
    let data = research::random_simulations(simulations);
    research::write_csv(&data, &data_dir)?;
    println!("Training data written to {}/", data_dir);

    // Refit from the persisted tables so the training step can be rerun
    // later without regenerating the data
    let data = research::read_csv(&data_dir)?;
    println!("Fitting 32 ridge models (alpha = 1.0)...");
    let bank = research::train_models(&data, 1.0)?;
    bank.save(&models_dir)?;
    println!("Models saved to {}/", models_dir);

    println!("Benchmarking model bot vs random ({} games)...", simulations);
    let stats = research::benchmark_vs_random(&bank, simulations);
    println!(
        "Wins: {} ({:.1}%)  Draws: {} ({:.1}%)  Losses: {} ({:.1}%)",
        stats.wins,
        stats.win_rate() * 100.0,
        stats.draws,
        stats.draws as f64 / stats.total_games.max(1) as f64 * 100.0,
        stats.losses,
        stats.losses as f64 / stats.total_games.max(1) as f64 * 100.0,
    );
    println!("Avg final material: {:+.2}", stats.avg_material);

    let report = format!("benchmark_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
    let file = std::fs::File::create(&report)
        .with_context(|| format!("creating report file {}", report))?;
    serde_json::to_writer_pretty(file, &stats)?;
    println!("Stats written to {}", report);

    Ok(())
}
