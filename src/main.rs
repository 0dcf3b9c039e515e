mod cli;
mod config;
mod extractor;
mod fetcher;
mod image_processor;
mod navigator;
mod packager;
mod scrape;

use cli::parse_args;
use colored::*;
use navigator::Navigator;
use scrape::TeamOutcome;
use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    println!("Rosterpix v0.1.0");
    println!("==========================");
    println!("Output directory: {}", args.out_dir);
    println!(
        "Max width: {}px | Min dimension: {}px | Quality: {}",
        args.max_width, args.min_dimension, args.quality
    );
    println!("Teams: {}", config::TEAMS.len());
    println!();

    tokio::fs::create_dir_all(&args.out_dir).await?;

    // A browser that fails to launch aborts the run; everything below this
    // level is skip-and-continue
    println!("Initializing browser...");
    let navigator = Navigator::launch().await?;
    let client = fetcher::build_client(args.timeout)?;

    let start_time = Instant::now();
    let mut total_saved = 0;
    let mut teams_done = 0;
    let mut teams_skipped = 0;

    for team in config::TEAMS {
        println!("\n--- PROCESSING TEAM: {} ---", team.name.to_uppercase());

        match scrape::process_team(&navigator, &client, team, &args).await {
            Ok(TeamOutcome::NotFound) => {
                teams_skipped += 1;
                println!(
                    "{}",
                    format!("[!] Page not found for {}. Skipping.", team.name).yellow()
                );
            }
            Ok(TeamOutcome::Done(report)) => {
                teams_done += 1;
                total_saved += report.saved;
                println!(
                    "{}",
                    format!(
                        "Completed {}: {} images ({} candidates).",
                        team.name, report.saved, report.candidates
                    )
                    .green()
                );
            }
            Err(e) => {
                teams_skipped += 1;
                eprintln!(
                    "{}",
                    format!("Error processing {}: {}", team.name, e).red()
                );
            }
        }
    }

    navigator.close().await;

    if !args.no_archive {
        println!("\nCreating zip archive...");
        let packed = packager::archive_dir(Path::new(&args.out_dir), Path::new(&args.archive))?;
        println!("Packed {} files into {}", packed, args.archive);
    }

    let elapsed = start_time.elapsed();

    println!();
    println!("==========================");
    println!("All done!");
    println!("Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("Teams processed: {} ({} skipped)", teams_done, teams_skipped);
    println!("Images saved: {}", total_saved);

    Ok(())
}
