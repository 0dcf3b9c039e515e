use crate::cli::Args;
use crate::config::{self, Team};
use crate::extractor::extract_candidates;
use crate::fetcher::fetch_image;
use crate::image_processor::{save_if_valid, ImageSpec};
use crate::navigator::{Navigator, PageStatus};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Per-team result handed back to the run loop
pub enum TeamOutcome {
    /// Roster page does not exist (relegated team, changed slug)
    NotFound,
    Done(TeamReport),
}

pub struct TeamReport {
    pub candidates: usize,
    pub saved: usize,
}

/// Run the full pipeline for one team: navigate, extract, download,
/// validate, persist. Per-candidate failures are logged and skipped;
/// only navigation-level errors bubble up to the run loop.
pub async fn process_team(
    navigator: &Navigator,
    client: &Client,
    team: &Team,
    args: &Args,
) -> Result<TeamOutcome, Box<dyn std::error::Error>> {
    let team_dir = Path::new(&args.out_dir).join(team.slug);
    tokio::fs::create_dir_all(&team_dir).await?;

    let url = config::roster_url(team.slug);
    let page_url = Url::parse(&url)?;

    let html = match navigator.load_roster(&url).await? {
        PageStatus::NotFound => return Ok(TeamOutcome::NotFound),
        PageStatus::Loaded(html) => html,
    };

    let candidates = extract_candidates(&html, &page_url);
    println!("Scanning {} candidate photos...", candidates.len());

    let spec = ImageSpec {
        max_width: args.max_width,
        min_dimension: args.min_dimension,
        quality: args.quality,
    };

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Ids enter the set only after a successful save, so a failed download
    // does not block a later candidate for the same player
    let mut saved_ids: HashSet<String> = HashSet::new();

    for candidate in &candidates {
        pb.inc(1);
        pb.set_message(candidate.player_id.clone());

        if saved_ids.contains(&candidate.player_id) {
            continue;
        }

        let bytes = match fetch_image(client, &candidate.src).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if args.verbose {
                    pb.println(format!(
                        "{}",
                        format!("[Fetch] {}: {}", candidate.src, e).red()
                    ));
                }
                continue;
            }
        };

        let dest = team_dir.join(format!("{}.{}", candidate.player_id, config::OUTPUT_EXT));
        match save_if_valid(&bytes, &dest, &spec).await {
            Ok(img) => {
                saved_ids.insert(candidate.player_id.clone());
                pb.println(format!(
                    "{}",
                    format!("  -> saved {} ({}x{})", candidate.player_id, img.width, img.height)
                        .green()
                ));
            }
            Err(reason) => {
                if args.verbose {
                    pb.println(format!(
                        "{}",
                        format!("[Image] {} skipped: {}", candidate.player_id, reason).yellow()
                    ));
                }
            }
        }
    }

    pb.finish_and_clear();

    Ok(TeamOutcome::Done(TeamReport {
        candidates: candidates.len(),
        saved: saved_ids.len(),
    }))
}
