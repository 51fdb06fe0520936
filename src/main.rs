use clap::Parser;
use std::fs;
use std::path::PathBuf;

use jigmatch::{find_matches, MatchConfig, Piece, PieceRecord};

#[derive(Parser)]
#[command(name = "jigmatch", about = "Rank candidate edge matches between scanned jigsaw pieces")]
struct Cli {
    /// Input JSON: array of piece records (id, corners, contour, edges)
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON: ranked match list
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum Hausdorff distance for a valid match (lower = stricter)
    #[arg(long, default_value = "0.15")]
    threshold: f64,

    /// Points per canonical edge curve
    #[arg(long, default_value = "100")]
    samples: usize,

    /// Worker threads for pair evaluation (0 = all cores)
    #[arg(long, default_value = "0")]
    workers: usize,

    /// How many top matches to print
    #[arg(long, default_value = "10")]
    top: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Header
    eprintln!();
    eprintln!("  jigmatch \u{00b7} {}", cli.input.display());
    eprintln!();

    // Boundary validation: malformed records are reported and dropped,
    // the run continues with the rest.
    let records: Vec<PieceRecord> = serde_json::from_str(&fs::read_to_string(&cli.input)?)?;
    let total_records = records.len();
    let mut pieces: Vec<Piece> = Vec::with_capacity(total_records);
    for record in records {
        match Piece::try_from(record) {
            Ok(piece) => pieces.push(piece),
            Err(err) => eprintln!("  Warn        {}", err),
        }
    }
    eprintln!("  Load        {} pieces ({} records)", pieces.len(), total_records);

    let config = MatchConfig {
        distance_threshold: cli.threshold,
        sample_points: cli.samples,
        workers: cli.workers,
        ..MatchConfig::default()
    };

    // Pipeline (lib prints step-by-step progress to stderr)
    let report = find_matches(&pieces, &config)?;

    fs::write(&cli.output, serde_json::to_string_pretty(&report.matches)?)?;

    // Footer
    eprintln!();
    eprintln!("  \u{2713} {}", cli.output.display());
    eprintln!();

    let top = cli.top.min(report.matches.len());
    if top > 0 {
        eprintln!("  Top {} of {} matches:", top, report.matches.len());
        for (rank, m) in report.matches.iter().take(top).enumerate() {
            eprintln!(
                "  {:>3}. {}.{} \u{2194} {}.{}  confidence {:>5.1}%  distance {:.4}",
                rank + 1,
                m.piece1_id,
                m.piece1_edge,
                m.piece2_id,
                m.piece2_edge,
                m.confidence * 100.0,
                m.distance,
            );
        }
        eprintln!();
    }

    Ok(())
}
