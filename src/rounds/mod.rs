use crate::cli::Args;
use crate::geo::models::LatLng;
use errors::RoundsLoadError;
use models::{Round, RoundRecord};
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

pub mod errors;
pub mod models;

pub fn init(args: &Args) -> Result<Arc<[Round]>, RoundsLoadError> {
    let rounds_file = File::open(&args.rounds)?;
    let mut rounds = parse(BufReader::new(rounds_file))?;
    if args.shuffle_rounds {
        rounds.shuffle(&mut rand::thread_rng());
    }
    tracing::info!(
        rounds = rounds.len(),
        shuffled = args.shuffle_rounds,
        "Loaded rounds from {}.",
        args.rounds.display(),
    );
    Ok(rounds.into())
}

/// Reads an NDJSON round catalogue. Blank lines are skipped; ids and default asset keys follow
/// the order of the non-blank lines.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Round>, RoundsLoadError> {
    let mut rounds = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = line_index + 1;
        let record: RoundRecord =
            serde_json::from_str(&line).map_err(|source| RoundsLoadError::Parse {
                line: line_number,
                source,
            })?;
        let truth = LatLng::new(record.lat, record.lng).map_err(|_| {
            RoundsLoadError::InvalidCoordinate {
                line: line_number,
                lat: record.lat,
                lng: record.lng,
            }
        })?;
        let id = rounds.len() + 1;
        rounds.push(Round {
            id,
            truth,
            asset_key: record
                .asset_key
                .unwrap_or_else(|| format!("round{id}.jpeg")),
            location_name: record.location_name,
        });
    }
    if rounds.is_empty() {
        return Err(RoundsLoadError::Empty);
    }
    Ok(rounds)
}
