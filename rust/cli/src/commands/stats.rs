//! Statistics aggregation over JSONL turn logs written by `play --log`.
//!
//! Computes per-player turn counts, busts, freezes, Flip 7 bonuses and
//! banked points, and checks that each record's `total_after` matches the
//! running total implied by the records before it.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::ui;
use flip7_engine::logger::TurnRecord;
use flip7_engine::turn::TurnStatus;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Default)]
struct PlayerStats {
    name: String,
    turns: u32,
    busts: u32,
    freezes: u32,
    flip7s: u32,
    points: u32,
    total: u32,
}

/// Aggregates statistics from a JSONL turn log.
///
/// Unreadable lines are reported and skipped. A record whose running total
/// disagrees with the turns before it fails the command with exit code `2`
/// after the summary is printed.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(input) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
            return Err(CliError::Io(e));
        }
    };

    let mut players: BTreeMap<usize, PlayerStats> = BTreeMap::new();
    let mut lines_seen = 0u32;
    let mut records = 0u32;
    let mut consistent = true;
    let mut seed = None;
    let mut winner = None;

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        lines_seen += 1;
        let rec: TurnRecord = parse_json_or_continue!(line, err, i + 1);

        // A new seed starts a new match; totals restart from zero.
        if seed.is_some() && seed != rec.seed {
            for p in players.values_mut() {
                p.total = 0;
            }
        }
        seed = rec.seed;
        records += 1;

        let stats = players.entry(rec.player_index).or_default();
        stats.name = rec.player_name.clone();
        stats.turns += 1;
        stats.points = stats.points.saturating_add(rec.awarded);
        match rec.status {
            TurnStatus::Busted => stats.busts += 1,
            TurnStatus::Frozen => stats.freezes += 1,
            TurnStatus::HandLimitReached => stats.flip7s += 1,
            _ => {}
        }

        let expected = stats.total.checked_add(rec.awarded);
        if expected != Some(rec.total_after) {
            consistent = false;
            let expected = match expected {
                Some(total) => total.to_string(),
                None => "more than u32::MAX".to_string(),
            };
            ui::write_error(
                err,
                &format!(
                    "Running total mismatch at turn {}: expected {}, recorded {}",
                    rec.turn_id, expected, rec.total_after
                ),
            )?;
        }
        stats.total = rec.total_after;

        if let Some(w) = rec.winner {
            winner = Some(w);
        }
    }

    writeln!(out, "Turns: {}", records)?;
    let skipped = lines_seen - records;
    if skipped > 0 {
        ui::display_warning(err, &format!("Skipped {} unreadable line(s)", skipped))?;
    }
    for (seat, p) in &players {
        writeln!(
            out,
            "  #{} {}: turns={} busts={} freezes={} flip7={} points={}",
            seat + 1,
            p.name,
            p.turns,
            p.busts,
            p.freezes,
            p.flip7s,
            p.points
        )?;
    }
    if let Some(w) = winner {
        let name = players.get(&w).map(|p| p.name.as_str()).unwrap_or("?");
        writeln!(out, "Winner: {}", name)?;
    }

    if consistent {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "turn log has inconsistent running totals".to_string(),
        ))
    }
}
