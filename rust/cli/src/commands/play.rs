//! # Play Command
//!
//! Hot-seat Flip 7 for 3 to 18 players sharing one terminal.
//!
//! Each prompt belongs to the active player, who draws (`d`) or stays
//! (`s`). Busts, Freezes and seven-number hands end the turn on their own;
//! Flip Three draws are revealed before the next prompt. The session ends
//! when someone reaches the target score, on `q`, or at end of input.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_event, format_hand, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, TurnCommand, parse_turn_command, validate_player_names};
use flip7_engine::game::{Match, MatchPhase, MatchSettings};
use flip7_engine::logger::{TurnLogger, TurnRecord};
use flip7_engine::player::Player;
use std::io::{BufRead, Write};

/// Command-line overrides for a play session. `None` falls back to the
/// resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub players: Option<u8>,
    pub names: Vec<String>,
    pub seed: Option<u64>,
    pub target: Option<u32>,
    /// JSONL file receiving one record per finished turn
    pub log: Option<String>,
}

/// Handle the play command: an interactive match read from `stdin`.
///
/// # Returns
///
/// * `Ok(())` when the match ends, the players quit or input runs out
/// * `Err(CliError)` on bad options, configuration or I/O errors
///
/// # Examples
///
/// ```ignore
/// use flip7_cli::PlayOptions;
/// use std::io::{stdin, stdout, stderr};
///
/// let opts = PlayOptions { seed: Some(7), ..Default::default() };
/// handle_play_command(&opts, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let names = resolve_names(opts, cfg.players, err)?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let settings = MatchSettings {
        target_score: opts.target.unwrap_or(cfg.target_score),
    };

    let mut game = Match::with_players(names, Some(seed), settings)?;
    game.start_match()?;
    let mut logger = match &opts.log {
        Some(path) => Some(TurnLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: players={} seed={} target={}",
        game.roster().len(),
        seed,
        settings.target_score
    )?;

    execute_match(&mut game, logger.as_mut(), stdin, out, err)
}

fn resolve_names(
    opts: &PlayOptions,
    default_count: u8,
    err: &mut dyn Write,
) -> Result<Vec<String>, CliError> {
    if opts.names.is_empty() {
        let count = opts.players.unwrap_or(default_count) as usize;
        return Ok((0..count).map(Player::default_name).collect());
    }
    if let Err(msg) = validate_player_names(&opts.names) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    if let Some(n) = opts.players
        && n as usize != opts.names.len()
    {
        let msg = format!(
            "--players {} does not match the {} names given",
            n,
            opts.names.len()
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    Ok(opts.names.iter().map(|n| n.trim().to_string()).collect())
}

/// Prompt loop. Rejected moves are reported and the same player is asked
/// again.
fn execute_match(
    game: &mut Match,
    mut logger: Option<&mut TurnLogger>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut turns = 0u32;

    while game.phase() == MatchPhase::InProgress {
        let seat = game.active_player();
        let player = &game.roster()[seat];
        ui::prompt(
            out,
            &format!(
                "{} ({} pts) hand {} round {} [d/s/q]: ",
                player.name(),
                player.total_score(),
                format_hand(game.turn().hand()),
                game.turn().round_score()
            ),
        )?;

        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        let finished = match parse_turn_command(&input) {
            ParseResult::Command(TurnCommand::Draw) => match game.request_draw() {
                Ok(events) => {
                    for event in &events {
                        writeln!(out, "  {}", format_event(event))?;
                    }
                    game.turn().status().is_terminal()
                }
                Err(e) => {
                    ui::write_error(err, &e.to_string())?;
                    false
                }
            },
            ParseResult::Command(TurnCommand::Stay) => match game.request_end_turn() {
                Ok(()) => true,
                Err(e) => {
                    ui::write_error(err, &e.to_string())?;
                    false
                }
            },
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                false
            }
        };

        if finished {
            finish_turn(game, logger.as_deref_mut(), out)?;
            turns += 1;
        }
    }

    writeln!(out, "Turns played: {}", turns)?;
    for p in game.roster() {
        writeln!(out, "  {}: {}", p.name(), p.total_score())?;
    }
    Ok(())
}

fn finish_turn(
    game: &mut Match,
    logger: Option<&mut TurnLogger>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = game.finalize_active_turn()?;
    let name = game.roster()[outcome.player_index].name().to_string();
    writeln!(out, "{}", format_outcome(&name, &outcome))?;

    if let Some(logger) = logger {
        let record = TurnRecord::from_outcome(logger.next_id(), Some(game.seed()), &name, &outcome);
        logger.write(&record)?;
    }
    if let Some(winner) = game.winner() {
        writeln!(
            out,
            "Winner: {} with {} points",
            winner.name(),
            winner.total_score()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn clear_env() {
        for var in [
            "FLIP7_CONFIG",
            "FLIP7_SEED",
            "FLIP7_PLAYERS",
            "FLIP7_TARGET_SCORE",
        ] {
            unsafe { std::env::remove_var(var) };
        }
    }

    fn run(opts: &PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn test_quit_immediately_prints_header() {
        clear_env();
        let opts = PlayOptions {
            seed: Some(42),
            ..Default::default()
        };
        let (result, out, _) = run(&opts, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("play: players=3 seed=42 target=200"));
        assert!(out.contains("Player 1 (0 pts)"));
        assert!(out.contains("Turns played: 0"));
    }

    #[test]
    #[serial]
    fn test_stay_on_empty_hand_is_rejected_and_reprompted() {
        clear_env();
        let opts = PlayOptions {
            seed: Some(1),
            ..Default::default()
        };
        let (result, out, err) = run(&opts, "s\nbogus\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Cannot end the turn before drawing a card"));
        assert!(err.contains("Unrecognized command"));
        assert_eq!(out.matches("Player 1 (0 pts)").count(), 3);
    }

    #[test]
    #[serial]
    fn test_end_of_input_ends_session() {
        clear_env();
        let opts = PlayOptions {
            seed: Some(5),
            ..Default::default()
        };
        let (result, out, _) = run(&opts, "d\n");
        assert!(result.is_ok());
        assert!(out.contains("Turns played:"));
    }

    #[test]
    #[serial]
    fn test_low_target_produces_winner() {
        clear_env();
        let opts = PlayOptions {
            names: vec!["Ann".into(), "Bo".into(), "Cy".into()],
            seed: Some(42),
            target: Some(1),
            ..Default::default()
        };
        let input = "d\ns\n".repeat(40);
        let (result, out, _) = run(&opts, &input);
        assert!(result.is_ok());
        assert!(out.contains("Winner:"), "output was:\n{}", out);
    }

    #[test]
    #[serial]
    fn test_names_and_player_count_must_agree() {
        clear_env();
        let opts = PlayOptions {
            players: Some(4),
            names: vec!["Ann".into(), "Bo".into(), "Cy".into()],
            ..Default::default()
        };
        let (result, _, err) = run(&opts, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("does not match"));
    }

    #[test]
    #[serial]
    fn test_too_few_names_is_engine_error() {
        clear_env();
        let opts = PlayOptions {
            names: vec!["Ann".into(), "Bo".into()],
            ..Default::default()
        };
        let (result, _, _) = run(&opts, "");
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    #[serial]
    fn test_turns_are_logged_as_jsonl() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("turns.jsonl");
        let opts = PlayOptions {
            seed: Some(42),
            target: Some(1),
            log: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let input = "d\ns\n".repeat(40);
        let (result, _, _) = run(&opts, &input);
        assert!(result.is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<TurnRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.seed == Some(42) && r.ts.is_some()));
        assert!(records.last().unwrap().winner.is_some());
    }
}
