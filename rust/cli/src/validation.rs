//! Input parsing for the interactive `play` command.

/// What the active player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    Draw,
    Stay,
}

/// Result type for parsing user input into turn commands.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Command(TurnCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a turn command.
///
/// Accepts the following input formats (case-insensitive):
/// - "d", "draw", "h" or "hit" → Draw
/// - "s", "stay", "stop" or "end" → Stay
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use flip7_cli::validation::{parse_turn_command, ParseResult, TurnCommand};
/// assert_eq!(parse_turn_command("Hit"), ParseResult::Command(TurnCommand::Draw));
/// assert_eq!(parse_turn_command("s"), ParseResult::Command(TurnCommand::Stay));
/// assert_eq!(parse_turn_command("q"), ParseResult::Quit);
///
/// match parse_turn_command("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_turn_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" => ParseResult::Quit,
        "d" | "draw" | "h" | "hit" => ParseResult::Command(TurnCommand::Draw),
        "s" | "stay" | "stop" | "end" => ParseResult::Command(TurnCommand::Stay),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use d (draw), s (stay) or q (quit)",
            other
        )),
    }
}

/// Checks a `--names` list: every name non-blank and unique.
pub fn validate_player_names(names: &[String]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for (i, name) in names.iter().enumerate() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(format!("player name {} is blank", i + 1));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(format!("duplicate player name '{}'", trimmed));
        }
    }
    Ok(())
}
