//! Play command - interactive session in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: command_loop()
//! - Level 3: parse_command(), execute()
//! - Level 4: map rendering and prompts

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use barovia_core::{Board, Effects, Hex, PlayerState, RenderUpdate, Session};

use crate::clipboard::TerminalClipboard;
use crate::storage::FileStorage;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Directory holding the save slot
    #[arg(long, default_value = ".barovia")]
    pub save_dir: PathBuf,

    /// Session label stamped into saves
    #[arg(long)]
    pub seed: Option<String>,

    /// Board width in axial q
    #[arg(long, default_value = "11")]
    pub cols: i32,

    /// Board height in axial r
    #[arg(long, default_value = "9")]
    pub rows: i32,
}

/// One parsed line of player input
#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Move(Hex),
    Map,
    Status,
    Log,
    New,
    Save,
    Load,
    Export,
    Import(String),
    Help,
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Build the board and collaborators
/// 2. Start the session and print its opening effects
/// 3. Hand control to the command loop
pub fn run(args: PlayArgs) -> Result<()> {
    let board = build_board(&args)?;
    let storage = FileStorage::new(&args.save_dir);

    tracing::info!(
        "Starting session: {}x{} board, saves in {}",
        args.cols,
        args.rows,
        args.save_dir.display()
    );

    let (mut session, effects) =
        Session::start(board, args.seed.as_deref(), storage, TerminalClipboard);
    let mut history = Vec::new();
    apply_effects(&session, &mut history, &effects);
    println!("Type help to list commands.");

    command_loop(&mut session, &mut history)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read, parse, and execute commands until quit or end of input
fn command_loop(
    session: &mut Session<FileStorage, TerminalClipboard>,
    history: &mut Vec<String>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Map) => {
                print!("{}", render_map(session.board(), &session.render_update()));
            }
            Ok(Command::Status) => print_status(session.state()),
            Ok(Command::Log) => {
                for line in history.iter() {
                    println!("{}", line);
                }
            }
            Ok(command) => {
                let effects = execute(session, command);
                apply_effects(session, history, &effects);
            }
            Err(message) => println!("{}", message),
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Parse one input line
fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Type a command, or help to list them.".to_string());
    };
    match word {
        "move" | "m" => {
            let q = parts.next().and_then(|v| v.parse().ok());
            let r = parts.next().and_then(|v| v.parse().ok());
            match (q, r) {
                (Some(q), Some(r)) => Ok(Command::Move(Hex::new(q, r))),
                _ => Err("Usage: move <q> <r>".to_string()),
            }
        }
        "map" => Ok(Command::Map),
        "status" => Ok(Command::Status),
        "log" => Ok(Command::Log),
        "new" => Ok(Command::New),
        "save" => Ok(Command::Save),
        "load" => Ok(Command::Load),
        "export" => Ok(Command::Export),
        "import" => {
            let raw = line.trim_start().strip_prefix("import").unwrap_or("").trim();
            if raw.is_empty() {
                Err("Usage: import <save json>".to_string())
            } else {
                Ok(Command::Import(raw.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {}. Type help.", other)),
    }
}

/// Dispatch a state-changing command to the session
fn execute(
    session: &mut Session<FileStorage, TerminalClipboard>,
    command: Command,
) -> Effects {
    match command {
        Command::Move(target) => session.try_move(target),
        Command::New => session.new_game(),
        Command::Save => session.save(),
        Command::Load => session.load(),
        Command::Export => session.export_text(),
        Command::Import(raw) => session.import_text(&raw),
        // handled by the loop before dispatch
        Command::Map | Command::Status | Command::Log | Command::Help | Command::Quit => {
            Effects::default()
        }
    }
}

/// Print the side effects of one operation and fold them into the log history
fn apply_effects(
    session: &Session<FileStorage, TerminalClipboard>,
    history: &mut Vec<String>,
    effects: &Effects,
) {
    if effects.clear_log {
        history.clear();
        // the terminal scrollback stays; a blank line marks the fresh log
        println!();
    }
    for line in &effects.log {
        history.push(line.clone());
        println!("{}", line);
    }
    if let Some(update) = &effects.render {
        print!("{}", render_map(session.board(), update));
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

const HELP: &str = "\
Commands:
  move <q> <r>   step to an adjacent hex (alias: m)
  map            redraw the board
  status         show position, hit points, turn, seed
  log            replay the event log
  new            start over and drop the save
  save           write the save slot
  load           restore the save slot
  export         print the save text for copying
  import <json>  restore from pasted save text
  quit           leave the mists (alias: q, exit)";

fn build_board(args: &PlayArgs) -> Result<Board> {
    if args.cols < 1 || args.rows < 1 {
        anyhow::bail!("board dimensions must be positive: {}x{}", args.cols, args.rows);
    }
    Ok(Board::new(args.cols, args.rows))
}

/// Draw the board with a half-tile shift per row
///
/// `@` marks the player, `*` the reachable neighbors, `.` everything else.
fn render_map(board: &Board, update: &RenderUpdate) -> String {
    let mut out = String::new();
    for r in 0..board.rows {
        for _ in 0..r {
            out.push(' ');
        }
        for q in 0..board.cols {
            let hex = Hex::new(q, r);
            let glyph = if hex == update.here {
                '@'
            } else if update.adjacent.contains(&hex) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
            out.push(' ');
        }
        out.pop();
        out.push('\n');
    }
    out
}

fn print_status(state: &PlayerState) {
    println!(
        "Position ({}, {})  HP {}  Turn {}  Seed {}",
        state.here.q, state.here.r, state.hp, state.turn, state.seed
    );
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_command("move 6 4\n").unwrap(),
            Command::Move(Hex::new(6, 4))
        );
        assert_eq!(
            parse_command("  m -1 0 ").unwrap(),
            Command::Move(Hex::new(-1, 0))
        );
    }

    #[test]
    fn test_parse_move_needs_two_numbers() {
        assert!(parse_command("move").is_err());
        assert!(parse_command("move 6").is_err());
        assert!(parse_command("move a b").is_err());
    }

    #[test]
    fn test_parse_bare_words() {
        assert_eq!(parse_command("map\n").unwrap(), Command::Map);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("save").unwrap(), Command::Save);
        assert_eq!(parse_command("load").unwrap(), Command::Load);
        assert_eq!(parse_command("export").unwrap(), Command::Export);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_import_keeps_payload() {
        let command = parse_command(r#"import {"q":1,"r":2}"#).unwrap();
        assert_eq!(command, Command::Import(r#"{"q":1,"r":2}"#.to_string()));
    }

    #[test]
    fn test_parse_import_needs_payload() {
        assert!(parse_command("import").is_err());
        assert!(parse_command("import   ").is_err());
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert!(parse_command("fly 1 2").is_err());
        assert!(parse_command("").is_err());
        assert!(parse_command("   \n").is_err());
    }

    #[test]
    fn test_render_map_marks_player_and_neighbors() {
        let update = RenderUpdate {
            here: Hex::new(0, 0),
            adjacent: vec![Hex::new(1, 0), Hex::new(0, 1)],
        };
        let map = render_map(&Board::new(3, 2), &update);
        assert_eq!(map, "@ * .\n * . .\n");
    }

    #[test]
    fn test_render_map_indents_each_row() {
        let update = RenderUpdate {
            here: Hex::new(1, 1),
            adjacent: vec![],
        };
        let map = render_map(&Board::new(2, 3), &update);
        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows, vec![". .", " . @", "  . ."]);
    }

    #[test]
    fn test_build_board_rejects_empty() {
        let args = PlayArgs {
            save_dir: PathBuf::from(".barovia"),
            seed: None,
            cols: 0,
            rows: 9,
        };
        assert!(build_board(&args).is_err());
    }
}
