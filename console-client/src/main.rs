mod config;
mod input;
mod render;

use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};
use ultimate_ttt_engine::{
    FirstPlayerMode, MatchPhase, SessionRng, SessionState, Turn, log, logger,
};

use config::ClientConfig;
use input::parse_move;
use render::render;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Random,
    Human,
    Bot,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(value: FirstPlayerArg) -> Self {
        match value {
            FirstPlayerArg::Random => FirstPlayerMode::Random,
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Bot => FirstPlayerMode::Bot,
        }
    }
}

#[derive(Parser)]
#[command(name = "ultimate_ttt_console")]
struct Args {
    #[arg(long, default_value = "ultimate_ttt.yaml")]
    config: String,

    #[arg(long)]
    depth: Option<u8>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let file_config = ClientConfig::from_yaml_file(&args.config)?;
    let mut settings = file_config.to_settings();
    if let Some(depth) = args.depth {
        settings.search_depth = depth;
    }
    if let Some(first_player) = args.first_player {
        settings.first_player = first_player.into();
    }

    let rng = match args.seed.or(file_config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = SessionState::create(settings, rng)?;
    session.start();

    run_match(&mut session)?;

    match session.winner() {
        Some(mark) if mark == session.bot_mark() => println!("The bot wins."),
        Some(mark) if mark == session.human_mark() => println!("You win!"),
        _ => println!("The game is a tie."),
    }

    Ok(())
}

fn run_match(session: &mut SessionState) -> Result<(), String> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while session.phase() == MatchPhase::InProgress {
        println!("{}", render(session.game_state(), session.constraint()));

        match session.turn() {
            Turn::Bot => {
                session.play_bot_turn()?;
            }
            Turn::Human => {
                print!("Your move ({}): ", session.human_mark().as_char());
                std::io::stdout()
                    .flush()
                    .map_err(|e| format!("Failed to flush stdout: {}", e))?;

                let line = match lines.next() {
                    Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
                    None => return Err("Input closed before the game finished".to_string()),
                };

                let (board_index, cell_index) = match parse_move(&line) {
                    Ok(parsed) => parsed,
                    Err(message) => {
                        println!("{}", message);
                        continue;
                    }
                };

                if let Err(message) = session.apply_human_move(board_index, cell_index) {
                    println!("{}", message);
                }
            }
        }
    }

    println!("{}", render(session.game_state(), session.constraint()));
    log!("Session over");
    Ok(())
}
