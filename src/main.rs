use std::error::Error;
use std::path::Path;

use connect_four::config::{AppConfig, PlayerKind};
use connect_four::game::{Board, Cell, GameModel, GameOutcome, Player, COLS, ROWS};
use connect_four::players::{Agent, HumanPlayer, MinimaxPlayer, RandomPlayer};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "connect_four.toml".to_string());
    let config = AppConfig::load_or_default(Path::new(&config_path))?;

    let mut agent_one = build_agent(config.players.one, Player::One, &config);
    let mut agent_two = build_agent(config.players.two, Player::Two, &config);
    let mut model = GameModel::new();

    loop {
        println!("{}", render(&model.get_grid()));

        let mover = model.current_player();
        let agent = match mover {
            Player::One => &mut agent_one,
            Player::Two => &mut agent_two,
        };

        if agent.is_automated() {
            println!("{} ({}) is thinking...", mover.name(), agent.name());
        } else {
            println!("{} to move.", mover.name());
        }

        let column = agent.get_move(&model);
        model.play(column)?;
        println!("{} plays column {}.\n", mover.name(), column + 1);

        if let Some(outcome) = model.outcome() {
            println!("{}", render(&model.get_grid()));
            match outcome {
                GameOutcome::Winner(winner) => println!("{} wins!", winner.name()),
                GameOutcome::Draw => println!("It's a draw."),
            }
            return Ok(());
        }
    }
}

fn build_agent(kind: PlayerKind, player: Player, config: &AppConfig) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::from_stdio()),
        PlayerKind::Random => Box::new(RandomPlayer::new()),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(player, config.engine.search_depth)),
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            let symbol = match board.get(col, row) {
                Cell::Empty => '.',
                Cell::One => 'X',
                Cell::Two => 'O',
            };
            out.push(symbol);
            if col + 1 < COLS {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("1 2 3 4 5 6 7");
    out
}
