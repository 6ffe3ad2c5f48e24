use anyhow::{bail, Context};
use chess_engine::api;
use chess_engine::PieceKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

use cli::{Cli, ScriptedMove};
use report::{PlyRecord, PlySource, Report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `--json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut position = api::new_game();
    let mut plies = Vec::new();

    for text in &cli.moves {
        let scripted: ScriptedMove = text.parse()?;
        let mv = api::create_move_with_promotion(
            &position,
            scripted.origin,
            scripted.destination,
            |_| scripted.promotion.unwrap_or(PieceKind::Queen),
        );
        if mv.is_null() {
            bail!("{} is not a legal move here", text);
        }

        let side = position.side_to_move();
        let transition = api::make_move(&position, &mv);
        if !transition.status().is_done() {
            bail!("{} was rejected: {:?}", text, transition.status());
        }
        plies.push(PlyRecord::new(side, &mv, PlySource::Scripted));
        position = transition.into_position();
    }

    for _ in 0..cli.plies {
        let state = api::get_game_state(&position);
        if state.is_over() {
            info!("Game over: {:?}", state);
            break;
        }

        let side = position.side_to_move();
        let mv = api::best_move(&position, cli.depth).context("engine found no move")?;
        let transition = api::make_move(&position, &mv);
        if !transition.status().is_done() {
            bail!("engine move {} was rejected: {:?}", mv, transition.status());
        }
        plies.push(PlyRecord::new(side, &mv, PlySource::Engine));
        position = transition.into_position();
    }

    let report = Report::new(&position, plies);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
