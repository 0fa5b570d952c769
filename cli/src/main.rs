use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use pisweeper_core::{CellCount, Coord, NewGameRequest, Preset};

use app::{App, Flow};
use command::PresetArg;

mod app;
mod clock;
mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, ignored when custom dimensions are given
    #[arg(short, long, value_enum, default_value_t = PresetArg::Beginner)]
    preset: PresetArg,

    /// Rows of a custom board
    #[arg(long, requires_all = ["columns", "mines"])]
    rows: Option<Coord>,

    /// Columns of a custom board
    #[arg(long, requires_all = ["rows", "mines"])]
    columns: Option<Coord>,

    /// Mines on a custom board
    #[arg(long, requires_all = ["rows", "columns"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every change as a JSON line instead of drawing the board
    #[arg(long)]
    json: bool,

    /// Color revealed counts on the board
    #[arg(long)]
    color: bool,
}

impl Args {
    fn request(&self) -> NewGameRequest {
        match (self.rows, self.columns, self.mines) {
            (Some(rows), Some(columns), Some(mines)) => NewGameRequest::Custom {
                rows,
                columns,
                mines,
            },
            _ => Preset::from(self.preset).into(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = args.request().config().context("Invalid board")?;
    let mut app = App::new(
        config,
        args.seed,
        args.json,
        args.color,
        io::stdout().lock(),
    )?;

    let mut lines = io::stdin().lock().lines();
    loop {
        app.prompt()?;
        let Some(line) = lines.next() else {
            break;
        };
        if app.handle(&line?)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
