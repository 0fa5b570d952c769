use clap::{Parser, Subcommand, ValueEnum};
use pisweeper_core::{CellCount, Coord, Preset};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PresetArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Beginner => Preset::Beginner,
            PresetArg::Intermediate => Preset::Intermediate,
            PresetArg::Expert => Preset::Expert,
        }
    }
}

/// One line typed at the prompt, the first word picks the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Reveal the cell at X Y
    #[command(visible_alias = "r")]
    Reveal { x: Coord, y: Coord },
    /// Place or remove a flag at X Y
    #[command(visible_alias = "f")]
    Flag { x: Coord, y: Coord },
    /// Start over, on the same board size unless a preset is given
    #[command(visible_alias = "n")]
    New {
        #[arg(value_enum)]
        preset: Option<PresetArg>,
    },
    /// Start a game with custom dimensions
    #[command(visible_alias = "c")]
    Custom {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    /// Draw the board again
    #[command(visible_alias = "s")]
    Show,
    #[command(visible_alias = "q", alias = "exit")]
    Quit,
}

/// Parse a prompt line, `None` for blank input.
pub(crate) fn parse(line: &str) -> Option<Result<Command, clap::Error>> {
    let mut words = line.split_whitespace().peekable();
    words.peek()?;
    Some(Line::try_parse_from(words).map(|line| line.command))
}
