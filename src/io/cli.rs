//! Command-line interface for generating a figure and replaying cuts

use crate::figure::presenter::Category;
use crate::io::configuration::{
    DEFAULT_CATEGORY, DEFAULT_FILL_RATIO, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::report::{describe_cut, write_board};
use crate::io::script::{CutCommand, load_script};
use crate::scene::board::Board;
use crate::scene::field::OccupancyField;
use crate::spatial::shape::ShapeSpec;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// Shape families selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeKind {
    /// Square of `--side` cells at the origin
    Square,
    /// Every cell of the grid
    Full,
    /// Seeded random connected blob
    Random,
}

#[derive(Parser)]
#[command(name = "blocksplit")]
#[command(
    author,
    version,
    about = "Generate a linked block figure and replay cuts on it"
)]
/// Command-line arguments for the figure tool
pub struct Cli {
    /// Width of the figure's bounding grid
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of the figure's bounding grid
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Shape of the generated figure
    #[arg(long, value_enum, default_value_t = ShapeKind::Square)]
    pub shape: ShapeKind,

    /// Edge length for square shapes
    #[arg(long, default_value_t = 2)]
    pub side: usize,

    /// Share of occupied cells for random shapes
    #[arg(short, long, default_value_t = DEFAULT_FILL_RATIO)]
    pub fill: f64,

    /// Random seed for reproducible shapes
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Category tag passed to the presentation layer
    #[arg(long, default_value_t = DEFAULT_CATEGORY)]
    pub category: u16,

    /// Cut to apply, as FIG:X0,Y0:X1,Y1 (repeatable)
    #[arg(short, long = "cut", value_name = "FIG:X0,Y0:X1,Y1")]
    pub cuts: Vec<CutCommand>,

    /// Script with one `cut FIG X0 Y0 X1 Y1` per line, run after --cut
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Shape specification selected by the arguments
    pub fn shape_spec(&self) -> ShapeSpec {
        match self.shape {
            ShapeKind::Square => ShapeSpec::Square { side: self.side },
            ShapeKind::Full => ShapeSpec::Full,
            ShapeKind::Random => ShapeSpec::Random {
                fill: self.fill,
                seed: self.seed,
            },
        }
    }
}

/// Runs one generate-then-cut session and writes its report
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Cut commands from arguments followed by the script, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or parsed.
    pub fn commands(&self) -> Result<Vec<CutCommand>> {
        let mut commands = self.cli.cuts.clone();
        if let Some(path) = &self.cli.script {
            commands.extend(load_script(path)?);
        }
        Ok(commands)
    }

    /// Generate the figure, apply every cut and report the board
    ///
    /// # Errors
    ///
    /// Returns an error for invalid parameters, a failing cut or a failed
    /// write.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Board> {
        let fill_in_range = self.cli.fill > 0.0 && self.cli.fill <= 1.0;
        if self.cli.shape == ShapeKind::Random && !fill_in_range {
            return Err(invalid_parameter("fill", &self.cli.fill, &"must be in (0, 1]"));
        }

        let commands = self.commands()?;
        let mut board = Board::new(OccupancyField::new(self.cli.width, self.cli.height));
        let figure = board.spawn(
            self.cli.width,
            self.cli.height,
            &self.cli.shape_spec(),
            Category(self.cli.category),
            [0, 0],
        )?;
        tracing::info!(%figure, cuts = commands.len(), "figure generated");

        write_board(&board, out)?;

        for command in &commands {
            let report = board.cut(command.figure, command.first, command.second)?;
            writeln!(
                out,
                "cut {} {} <-> {}: {}",
                command.figure,
                command.first,
                command.second,
                describe_cut(&report)
            )?;
        }

        if !commands.is_empty() {
            write_board(&board, out)?;
        }

        Ok(board)
    }
}
