//! CLI entry point for generating a block figure and replaying cuts

use blocksplit::io::cli::{Cli, Session};
use blocksplit::io::logging;
use clap::Parser;

fn main() -> blocksplit::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let session = Session::new(cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.run(&mut out)?;
    Ok(())
}
