//! Tests for command-line parsing and session replay

#[cfg(test)]
mod tests {
    use blocksplit::FigureError;
    use blocksplit::figure::FigureId;
    use blocksplit::io::cli::{Cli, Session, ShapeKind};
    use blocksplit::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
    use blocksplit::spatial::shape::ShapeSpec;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> blocksplit::Result<Cli> {
        Cli::try_parse_from(args).map_err(|err| FigureError::InvalidParameter {
            parameter: "args",
            value: args.join(" "),
            reason: err.to_string(),
        })
    }

    fn run(cli: Cli) -> blocksplit::Result<(blocksplit::scene::Board, String)> {
        let mut out = Vec::new();
        let board = Session::new(cli).run(&mut out)?;
        Ok((board, String::from_utf8_lossy(&out).into_owned()))
    }

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() -> blocksplit::Result<()> {
        let cli = parse(&["blocksplit"])?;

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.shape, ShapeKind::Square);
        assert!(cli.cuts.is_empty());
        assert!(!cli.quiet);
        Ok(())
    }

    // Tests short flags and repeated cuts
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() -> blocksplit::Result<()> {
        let cli = parse(&[
            "blocksplit", "-w", "5", "-H", "3", "-s", "7", "-c", "0:0,0:1,0", "-c", "0:0,1:1,1",
            "-vv",
        ])?;

        assert_eq!(cli.width, 5);
        assert_eq!(cli.height, 3);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.cuts.len(), 2);
        assert_eq!(cli.verbose, 2);
        Ok(())
    }

    #[test]
    fn test_cli_rejects_malformed_cut() {
        assert!(Cli::try_parse_from(["blocksplit", "--cut", "0:0,0"]).is_err());
    }

    #[test]
    fn test_shape_spec_selection() -> blocksplit::Result<()> {
        let square = parse(&["blocksplit", "--side", "3"])?;
        assert_eq!(square.shape_spec(), ShapeSpec::Square { side: 3 });

        let full = parse(&["blocksplit", "--shape", "full"])?;
        assert_eq!(full.shape_spec(), ShapeSpec::Full);

        let random = parse(&["blocksplit", "--shape", "random", "-f", "0.5", "-s", "3"])?;
        assert_eq!(
            random.shape_spec(),
            ShapeSpec::Random {
                fill: 0.5,
                seed: 3
            }
        );
        Ok(())
    }

    // Tests the session splits the default square with two cuts
    // Verified by dropping the second cut
    #[test]
    fn test_session_replays_cuts() -> blocksplit::Result<()> {
        let cli = parse(&["blocksplit", "-c", "0:0,0:1,0", "-c", "0:0,1:1,1"])?;
        let (board, output) = run(cli)?;

        assert_eq!(board.figures().len(), 2);
        assert!(output.contains("cut #0 (0,0) <-> (1,0): cut the link, figure #0 remains whole"));
        assert!(output.contains("figure #0 split, detached figure #1"));
        assert!(output.contains("Figure #1 1x2 at (1, 0)"));
        Ok(())
    }

    #[test]
    fn test_session_without_cuts_reports_once() -> blocksplit::Result<()> {
        let (board, output) = run(parse(&["blocksplit"])?)?;
        assert_eq!(board.figures().len(), 1);
        assert_eq!(output.matches("Figure #0").count(), 1);
        Ok(())
    }

    #[test]
    fn test_session_reads_script_after_arguments() -> blocksplit::Result<()> {
        let mut script = tempfile::NamedTempFile::new()?;
        writeln!(script, "# second cut splits the square")?;
        writeln!(script, "cut 0 0 1 1 1")?;
        let path = script.path().to_string_lossy().into_owned();

        let cli = parse(&["blocksplit", "-c", "0:0,0:1,0", "--script", &path])?;
        let session = Session::new(cli);
        assert_eq!(session.commands()?.len(), 2);

        let mut out = Vec::new();
        let board = session.run(&mut out)?;
        assert!(board.figure(FigureId(1)).is_some());
        Ok(())
    }

    // Tests fill ratio validation happens before generation
    // Verified by accepting zero fill
    #[test]
    fn test_session_rejects_invalid_fill() -> blocksplit::Result<()> {
        let cli = parse(&["blocksplit", "--shape", "random", "-f", "0"])?;
        let result = run(cli);
        assert!(matches!(
            result,
            Err(FigureError::InvalidParameter {
                parameter: "fill",
                ..
            })
        ));
        Ok(())
    }

    // Tests the fill ratio is ignored by shapes that do not grow randomly
    // Verified by validating fill for every shape
    #[test]
    fn test_session_ignores_fill_for_fixed_shapes() -> blocksplit::Result<()> {
        let (board, _) = run(parse(&["blocksplit", "--shape", "full", "-f", "0"])?)?;
        assert_eq!(board.figures().len(), 1);

        let (board, _) = run(parse(&["blocksplit", "-f", "7.5"])?)?;
        assert_eq!(
            board.figure(FigureId(0)).map(|placed| placed.figure.block_count()),
            Some(4)
        );
        Ok(())
    }

    #[test]
    fn test_session_propagates_cut_errors() -> blocksplit::Result<()> {
        let cli = parse(&["blocksplit", "-c", "0:0,0:1,1"])?;
        assert!(matches!(run(cli), Err(FigureError::NotAdjacent { .. })));
        Ok(())
    }
}
