use crate::cli::{ConvertArgs, FileFormat};
use crate::config::{AppConfig, PartialAppConfig, STDIN_PATH};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use protstr::{
    core::io::{
        csv::CsvFile,
        table::TableFile,
        traits::{ChainFile, FeatureFile, FeatureFormatOptions},
    },
    core::models::{chain::BackboneChain, features::ResidueFeatures},
    engine::progress::ProgressReporter,
    workflows,
};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const STDOUT_LABEL: &str = "<stdout>";

pub fn run(args: ConvertArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialAppConfig::from_file(path)?,
        None => PartialAppConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading CA coordinates from {:?}", &config.input_path);
    let chain = read_chain(&config)?;
    if chain.is_empty() {
        warn!("Input contains no residues; writing an empty feature table.");
    }

    let progress = (!quiet).then(CliProgressHandler::new);
    let reporter = match &progress {
        Some(handler) => ProgressReporter::with_callback(handler.get_callback()),
        None => ProgressReporter::new(),
    };

    info!("Invoking the conversion workflow...");
    let features =
        workflows::convert::run(&chain, &config.conversion, &reporter).inspect_err(|_| {
            if let Some(handler) = &progress {
                handler.abandon();
            }
        })?;

    write_features(&features, &config)?;
    if let Some(path) = &config.output_path {
        info!("Features for {} residue(s) written to {:?}", features.len(), path);
    }
    Ok(())
}

fn read_chain(config: &AppConfig) -> Result<BackboneChain> {
    read_chain_from(config, || io::stdin().lock())
}

fn read_chain_from<R, S>(config: &AppConfig, stdin: S) -> Result<BackboneChain>
where
    R: BufRead,
    S: FnOnce() -> R,
{
    match config.input_format {
        FileFormat::Table => read_with::<TableFile, _, _>(&config.input_path, stdin),
        FileFormat::Csv => read_with::<CsvFile, _, _>(&config.input_path, stdin),
    }
}

fn read_with<F, R, S>(path: &Path, stdin: S) -> Result<BackboneChain>
where
    F: ChainFile,
    F::Error: Send + Sync + 'static,
    R: BufRead,
    S: FnOnce() -> R,
{
    let result = if path == Path::new(STDIN_PATH) {
        F::read_from(&mut stdin())
    } else {
        F::read_from_path(path)
    };
    result.map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn write_features(features: &[ResidueFeatures], config: &AppConfig) -> Result<()> {
    match config.output_format {
        FileFormat::Table => write_with::<TableFile>(features, config),
        FileFormat::Csv => write_with::<CsvFile>(features, config),
    }
}

fn write_with<F>(features: &[ResidueFeatures], config: &AppConfig) -> Result<()>
where
    F: FeatureFile,
    F::Error: Send + Sync + 'static,
{
    let options: &FeatureFormatOptions = &config.format_options;
    let (label, result) = match &config.output_path {
        Some(path) => (path.clone(), F::write_to_path(features, options, path)),
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            let result = F::write_to(features, options, &mut writer)
                .and_then(|_| writer.flush().map_err(F::Error::from));
            (PathBuf::from(STDOUT_LABEL), result)
        }
    };
    result.map_err(|e| CliError::FileWriting {
        path: label,
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use protstr::engine::error::EngineError;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const SQUARE_PATH: &str = "0 0 0\n1 0 0\n1 1 0\n0 1 0\n0 1 1\n";

    fn convert_args(argv: &[&str]) -> ConvertArgs {
        let mut full = vec!["protstr", "convert"];
        full.extend_from_slice(argv);
        let Commands::Convert(args) = Cli::try_parse_from(full).unwrap().command;
        args
    }

    #[test]
    fn converts_table_file_to_table_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        let output = dir.path().join("features.txt");
        fs::write(&input, SQUARE_PATH).unwrap();

        run(
            convert_args(&[
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-p",
                "1",
            ]),
            true,
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                "CCA CCPTA_F CCPTD_F CCPTA_B CCPTD_B",
                "0.0 0.0 0 0.0 0",
                "0.5 0.0 0 0.0 0",
                "0.5 0.0 0 0.5 1",
                "0.5 0.5 1 0.0 0",
                "0.0 0.0 0 0.0 0",
            ]
        );
    }

    #[test]
    fn csv_output_is_inferred_from_extension() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.csv");
        let output = dir.path().join("features.csv");
        fs::write(&input, "x,y,z\n0,0,0\n1,0,0\n1,1,0\n0,1,0\n0,1,1\n").unwrap();

        run(
            convert_args(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]),
            true,
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("CCA,CCPTA_F,CCPTD_F,CCPTA_B,CCPTD_B"));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn config_file_supplies_output_settings() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        let output = dir.path().join("features.out");
        let config = dir.path().join("protstr.toml");
        fs::write(&input, SQUARE_PATH).unwrap();
        fs::write(&config, "[output]\nformat = \"csv\"\nprecision = 2\n").unwrap();

        run(
            convert_args(&[
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-c",
                config.to_str().unwrap(),
            ]),
            true,
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("CCA,CCPTA_F,CCPTD_F,CCPTA_B,CCPTD_B"));
        assert!(written.contains("0.50,0.50,1,0.00,0"));
    }

    #[test]
    fn malformed_input_reports_file_parsing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        fs::write(&input, "0 0 0\n1 zero 0\n").unwrap();

        let result = run(convert_args(&[input.to_str().unwrap()]), true);
        match result {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, input),
            other => panic!("expected a parsing error, got {:?}", other),
        }
    }

    #[test]
    fn missing_input_reports_file_parsing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.txt");
        let result = run(convert_args(&[input.to_str().unwrap()]), true);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn coincident_residues_follow_degenerate_bond_policy() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        let output = dir.path().join("features.txt");
        fs::write(&input, "0 0 0\n1 0 0\n1 0 0\n2 0 0\n").unwrap();

        let strict = run(
            convert_args(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]),
            true,
        );
        assert!(matches!(
            strict,
            Err(CliError::Core(EngineError::DegenerateGeometry { .. }))
        ));

        run(
            convert_args(&[
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--degenerate-bonds",
                "zero",
            ]),
            true,
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 5);
    }

    #[test]
    fn unwritable_output_reports_file_writing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        fs::write(&input, SQUARE_PATH).unwrap();

        let result = run(
            convert_args(&[input.to_str().unwrap(), "-o", dir.path().to_str().unwrap()]),
            true,
        );
        assert!(matches!(result, Err(CliError::FileWriting { .. })));
    }

    #[test]
    fn dash_reads_table_rows_from_stdin() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&convert_args(&["-"]))
            .unwrap();

        let chain = read_chain_from(&config, || Cursor::new(SQUARE_PATH)).unwrap();
        assert_eq!(chain.len(), 5);
    }

    #[test]
    fn dash_reads_csv_rows_from_stdin() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&convert_args(&["-", "--input-format", "csv"]))
            .unwrap();

        let chain =
            read_chain_from(&config, || Cursor::new("x,y,z\n0,0,0\n1,0,0\n1,1,0\n")).unwrap();
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn malformed_stdin_is_reported_against_the_dash_path() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&convert_args(&["-"]))
            .unwrap();

        match read_chain_from(&config, || Cursor::new("0 0\n")) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, PathBuf::from("-")),
            other => panic!("expected a parsing error, got {:?}", other),
        }
    }

    #[test]
    fn stdin_is_not_touched_for_file_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        fs::write(&input, SQUARE_PATH).unwrap();
        let config = PartialAppConfig::default()
            .merge_with_cli(&convert_args(&[input.to_str().unwrap()]))
            .unwrap();

        let chain = read_chain_from(&config, || -> Cursor<&str> {
            panic!("stdin must not be opened for a file path")
        })
        .unwrap();
        assert_eq!(chain.len(), 5);
    }

    #[test]
    fn engine_failure_with_progress_display_still_surfaces_the_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ca.txt");
        let output = dir.path().join("features.txt");
        fs::write(&input, "0 0 0\n1 0 0\n1 0 0\n2 0 0\n").unwrap();

        let result = run(
            convert_args(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]),
            false,
        );
        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::DegenerateGeometry { index: 1 }))
        ));
        assert!(!output.exists());
    }
}
