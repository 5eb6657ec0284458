use crate::cli::{ConvertArgs, FileFormat};
use crate::error::{CliError, Result};
use protstr::core::io::traits::FeatureFormatOptions;
use protstr::engine::config::{ConversionConfig, ConversionConfigBuilder, DegenerateBondPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path that stands for stdin (as input) in place of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialConversionConfig {
    #[serde(rename = "degenerate-bonds")]
    degenerate_bonds: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<FileFormat>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    conversion: Option<PartialConversionConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for one `convert` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub input_format: FileFormat,
    pub output_path: Option<PathBuf>,
    pub output_format: FileFormat,
    pub format_options: FeatureFormatOptions,
    pub conversion: ConversionConfig,
}

fn format_from_extension(path: &Path) -> Option<FileFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("csv"))
        .map(|_| FileFormat::Csv)
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &ConvertArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let conversion_config = self.conversion.take().unwrap_or_default();
        let output_config = self.output.take().unwrap_or_default();

        let degenerate_bonds = match (args.degenerate_bonds, conversion_config.degenerate_bonds) {
            (Some(policy), _) => policy,
            (None, Some(name)) => name
                .parse::<DegenerateBondPolicy>()
                .map_err(|e| CliError::Config(e.to_string()))?,
            (None, None) => DegenerateBondPolicy::default(),
        };

        let input_format = args
            .input_format
            .or_else(|| format_from_extension(&args.input))
            .unwrap_or(FileFormat::Table);

        let output_format = args
            .format
            .or(output_config.format)
            .or_else(|| args.output.as_deref().and_then(format_from_extension))
            .unwrap_or(FileFormat::Table);

        let config = AppConfig {
            input_path: args.input.clone(),
            input_format,
            output_path: args.output.clone(),
            output_format,
            format_options: FeatureFormatOptions {
                precision: args.precision.or(output_config.precision),
            },
            conversion: ConversionConfigBuilder::new()
                .degenerate_bonds(degenerate_bonds)
                .build(),
        };
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "conversion.degenerate-bonds" => {
                    self.conversion
                        .get_or_insert_with(Default::default)
                        .degenerate_bonds = Some(value_str.to_string());
                }
                "output.format" => {
                    let format = FileFormat::from_str_ignore_case(value_str).ok_or_else(|| {
                        CliError::Config(format!("Invalid format for {}: {}", key, value_str))
                    })?;
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

impl FileFormat {
    fn from_str_ignore_case(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(FileFormat::Table),
            "csv" => Some(FileFormat::Csv),
            _ => None,
        }
    }
}
