use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for UDdup
///
/// Every key is optional; command-line flags take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the URL list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// File with one URL per line; stdin when unset
    #[serde(rename = "urls-file")]
    pub urls_file: Option<PathBuf>,
}

/// Where and how results are presented
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File to save the results to
    pub path: Option<PathBuf>,

    /// Print only the result URLs
    #[serde(default)]
    pub silent: bool,
}

/// Command-line values that override the configuration file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub urls_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub silent: bool,
}

impl Config {
    /// Applies command-line values on top of this configuration
    ///
    /// Paths given on the command line replace the file's, and `silent` is
    /// enabled if either side asks for it.
    pub fn merge_cli(mut self, cli: CliOverrides) -> Self {
        if cli.urls_file.is_some() {
            self.input.urls_file = cli.urls_file;
        }
        if cli.output.is_some() {
            self.output.path = cli.output;
        }
        self.output.silent |= cli.silent;
        self
    }
}
