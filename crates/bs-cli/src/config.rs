//! Configuration loading and management.

use std::path::{Path, PathBuf};

use bs_core::{FieldSeparator, ReportConfig};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in configuration values that figment cannot catch on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The delimiter is neither a single character nor a known keyword.
    #[error("invalid delimiter {0:?}: use a single character, \"tab\" or \"whitespace\"")]
    InvalidDelimiter(String),

    /// A chart color is not written as `#rrggbb`.
    #[error("invalid color {0:?}: use the #rrggbb form")]
    InvalidColor(String),
}

/// Bar chart appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    /// Output file stem, written as `<output_dir>/<file_name>.svg`.
    pub file_name: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            title: "Boot time by unit".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Unit".to_string(),
            color: "#4c72b0".to_string(),
            file_name: "blame_bar".to_string(),
        }
    }
}

/// Pie chart appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    pub title: String,
    /// Slice colors, reused cyclically.
    pub colors: Vec<String>,
    pub file_name: String,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            title: "Share of boot time".to_string(),
            colors: [
                "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3",
                "#8c8c8c", "#ccb974", "#64b5cd",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            file_name: "blame_pie".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blame output to read when no input is given on the command line.
    pub input_file: Option<PathBuf>,

    /// Directory that receives the markdown file and charts.
    pub output_dir: PathBuf,

    /// Markdown file stem, written as `<output_dir>/<markdown_table_name>.md`.
    pub markdown_table_name: String,

    /// Field delimiter: a single character, `tab`, or `whitespace`.
    pub delimiter: String,

    pub headers: [String; 2],

    /// Suffix stripped once from chart labels.
    pub label_suffix: Option<String>,

    /// Decimal places for table values.
    pub precision: Option<usize>,

    pub bar_chart: BarChartConfig,

    pub pie_chart: PieChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        let report = ReportConfig::default();
        Self {
            input_file: None,
            output_dir: PathBuf::from("blame_stats"),
            markdown_table_name: "blame".to_string(),
            delimiter: "tab".to_string(),
            headers: report.headers,
            label_suffix: report.label_suffix,
            precision: report.precision,
            bar_chart: BarChartConfig::default(),
            pie_chart: PieChartConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as TOML.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Yaml::file(config_dir.join("config.yaml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = if is_yaml(path) {
                figment.merge(Yaml::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // Load from environment variables (BLAME_STATS_*, nested keys split on "__")
        figment = figment.merge(Env::prefixed("BLAME_STATS_").split("__"));

        figment.extract()
    }

    /// Resolves the configured delimiter into a field separator.
    pub fn separator(&self) -> Result<FieldSeparator, ConfigError> {
        parse_delimiter(&self.delimiter)
    }

    /// Builds the explicit configuration the report core consumes.
    pub fn report_config(&self) -> Result<ReportConfig, ConfigError> {
        Ok(ReportConfig {
            headers: self.headers.clone(),
            separator: self.separator()?,
            label_suffix: self.label_suffix.clone(),
            precision: self.precision,
        })
    }

    /// Path of the markdown file tables are appended to.
    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.md", self.markdown_table_name))
    }

    pub fn bar_chart_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.svg", self.bar_chart.file_name))
    }

    pub fn pie_chart_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.svg", self.pie_chart.file_name))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

fn parse_delimiter(value: &str) -> Result<FieldSeparator, ConfigError> {
    match value {
        "tab" | "\\t" => return Ok(FieldSeparator::TAB),
        "whitespace" => return Ok(FieldSeparator::Whitespace),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(FieldSeparator::Char(c)),
        _ => Err(ConfigError::InvalidDelimiter(value.to_string())),
    }
}

/// Returns the platform-specific config directory for blame-stats.
///
/// On Linux: `~/.config/blame-stats`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("blame-stats"))
}
