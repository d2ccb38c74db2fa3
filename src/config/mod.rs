use crate::buffer::MIB;
use crate::generators::{self, Test};
use crate::sink::SinkKind;
use crate::terminal::TerminalSize;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration, read from `~/.termbench/config.yaml` and overridden by flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Megabytes streamed per test
    #[serde(default = "default_size_mb")]
    pub size_mb: usize,

    /// Fixed terminal size; the current terminal's size is used when unset
    #[serde(default)]
    pub terminal_size: Option<TerminalSize>,

    #[serde(default)]
    pub sink: SinkKind,

    #[serde(default)]
    pub tests: TestSelection,

    /// Files whose contents are replayed verbatim as extra tests
    #[serde(default)]
    pub crafted: Vec<PathBuf>,

    /// Write the JSON report here instead of printing the text summary
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Show the running test's name in the window title
    #[serde(default = "default_true")]
    pub window_title: bool,
}

/// Which built-in tests run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSelection {
    #[serde(default = "default_true")]
    pub many_lines: bool,
    #[serde(default = "default_true")]
    pub long_lines: bool,
    #[serde(default = "default_true")]
    pub sgr_fg_lines: bool,
    #[serde(default = "default_true")]
    pub sgr_fg_bg_lines: bool,
    #[serde(default = "default_true")]
    pub binary: bool,
    /// Line tests for every width up to twice the screen width
    #[serde(default)]
    pub column_by_column: bool,
}

// Default value functions
fn default_size_mb() -> usize {
    32
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size_mb: default_size_mb(),
            terminal_size: None,
            sink: SinkKind::default(),
            tests: TestSelection::default(),
            crafted: Vec::new(),
            output: None,
            window_title: true,
        }
    }
}

impl Default for TestSelection {
    fn default() -> Self {
        Self {
            many_lines: true,
            long_lines: true,
            sgr_fg_lines: true,
            sgr_fg_bg_lines: true,
            binary: true,
            column_by_column: false,
        }
    }
}

impl TestSelection {
    /// Switch to column-by-column mode, which replaces the standard tests
    pub fn only_column_by_column(&mut self) {
        *self = Self {
            many_lines: false,
            long_lines: false,
            sgr_fg_lines: false,
            sgr_fg_bg_lines: false,
            binary: false,
            column_by_column: true,
        };
    }

    /// Instantiate the selected standard tests in run order
    #[must_use]
    pub fn standard(&self) -> Vec<Box<dyn Test>> {
        let mut tests = Vec::new();
        if self.many_lines {
            tests.push(generators::many_lines());
        }
        if self.long_lines {
            tests.push(generators::long_lines());
        }
        if self.sgr_fg_lines {
            tests.push(generators::sgr_fg_lines());
        }
        if self.sgr_fg_bg_lines {
            tests.push(generators::sgr_fg_bg_lines());
        }
        if self.binary {
            tests.push(generators::binary());
        }
        tests
    }

    /// The per-width line tests, empty unless column-by-column mode is on
    #[must_use]
    pub fn columns(&self, size: TerminalSize) -> Vec<Box<dyn Test>> {
        if self.column_by_column {
            generators::column_by_column(usize::from(size.columns) * 2)
        } else {
            Vec::new()
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config =
            serde_yaml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_yaml::to_string(self).context("Failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path.as_ref(), contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get default configuration path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;

        Ok(home.join(".termbench").join("config.yaml"))
    }

    /// Reject settings the benchmark cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.size_mb == 0 {
            bail!("Test size must be at least 1 MB");
        }
        if u64::try_from(self.size_mb)
            .ok()
            .and_then(|mb| mb.checked_mul(MIB as u64))
            .is_none()
        {
            bail!("Test size of {} MB is too large", self.size_mb);
        }
        if let Some(size) = self.terminal_size {
            if size.cells().is_none() {
                bail!("Terminal size {} has no cells", size);
            }
        }
        Ok(())
    }

    /// Every test of the run in order: standard, crafted, column-by-column
    pub fn build_tests(&self, size: TerminalSize) -> Result<Vec<Box<dyn Test>>> {
        let mut tests = self.tests.standard();
        tests.extend(self.crafted_tests()?);
        tests.extend(self.tests.columns(size));
        Ok(tests)
    }

    /// Load every crafted test file
    ///
    /// Tests are named after the file name. Empty files are rejected since
    /// they cannot fill the buffer.
    pub fn crafted_tests(&self) -> Result<Vec<Box<dyn Test>>> {
        self.crafted
            .iter()
            .map(|path| -> Result<Box<dyn Test>> {
                let content = fs::read(path)
                    .with_context(|| format!("Failed to load file '{}'", path.display()))?;
                if content.is_empty() {
                    bail!("File '{}' is empty", path.display());
                }
                let name = path.file_name().map_or_else(
                    || path.display().to_string(),
                    |n| n.to_string_lossy().into_owned(),
                );
                Ok(generators::crafted(name, path.display().to_string(), content))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.size_mb, 32);
        assert_eq!(config.sink, SinkKind::Stdout);
        assert!(config.window_title);
        assert!(config.tests.many_lines);
        assert!(!config.tests.column_by_column);
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
size_mb: 8
sink: discard
terminal_size:
  columns: 120
  lines: 40
tests:
  binary: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.size_mb, 8);
        assert_eq!(config.sink, SinkKind::Null);
        assert_eq!(config.terminal_size, Some(TerminalSize::new(120, 40)));
        assert!(!config.tests.binary);
        assert!(config.tests.long_lines);
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.size_mb = 0;
        assert!(config.validate().is_err());

        if cfg!(target_pointer_width = "64") {
            config.size_mb = usize::MAX;
            assert!(config.validate().is_err());
        }

        config.size_mb = 1;
        config.terminal_size = Some(TerminalSize::new(0, 10));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_large_sizes() {
        let mut config = Config::default();
        config.size_mb = 1 << 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_selection_order() {
        let names: Vec<String> = TestSelection::default()
            .standard()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            names,
            ["many_lines", "long_lines", "sgr_fg_lines", "sgr_fg_bg_lines", "binary"]
        );
    }

    #[test]
    fn test_column_by_column_selection() {
        let mut selection = TestSelection::default();
        selection.only_column_by_column();
        assert!(selection.standard().is_empty());
        let tests = selection.columns(TerminalSize::new(10, 5));
        assert_eq!(tests.len(), 9 * 20);
        assert_eq!(tests[0].name(), "0 chars per line");
    }

    #[test]
    fn test_crafted_tests_run_before_column_tests() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        fs::write(&path, b"hello\n").unwrap();

        let mut config = Config::default();
        config.tests.binary = false;
        config.tests.column_by_column = true;
        config.crafted.push(path);

        let names: Vec<String> = config
            .build_tests(TerminalSize::new(1, 1))
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names.len(), 4 + 1 + 9 * 2);
        assert_eq!(names[3], "sgr_fg_bg_lines");
        assert_eq!(names[4], "payload.txt");
        assert_eq!(names[5], "0 chars per line");
    }
}
