use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// trapscan: empirical syscall attack-surface scanner
///
/// trapscan invokes every syscall number of the x86_64 table with zeroed
/// arguments, from inside whatever sandbox it finds itself in, and
/// reports which calls the kernel let through and which the sandbox
/// denied. Run it inside a container to measure the container's real
/// syscall surface.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    ///
    /// If not provided, the default locations are checked. They are
    /// `/etc/trapscan/config.toml` and `/etc/trapscan/config.d/*.toml`,
    /// where the latter being a glob pattern. If they don't exist, the
    /// default configuration is used.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Per-probe timeout in milliseconds.
    ///
    /// Overrides the config file. A denied syscall answers immediately;
    /// a probe still silent after this long is treated as allowed and
    /// abandoned.
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Output::Table)]
    pub output: Output,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    Table,
    Json,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["trapscan"]).unwrap();
        assert_eq!(cli.conffile, None);
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.output, Output::Table);
    }

    #[test]
    fn timeout_and_output_parse() {
        let cli = Cli::try_parse_from(["trapscan", "--timeout", "25", "--output", "json"]).unwrap();
        assert_eq!(cli.timeout, Some(25));
        assert_eq!(cli.output, Output::Json);
    }

    #[test]
    fn missing_conffile_is_rejected() {
        let result = Cli::try_parse_from(["trapscan", "--conffile", "/does/not/exist.toml"]);
        assert!(result.is_err());
    }
}
