//! Command-line argument definitions for the deparc CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the deparc dependency diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input dependency file
    #[arg(help = "Path to the input file, or `-` for standard input (the default)")]
    pub input: Option<String>,

    /// Path to the output SVG file; standard output when absent
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The input path, or `None` when reading standard input.
    pub fn input_path(&self) -> Option<&str> {
        self.input.as_deref().filter(|path| *path != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["deparc"]);
        assert_eq!(args.input_path(), None);
        assert_eq!(args.output, None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::parse_from(["deparc", "-", "-o", "out.svg"]);
        assert_eq!(args.input_path(), None);
        assert_eq!(args.output.as_deref(), Some("out.svg"));
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "deparc",
            "sentence.dep",
            "--output",
            "sentence.svg",
            "-c",
            "style.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.input_path(), Some("sentence.dep"));
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
