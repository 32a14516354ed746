use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strata: a procedural terrain sphere.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about)]
pub struct Args {
    /// Preset to render: a built-in name, a preset file name, or a path.
    #[arg(long, global = true)]
    pub preset: Option<String>,

    /// Renderer selection file (TOML). Watched for changes while running.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a window and render the sphere (default).
    Run,
    /// Load, resolve and validate the config, then print it as JSON.
    Check,
    /// Report whether a GPU adapter is available.
    Probe,
    /// Evaluate the terrain at a point on the sphere.
    Sample {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
        /// Animation time in seconds.
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::try_parse_from(["strata"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.preset.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["strata", "check", "--preset", "landing", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.command, Some(Command::Check));
        assert_eq!(args.preset.as_deref(), Some("landing"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_path_flag() {
        let args = Args::try_parse_from(["strata", "--config", "/tmp/r.toml", "run"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/r.toml")));
        assert_eq!(args.command, Some(Command::Run));
    }

    #[test]
    fn sample_accepts_negative_coordinates() {
        let args =
            Args::try_parse_from(["strata", "sample", "0.5", "-0.25", "-1", "--time", "3"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sample {
                x: 0.5,
                y: -0.25,
                z: -1.0,
                time: 3.0
            })
        );
    }

    #[test]
    fn sample_requires_three_coordinates() {
        assert!(Args::try_parse_from(["strata", "sample", "1", "2"]).is_err());
    }
}
