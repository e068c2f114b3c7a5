use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the simulated analysis pass pretends to think.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Where should drawly store data, including logs?
    pub writeable_path: String,

    /// Should we log at all?
    pub logs: bool,
    /// Should logs be printed to stdout?
    pub stdout_logs: bool,
    /// Should logs be colored?
    pub colored_logs: bool,

    /// Byte budget the platform store grants the tutorial blob. Writes over
    /// this are refused. `None` is unbounded.
    pub storage_capacity: Option<u64>,
    /// Pause inserted by the simulated analysis before it hands back a
    /// tutorial. Tests set this to zero.
    pub analysis_delay: Duration,
}

impl Config {
    /// Configures drawly for CLI use with no stdout logs. `writeable_path_subfolder` is generally
    /// a hardcoded client name like `"cli"`.
    pub fn cli_config(writeable_path_subfolder: &str) -> Config {
        Config {
            writeable_path: Self::writeable_path(writeable_path_subfolder),
            logs: true,
            stdout_logs: false,
            colored_logs: true,
            storage_capacity: None,
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
        }
    }

    /// Configures drawly for UI use with stdout logs. `writeable_path_subfolder` is generally
    /// a hardcoded client name like `"android"`.
    pub fn ui_config(writeable_path_subfolder: &str) -> Config {
        Config {
            writeable_path: Self::writeable_path(writeable_path_subfolder),
            logs: true,
            stdout_logs: true,
            colored_logs: true,
            storage_capacity: None,
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
        }
    }

    /// Produces a full writable path for drawly to use based on environment variables and
    /// platform. Useful for initializing the Config struct.
    pub fn writeable_path(writeable_path_subfolder: &str) -> String {
        let specified_path = env::var("DRAWLY_PATH");

        let default_path =
            env::var("HOME") // unix
                .or(env::var("HOMEPATH")) // windows
                .map(|home| format!("{home}/.drawly/{writeable_path_subfolder}"));

        let Ok(writeable_path) = specified_path.or(default_path) else {
            panic!("no location for drawly to initialize");
        };

        writeable_path
    }
}
