//! # Demo Runner
//!
//! The `main` body shared by both binaries. A run always ends with exit
//! status 0: a config that does not parse falls back to the built-in
//! defaults, and a failed write is logged on stderr.

use std::io::Write;

use crate::config::ScenarioConfig;
use crate::{logging, scenario};

/// Exit status of every run.
pub const EXIT_STATUS: u8 = 0;

/// Which scenario a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// `exclusive_demo`
    Exclusive,
    /// `shared_demo`
    Shared,
}

impl Demo {
    /// Binary name, used as the prefix of messages printed before logging is up.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive_demo",
            Self::Shared => "shared_demo",
        }
    }
}

/// Parses `config_text`, installs logging, and runs `demo` against `out`.
///
/// Returns the process exit status, which is always [`EXIT_STATUS`].
#[must_use]
pub fn run<W: Write + ?Sized>(demo: Demo, config_text: &str, out: &mut W) -> u8 {
    let (config, config_error) = match ScenarioConfig::from_toml_str(config_text) {
        Ok(config) => (config, None),
        Err(e) => (ScenarioConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("{}: logging disabled: {e}", demo.name());
    }
    if let Some(e) = config_error {
        tracing::error!(demo = demo.name(), "using built-in defaults: {e}");
    }

    let outcome = match demo {
        Demo::Exclusive => scenario::run_exclusive(&config.exclusive, out),
        Demo::Shared => scenario::run_shared(&config.shared, out),
    };
    if let Err(e) = outcome {
        tracing::error!(demo = demo.name(), "scenario aborted: {e}");
    }

    EXIT_STATUS
}
