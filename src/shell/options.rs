use clap::Parser;

/// An interactive calculator over named sets of integers and text tokens.
#[derive(Clone, Debug, Default, Parser)]
#[command(version)]
pub struct ShellOptions {
    /// Log specification for flexi_logger, e.g. `debug` or `lib_setalg=trace`.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print bare results, without the `ok`/`err` framing.
    #[arg(short, long, default_value_t = false)]
    pub bare: bool,
}

impl ShellOptions {
    /// The log specification to start the logger with when `RUST_LOG` is unset.
    pub fn log_spec(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::ShellOptions;

    #[test]
    fn defaults() {
        let options = ShellOptions::parse_from(["setalg"]);
        assert_eq!(options.log_spec(), "info");
        assert!(!options.bare);
    }

    #[test]
    fn flags() {
        let options = ShellOptions::parse_from(["setalg", "--log-level", "debug", "--bare"]);
        assert_eq!(options.log_spec(), "debug");
        assert!(options.bare);
    }
}
