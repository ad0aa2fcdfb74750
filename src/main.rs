use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_setalg::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment; a missing .env file is fine.
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => return Err(e.into()),
        _ => {}
    }
    let options = ShellOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_spec())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Answer set commands until quit or end of input.
    if let Err(e) = SetShell::new(options).run() {
        log::error!("fatal error: {}", e);
        return Err(e);
    }
    Ok(())
}
