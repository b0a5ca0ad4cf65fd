pub mod formats;

use flexi_logger::Logger;

use crate::Error;

/// Log to stderr so command output on stdout stays machine readable.
pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .format(formats::cli_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
