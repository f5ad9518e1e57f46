use tusbprom_header::decode_bytes;

use crate::cmd::DecodeArgs;
use crate::exit::{header_error, CliResult, SUCCESS};
use crate::io::{read_input, write_output};
use crate::output::log_report;

/// Extract the payload. Header mismatches are logged but never change the
/// exit code; only unreadable input does.
pub fn run(args: DecodeArgs) -> CliResult<i32> {
    let image = read_input(args.input.as_deref())?;
    let (payload, report) =
        decode_bytes(image).map_err(|err| header_error("decode failed", err))?;

    log_report(&report);
    write_output(args.output.as_deref(), &payload, "Raw image")?;
    Ok(SUCCESS)
}
