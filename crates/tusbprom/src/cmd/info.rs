use tusbprom_header::decode_bytes;

use crate::cmd::InfoArgs;
use crate::exit::{header_error, CliResult, SUCCESS};
use crate::io::read_input;
use crate::output::{print_report, OutputFormat};

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let image = read_input(args.input.as_deref())?;
    let (_, report) = decode_bytes(image).map_err(|err| header_error("decode failed", err))?;

    for check in report.failures() {
        tracing::warn!(check = check.name(), "header check failed");
    }
    print_report(&report, format);
    Ok(SUCCESS)
}
