use tusbprom_header::encode;

use crate::cmd::EncodeArgs;
use crate::exit::{header_error, CliResult, SUCCESS};
use crate::io::{read_input, write_output};

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let payload = read_input(args.input.as_deref())?;
    let image = encode(&payload).map_err(|err| header_error("encode failed", err))?;
    tracing::debug!(payload = payload.len(), image = image.len(), "image framed");

    write_output(args.output.as_deref(), &image, "Formatted image")?;
    Ok(SUCCESS)
}
