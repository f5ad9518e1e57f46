use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("tusbprom {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: tusbprom");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("TUSBPROM_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "header: signature=${:08x} size={} max_payload={}",
        tusbprom_header::SIGNATURE,
        tusbprom_header::HEADER_SIZE,
        tusbprom_header::MAX_PAYLOAD
    );

    Ok(SUCCESS)
}
