use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod info;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode I2C EEPROM data from raw firmware.
    Encode(EncodeArgs),
    /// Decode I2C EEPROM data, yielding raw firmware.
    Decode(DecodeArgs),
    /// Print the decoded header report without extracting the payload.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args),
        Command::Decode(args) => decode::run(args),
        Command::Info(args) => info::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Raw firmware file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
    /// Output file. Writes stdout when omitted.
    #[arg(long, short = 'o', value_name = "FILENAME")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// EEPROM image file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
    /// Output file. Writes stdout when omitted.
    #[arg(long, short = 'o', value_name = "FILENAME")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// EEPROM image file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
