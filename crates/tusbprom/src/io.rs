use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use bytes::Bytes;
use tracing::info;

use crate::exit::{io_error, CliResult};

/// Read the whole input. `None` or `-` means standard input.
pub fn read_input(path: Option<&Path>) -> CliResult<Bytes> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let data = fs::read(path).map_err(|err| {
                io_error(&format!("failed reading {}", path.display()), err)
            })?;
            info!("{} bytes read from \"{}\".", data.len(), path.display());
            Ok(Bytes::from(data))
        }
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut data)
                .map_err(|err| io_error("failed reading stdin", err))?;
            info!("{} bytes read from stdin.", data.len());
            Ok(Bytes::from(data))
        }
    }
}

/// Write `data` to `path`, or to standard output when `path` is `None`.
pub fn write_output(path: Option<&Path>, data: &[u8], what: &str) -> CliResult<()> {
    match path {
        Some(path) => {
            fs::write(path, data).map_err(|err| {
                io_error(&format!("failed writing {}", path.display()), err)
            })?;
            info!("{what} written to file \"{}\".", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(data)
                .and_then(|()| out.flush())
                .map_err(|err| io_error("failed writing stdout", err))?;
            info!("{what} written to stdout.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "tusbprom-io-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ))
    }

    #[test]
    fn file_roundtrip() {
        let path = temp_path("roundtrip");
        write_output(Some(&path), b"\x00\x01\x02", "Raw image").expect("write should succeed");

        let data = read_input(Some(&path)).expect("read should succeed");
        assert_eq!(data.as_ref(), b"\x00\x01\x02");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_failure() {
        let path = temp_path("missing");
        let err = read_input(Some(&path)).expect_err("missing file should fail");
        assert_eq!(err.code, crate::exit::FAILURE);
        assert!(err.message.contains("failed reading"));
    }
}
