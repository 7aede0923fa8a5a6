//! 读取待扫描的源文本

use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::CliError;

/// 读取整个文件，未给出路径时读取 stdin
pub fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    let bytes = match path {
        Some(path) => std::fs::read(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    debug!(target: "ilex::cli", bytes = bytes.len(), "Read source");
    Ok(decode(bytes))
}

/// 非法 UTF-8 序列替换为 U+FFFD
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                target: "ilex::cli",
                valid_up_to = e.utf8_error().valid_up_to(),
                "Input is not valid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
