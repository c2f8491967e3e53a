//! Content digest computation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use blake3::Hasher;

use dirsnap_core::ScanError;

/// Compute the content digest of a file as lowercase hex.
///
/// The digest covers the file's bytes only; name, timestamps, and
/// permissions never enter it, so identical content under different
/// paths digests identically. The file is streamed in 64 KiB chunks.
pub fn hash_file(path: &Path) -> Result<String, ScanError> {
    let mut file = File::open(path).map_err(|e| ScanError::io(path, e))?;

    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];
    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| ScanError::io(path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}
