// ============================================================
// Layer 5 — Buffered File Opening
// ============================================================
// Opens an input file for buffered reading. Files ending in
// `.gz` are decompressed on the fly (pretrained vectors are
// usually distributed gzipped, e.g. the GoogleNews word2vec
// archive).

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::error::LoadError;

/// Whether `path` is read through a gzip decoder
pub fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

pub fn open_buffered(path: &Path) -> Result<Box<dyn BufRead>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::file_access(path, e))?;

    if is_gzip(path) {
        tracing::debug!("Reading '{}' through a gzip decoder", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
