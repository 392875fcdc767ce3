use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use flate2::read::MultiGzDecoder;

pub enum DecompressedStream {
    PlainText(File),
    Gzip(MultiGzDecoder<File>),
}

impl DecompressedStream {
    pub fn box_bufread(self) -> Box<dyn BufRead + Send + Sync + 'static> {
        match self {
            DecompressedStream::PlainText(file) => Box::new(BufReader::new(file)),
            DecompressedStream::Gzip(decoder) => Box::new(BufReader::new(decoder)),
        }
    }
}

/// Open a text file for buffered reading. Gzip streams are recognised by their signature and
/// decompressed on the fly, everything else is read as plain text.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn BufRead + Send + Sync + 'static>> {
    let path = path.as_ref();
    ensure!(path.is_file(), "File {} does not exist", path.display());

    let kind = infer::get_from_path(path)
        .wrap_err_with(|| format!("Could not read file: {}", path.display()))?;
    let file =
        File::open(path).wrap_err_with(|| format!("Could not open file: {}", path.display()))?;

    let stream = match kind.map(|x| x.mime_type()) {
        Some("application/gzip") => {
            log::debug!("Decompressing gzip stream from {}", path.display());
            DecompressedStream::Gzip(MultiGzDecoder::new(file))
        }
        // Always assume plain text if there is no clear match
        _ => DecompressedStream::PlainText(file),
    };
    Ok(stream.box_bufread())
}
