use crate::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the raw bytes of an input file, gunzipping it first when the file
/// has a `.gz` extension.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let mut bytes = Vec::new();
    let is_gzip = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"));

    if is_gzip {
        debug!("Decompressing {:?}", path);
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        file.read_to_end(&mut bytes)?;
    }

    Ok(bytes)
}
