pub mod completion;
pub mod domains;
pub mod endpoints;

use anyhow::Result;
use harx_core::har::{Har, HarReader};
use std::io;
use std::path::Path;

/// Load a HAR document; `-` reads from stdin
pub fn load_har(file: &Path) -> Result<Har> {
    let har = if file == Path::new("-") {
        HarReader::from_reader(io::stdin().lock())?
    } else {
        HarReader::from_file(file)?
    };
    Ok(har)
}
