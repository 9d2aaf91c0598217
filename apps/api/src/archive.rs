//! Single-page packaging — wraps rendered page source in an in-memory zip
//! archive with one `index.html` entry.

use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub fn package_single_page(html: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("index.html", SimpleFileOptions::default())
        .context("failed to start archive entry")?;
    writer
        .write_all(html.as_bytes())
        .context("failed to write archive entry")?;
    let cursor = writer.finish().context("failed to finalize archive")?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_archive_round_trips_page_source() {
        let html = "<!doctype html><html><body>portfolio</body></html>";
        let bytes = package_single_page(html).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);

        let mut entry = archive.by_name("index.html").unwrap();
        let mut recovered = String::new();
        entry.read_to_string(&mut recovered).unwrap();
        assert_eq!(recovered, html);
    }

    #[test]
    fn test_archive_bytes_carry_zip_magic() {
        let bytes = package_single_page("<p>x</p>").unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
