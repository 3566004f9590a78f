//! Parser for archive-deletion log files.
//!
//! Glacier upload logs contain lines like
//! `2019-03-01 12:00:00 Archive ID: kKB7ymWJVpPSwhGP6ycSOAek...`; any line
//! carrying the `Archive ID:` tag yields one archive identifier. Everything
//! else is ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Tag preceding an archive identifier in a log line.
const ARCHIVE_ID_TAG: &str = "Archive ID:";

/// Byte offset from the start of the tag to the start of the identifier
/// (tag plus one separating space).
const ID_OFFSET: usize = ARCHIVE_ID_TAG.len() + 1;

/// Extract the archive ID from a single log line.
///
/// Returns `None` when the line carries no `Archive ID:` tag, when the
/// identifier offset falls past the end of the line, or when the remainder
/// trims down to nothing.
pub fn archive_id_from_line(line: &str) -> Option<&str> {
    let tag_start = line.find(ARCHIVE_ID_TAG)?;
    let id = line.get(tag_start + ID_OFFSET..)?.trim();
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// Collect every archive ID found in a reader, one per matching line.
pub fn archive_ids_from_reader<R: BufRead>(reader: R) -> Vec<String> {
    reader
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| archive_id_from_line(&line).map(str::to_owned))
        .collect()
}

/// Collect every archive ID found in a log file.
pub fn archive_ids_from_file(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    Ok(archive_ids_from_reader(BufReader::new(file)))
}
