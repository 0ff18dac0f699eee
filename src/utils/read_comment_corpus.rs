use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::models::{Comment, Error};

/// Reads a comment corpus in JSON Lines form, one `{"id", "author", "body"}`
/// object per line. Blank lines are ignored; malformed lines are skipped with
/// a warning rather than failing the whole corpus.
pub fn read_comment_corpus_from_reader<R: BufRead>(reader: R) -> Result<Vec<Comment>, Error> {
    let mut comments = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Comment>(&line) {
            Ok(comment) => comments.push(comment),
            Err(e) => warn!("Skipping malformed corpus line {}: {}", line_number + 1, e),
        }
    }

    Ok(comments)
}

/// Reads a JSON Lines comment corpus from disk.
pub fn read_comment_corpus_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Comment>, Error> {
    let file = File::open(path)?;
    read_comment_corpus_from_reader(BufReader::new(file))
}
