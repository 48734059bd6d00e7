mod classifier;

pub use classifier::{LineCategory, LineClassifier, LineCounts, ScanState, classify};

/// Split file content on `\n`.
///
/// Content ending in a newline yields a trailing empty line, which is
/// counted as blank. A `\r` left by CRLF endings is removed by trimming
/// before matching.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source.split('\n')
}

#[cfg(test)]
mod test_fixtures;
