use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{BenchError, Result};

pub mod gold;
pub mod predictions;

pub use gold::{GoldStandard, find_gold_standard_path, load_gold_standard};
pub use predictions::{PredictionTable, load_predictions};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|err| BenchError::read(path, err))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_open_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.txt");
        std::fs::write(&path, "TP53\nKRAS\n").unwrap();

        let mut reader = open_maybe_gz(&path).unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "TP53\nKRAS\n");
    }

    #[test]
    fn test_open_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.txt.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(b"TP53\nKRAS\n").unwrap();
        encoder.finish().unwrap();

        let mut reader = open_maybe_gz(&path).unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "TP53\nKRAS\n");
    }

    #[test]
    fn test_open_missing_file_names_path() {
        let Err(err) = open_maybe_gz(Path::new("no-such-file.txt")) else {
            panic!("expected a read error");
        };
        assert!(err.to_string().contains("no-such-file.txt"));
    }
}
