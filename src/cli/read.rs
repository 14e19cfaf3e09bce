use std::{ffi::OsString, path::PathBuf, str::FromStr};

use meerkat_sat::{community::Partition, structures::formula::Formula, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a CNF formula is required."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open file."),
        }
    }
}

/// Reads the DIMACS file at `path` to a formula.
pub(super) fn read_dimacs(path: &str) -> Result<Formula, ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let formula = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            Formula::from_dimacs(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if *extension == "xz" => {
            return Err(ReadError::UnknownExtension(extension.to_os_string()))
        }

        _ => Formula::from_dimacs(std::io::BufReader::new(&file)),
    };

    formula.map_err(ReadError::ParseError)
}

/// Reads the partition file at `path` to a partition over `formula`.
pub(super) fn read_partition(path: &str, formula: &Formula) -> Result<Partition, ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    println!("c Reading partition file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    Partition::from_reader(std::io::BufReader::new(&file), formula).map_err(ReadError::ParseError)
}
