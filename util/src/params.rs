//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::{fs::read_to_string, path::Path};
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The software root environment variable (BIPED_SW_ROOT) is not set")]
    SwRootNotSet,

    #[error("Cannot load the parmeter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// The file path is relative to the "$BIPED_SW_ROOT/params" directory
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    // Get the params dir
    let mut path = crate::host::get_sw_root()
        .map_err(|_| LoadError::SwRootNotSet)?;
    path.push("params");
    path.push(param_file_path);

    load_from(path)
}

/// Load a parameter file from an explicit path.
pub fn load_from<P, F>(path: F) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    F: AsRef<Path>
{
    // Load the file into a string
    let params_str = match read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e))
    };

    // Parse the string into the parameter struct
    match toml::from_str(params_str.as_str()) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Deserialize)]
    struct TestParams {
        port: String,
        #[serde(default)]
        retries: u32,
    }

    #[test]
    fn test_load_from() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"/dev/ttyUSB1\"").unwrap();

        let params: TestParams = load_from(file.path()).unwrap();
        assert_eq!(params.port, "/dev/ttyUSB1");
        assert_eq!(params.retries, 0);
    }

    #[test]
    fn test_load_errors() {
        let missing = load_from::<TestParams, _>("/definitely/not/a/params/file.toml");
        assert!(matches!(missing, Err(LoadError::FileLoadError(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 12").unwrap();
        let invalid = load_from::<TestParams, _>(file.path());
        assert!(matches!(invalid, Err(LoadError::DeserialiseError(_))));
    }
}
