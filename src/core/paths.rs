use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base kotlinbridge config directory (~/.config/kotlinbridge/, %APPDATA%\kotlinbridge on Windows)
pub fn kotlinbridge() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("kotlinbridge"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("kotlinbridge"))
    }
}

/// Global kotlinbridge.json config file path
pub fn kotlinbridge_json() -> Result<PathBuf> {
    Ok(kotlinbridge()?.join("kotlinbridge.json"))
}
