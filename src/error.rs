use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Config(&'static str),
    ReadConfig(std::io::Error),
    ParseConfig(serde_json::Error),
    ReadState(std::io::Error),
    WriteState(std::io::Error),
    ReadDir(PathBuf, std::io::Error),
    Spawn(String, std::io::Error),
    Exited(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Config(msg) => f.write_str(msg),
            Error::ReadConfig(err) => write!(f, "Failed to read config file: {err}"),
            Error::ParseConfig(err) => write!(f, "Failed to parse config file: {err}"),
            Error::ReadState(err) => write!(f, "Failed to read current image: {err}"),
            Error::WriteState(err) => write!(f, "Failed to write current image: {err}"),
            Error::ReadDir(dir, err) => {
                write!(f, "Could not open directory '{}': {err}", dir.display())
            }
            Error::Spawn(program, err) => write!(f, "Failed to start {program}: {err}"),
            Error::Exited(program) => write!(f, "{program} failed to run or exited immediately"),
            Error::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadConfig(err)
            | Error::ReadState(err)
            | Error::WriteState(err)
            | Error::ReadDir(_, err)
            | Error::Spawn(_, err)
            | Error::Io(err) => Some(err),
            Error::ParseConfig(err) => Some(err),
            Error::Config(_) | Error::Exited(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseConfig(err)
    }
}
