use std::{ffi::OsStr, fmt, str::FromStr};

use crate::error::ModelError;

/// Which set of images a run checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full check of the sdbg and toolchain images (no arguments).
    Everything,
    /// Toolchain image only (`toolchain` argument).
    Toolchain,
}

impl Mode {
    /// Selects the mode from the command-line arguments, program name excluded.
    ///
    /// Accepts no arguments or exactly `toolchain`; anything else is a usage error,
    /// including arguments that are not valid UTF-8.
    pub fn from_args<I, S>(args: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(Self::Everything),
            [one] => match one.as_ref().to_str() {
                Some(s) => s.parse(),
                None => Err(ModelError::UnknownMode(one.as_ref().to_string_lossy().into_owned())),
            },
            more => Err(ModelError::UnknownMode(
                more.iter()
                    .map(|s| s.as_ref().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
        }
    }
}

impl FromStr for Mode {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toolchain" => Ok(Self::Toolchain),
            _ => Err(ModelError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Everything => "everything",
            Mode::Toolchain => "toolchain",
        };
        f.write_str(s)
    }
}
