//! Thin layer over `std::process` shared by every external tool we drive.

use std::io;
use std::process;
use std::str;

use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    IO(#[from] io::Error),
    #[error("non-zero exit code: {} ({})", .0.status, stderr(.0))]
    Status(process::Output),
    #[error("invalid UTF8: {0}")]
    Utf8(#[from] str::Utf8Error),
}

fn stderr(out: &process::Output) -> String {
    String::from_utf8_lossy(&out.stderr).trim_end().to_owned()
}

#[derive(Debug)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl TryFrom<process::Output> for Output {
    type Error = str::Utf8Error;

    fn try_from(out: process::Output) -> Result<Self, Self::Error> {
        let stdout = str::from_utf8(out.stdout.as_slice())?;
        let stdout = stdout.trim_end().to_string();

        Ok(Output {
            stderr: stderr(&out),
            stdout,
        })
    }
}

/// Create a [`process::Command`] for `bin` with both stdout and stderr piped, so that nothing
/// leaks onto the console in between our own progress lines.
pub fn piped(bin: &str) -> process::Command {
    let mut cmd = process::Command::new(bin);
    cmd.stdout(process::Stdio::piped())
        .stderr(process::Stdio::piped());

    cmd
}

pub trait Command: Sized {
    fn spawn_with_output(mut cmd: process::Command) -> Result<Output, Error> {
        info!("running {:?} {:?}", cmd.get_program(), cmd.get_args());

        let output = cmd.spawn()?.wait_with_output()?;

        if output.status.success() {
            let output: Output = output.try_into()?;

            if !output.stderr.is_empty() {
                debug!("stderr: {}", output.stderr);
            }

            Ok(output)
        } else {
            Err(Error::Status(output))
        }
    }

    /// Run the command to completion. A non-zero exit code is reported as [`Error::Status`].
    fn spawn(self) -> Result<Output, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(process::Command);

    impl Command for Raw {
        fn spawn(self) -> Result<Output, Error> {
            Self::spawn_with_output(self.0)
        }
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_trimmed() {
        let mut cmd = piped("printf");
        cmd.arg("hello\n\n");

        let out = Raw(cmd).spawn().unwrap();

        assert_eq!(out.stdout, "hello");
        assert!(out.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let res = Raw(piped("false")).spawn();

        assert!(matches!(res, Err(Error::Status(_))));
    }

    #[cfg(unix)]
    #[test]
    fn stderr_is_kept() {
        let mut cmd = piped("sh");
        cmd.arg("-c").arg("echo warning >&2");

        let out = Raw(cmd).spawn().unwrap();

        assert_eq!(out.stdout, "");
        assert_eq!(out.stderr, "warning");
    }

    #[test]
    fn missing_binary_is_an_io_error() {
        let res = Raw(piped("chpicker-this-binary-does-not-exist")).spawn();

        assert!(matches!(res, Err(Error::IO(_))));
    }
}
