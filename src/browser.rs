//! Open a link with the operating system's default handler, usually a web browser.

use std::process::{Command, Stdio};

use log::{info, warn};

#[derive(Debug)]
pub struct Open {
    url: String,
}

pub fn open(url: impl Into<String>) -> Open {
    Open { url: url.into() }
}

impl Open {
    #[cfg(target_os = "macos")]
    fn launcher(self) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(self.url);
        cmd
    }

    #[cfg(windows)]
    fn launcher(self) -> Command {
        use std::os::windows::process::CommandExt;

        let mut cmd = Command::new("cmd");
        // `start` treats its first quoted argument as a window title. The link itself must
        // reach `cmd.exe` quoted, or every `&` in the query string ends the command.
        cmd.arg("/C")
            .arg("start")
            .raw_arg("\"\"")
            .raw_arg(format!("\"{}\"", self.url));
        cmd
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    fn launcher(self) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(self.url);
        cmd
    }

    fn command(self) -> Command {
        let mut cmd = self.launcher();

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        cmd
    }

    /// Launch the handler without waiting on it. Failing to launch is only logged.
    pub fn spawn(self) {
        let mut cmd = self.command();

        info!("opening {:?}", cmd.get_args());

        if let Err(e) = cmd.spawn() {
            warn!("couldn't launch browser: {e}");
        }
    }
}
