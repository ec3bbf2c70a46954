use std::path::PathBuf;
use std::process::Command;

use super::GitCmd;

pub struct Clone {
    url: String,
    directory: Option<PathBuf>,
}

pub fn clone<T: Into<String>>(url: T) -> Clone {
    Clone {
        url: url.into(),
        directory: None,
    }
}

impl Clone {
    pub fn directory(self, dir: impl Into<PathBuf>) -> Clone {
        Clone {
            directory: Some(dir.into()),
            ..self
        }
    }
}

impl GitCmd for Clone {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("clone").arg(self.url);

        self.directory.map(|d| cmd.arg(d));
    }
}
