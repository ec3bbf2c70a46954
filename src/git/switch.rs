use super::{Branch, GitCmd};

use std::process::Command;

pub struct Switch {
    to: String,
    create: bool,
    start_point: Option<String>,
}

pub fn switch<T: Into<String>>(Branch(to): Branch<T>) -> Switch {
    Switch {
        to: to.into(),
        create: false,
        start_point: None,
    }
}

impl Switch {
    /// Create the branch before switching to it, like `git switch -c`
    pub fn create(self) -> Switch {
        Switch {
            create: true,
            ..self
        }
    }

    pub fn start_point<T: Into<String>>(self, Branch(start): Branch<T>) -> Switch {
        Switch {
            start_point: Some(start.into()),
            ..self
        }
    }
}

impl GitCmd for Switch {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("switch");

        if self.create {
            cmd.arg("-c");
        }

        cmd.arg(self.to);
        self.start_point.map(|s| cmd.arg(s));
    }
}
