use std::process::Command;

use super::GitCmd;

#[derive(Default)]
pub struct Fetch {
    all: bool,
}

pub fn fetch() -> Fetch {
    Fetch::default()
}

impl Fetch {
    /// Fetch every configured remote instead of only the default one
    pub fn all(self) -> Fetch {
        Fetch { all: true }
    }
}

impl GitCmd for Fetch {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("fetch");

        if self.all {
            cmd.arg("--all");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::args;

    #[test]
    fn fetch_default_remote() {
        assert_eq!(args(fetch()), ["fetch"]);
    }

    #[test]
    fn fetch_all() {
        assert_eq!(args(fetch().all()), ["fetch", "--all"]);
    }
}
