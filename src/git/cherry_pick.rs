use std::process::Command;

use super::{Commit, GitCmd};

#[derive(Default)]
pub struct CherryPick {
    commit: String,
    no_commit: bool,
}

pub fn cherry_pick<T: Into<String>>(Commit(commit): Commit<T>) -> CherryPick {
    CherryPick {
        commit: commit.into(),
        ..CherryPick::default()
    }
}

impl CherryPick {
    /// Only apply and stage the changes, leaving the commit to the caller
    pub fn no_commit(self) -> CherryPick {
        CherryPick {
            no_commit: true,
            ..self
        }
    }
}

impl GitCmd for CherryPick {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("cherry-pick");

        if self.no_commit {
            cmd.arg("-n");
        }

        cmd.arg(self.commit);
    }
}
