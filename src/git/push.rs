use std::process::Command;

use super::{Branch, GitCmd, Remote};

#[derive(Default)]
pub struct Push {
    remote: Option<String>,
    refspecs: Vec<String>,
}

pub fn push() -> Push {
    Push::default()
}

impl Push {
    pub fn remote<T: Into<String>>(self, Remote(remote): Remote<T>) -> Push {
        Push {
            remote: Some(remote.into()),
            ..self
        }
    }

    pub fn branch<T: Into<String>>(self, Branch(branch): Branch<T>) -> Push {
        let mut refspecs = self.refspecs;
        refspecs.push(branch.into());

        Push { refspecs, ..self }
    }
}

impl GitCmd for Push {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("push");

        self.remote.map(|remote| cmd.arg(remote));
        self.refspecs.iter().for_each(|r| {
            cmd.arg(r);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::args;

    #[test]
    fn push_branch_to_remote() {
        let cmd = push()
            .remote(Remote("origin"))
            .branch(Branch("cherrypick/TCK-9_2.10.x"));

        assert_eq!(args(cmd), ["push", "origin", "cherrypick/TCK-9_2.10.x"]);
    }
}
