//! This module aims at abstracting the git operations needed to cherry-pick a commit onto a
//! release branch: cloning, fetching, switching and creating branches, cherry-picking,
//! committing and pushing.
//!
//! Each sub-command is a small builder implementing [`GitCmd`], which gives it
//! [`shell::Command::spawn`] for free.

use std::process;

use crate::shell::{self, Output};

mod add;
mod checkout;
mod cherry_pick;
mod clone;
mod commit;
mod fetch;
mod push;
mod show;
mod switch;

pub use add::add;
pub use checkout::checkout;
pub use cherry_pick::cherry_pick;
pub use clone::clone;
pub use commit::commit;
pub use fetch::fetch;
pub use push::push;
pub use show::show;
pub use switch::switch;

pub struct Branch<T: Into<String>>(pub T);
pub struct Remote<T: Into<String>>(pub T);
pub struct Commit<T: Into<String>>(pub T);

/// Pretty formats understood by `git show` and `git log`
pub enum Format {
    Subject,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Subject => "%s",
        }
    }
}

pub trait GitCmd {
    /// Append the sub-command and its arguments to `cmd`, which already points at the `git` binary
    fn setup(self, cmd: &mut process::Command);
}

impl<T: GitCmd> shell::Command for T {
    fn spawn(self) -> Result<Output, shell::Error> {
        let mut cmd = shell::piped("git");

        self.setup(&mut cmd);

        Self::spawn_with_output(cmd)
    }
}

#[cfg(test)]
pub(crate) fn args(git_cmd: impl GitCmd) -> Vec<String> {
    let mut cmd = process::Command::new("git");
    git_cmd.setup(&mut cmd);

    cmd.get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
