use std::process::Command;

use super::GitCmd;

#[derive(Default)]
pub struct Commit {
    messages: Vec<String>,
}

pub fn commit() -> Commit {
    Commit::default()
}

impl Commit {
    /// Add a paragraph to the commit message. Each call results in its own `-m` flag.
    pub fn message<T: Into<String>>(self, message: T) -> Commit {
        let mut messages = self.messages;
        messages.push(message.into());

        Commit { messages }
    }
}

impl GitCmd for Commit {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("commit");

        self.messages.iter().for_each(|msg| {
            cmd.arg("-m").arg(msg);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::args;

    #[test]
    fn one_flag_per_paragraph() {
        let cmd = commit()
            .message("TCK-9 | 🍒 2.10.x | Add widget")
            .message("Pull request #42");

        assert_eq!(
            args(cmd),
            [
                "commit",
                "-m",
                "TCK-9 | 🍒 2.10.x | Add widget",
                "-m",
                "Pull request #42"
            ]
        );
    }
}
