use std::process::Command;

use super::{Commit, Format, GitCmd};

pub struct Show {
    object: String,
    format: Option<Format>,
    no_patch: bool,
}

pub fn show<T: Into<String>>(Commit(object): Commit<T>) -> Show {
    Show {
        object: object.into(),
        format: None,
        no_patch: false,
    }
}

impl Show {
    pub fn format(self, format: Format) -> Show {
        Show {
            format: Some(format),
            ..self
        }
    }

    /// Suppress the diff output, like `git show -s`
    pub fn no_patch(self) -> Show {
        Show {
            no_patch: true,
            ..self
        }
    }
}

impl GitCmd for Show {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("show");

        self.format
            .map(|f| cmd.arg(format!("--pretty=format:{}", f.as_str())));

        if self.no_patch {
            cmd.arg("-s");
        }

        cmd.arg(self.object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::args;

    #[test]
    fn show_subject_only() {
        let cmd = show(Commit("abcdef")).format(Format::Subject).no_patch();

        assert_eq!(args(cmd), ["show", "--pretty=format:%s", "-s", "abcdef"]);
    }
}
