use std::process::Command;

use super::GitCmd;

#[derive(Default)]
pub struct Add {
    paths: Vec<String>,
}

pub fn add() -> Add {
    Add::default()
}

impl Add {
    pub fn path<T: Into<String>>(self, path: T) -> Add {
        let mut paths = self.paths;
        paths.push(path.into());

        Add { paths }
    }
}

impl GitCmd for Add {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("add");

        self.paths.iter().for_each(|p| {
            cmd.arg(p);
        });
    }
}
