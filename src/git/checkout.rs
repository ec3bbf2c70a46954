use std::process::Command;

use super::{Branch, GitCmd};

#[derive(Default)]
pub struct Checkout {
    new_branch: Option<String>,
}

pub fn checkout() -> Checkout {
    Checkout::default()
}

impl Checkout {
    /// Branch off the current `HEAD` and check the new branch out
    pub fn new_branch<T: Into<String>>(self, Branch(name): Branch<T>) -> Checkout {
        Checkout {
            new_branch: Some(name.into()),
        }
    }
}

impl GitCmd for Checkout {
    fn setup(self, cmd: &mut Command) {
        cmd.arg("checkout");

        self.new_branch.map(|b| cmd.arg("-b").arg(b));
    }
}
