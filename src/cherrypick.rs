//! Cherry-pick a commit merged on the main line into a release branch, and prepare the
//! pull-request bringing it there.
//!
//! ## Steps
//!
//! ```text
//! rm -rf __chpicker__<repo>
//! git clone <base>/scm/<project>/<repo>.git __chpicker__<repo>
//! cd __chpicker__<repo>
//! git fetch --all
//! subject=$(git show --pretty=format:%s -s <commit>)
//! git switch -c release/<version>.x origin/release/<version>.x
//! git checkout -b cherrypick/<ticket>_<version>.x
//! git cherry-pick -n <commit>
//! git add .
//! git commit -m "<ticket> | 🍒 <version>.x | <title>" -m "Pull request #<pr>"
//! git push origin cherrypick/<ticket>_<version>.x
//! cd .. && rm -rf __chpicker__<repo>
//! open <pull-request creation page>
//! ```
//!
//! Any failure stops the run right away. On failures after the clone, the work directory is
//! left in place so that things can be finished by hand.

use std::io;
use std::path::Path;
use std::{env, fs};

use log::{debug, info, warn};
use thiserror::Error;

use crate::browser;
use crate::git;
use crate::metadata::{self, CommitMetadata};
use crate::reference::{self, CommitReference};
use crate::release::{self, ReleaseVersion};
use crate::shell::{self, Command};

const CONFLICTS: &str =
    "cherry-pick failed, possibly because of conflicts. Finish the remaining steps manually!";

pub struct CherryPickOpt {
    pub commit_url: String,
    pub release: String,
    pub remote: String,
    pub open: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Release(#[from] release::Error),
    #[error(transparent)]
    Reference(#[from] reference::Error),
    #[error(transparent)]
    Metadata(#[from] metadata::Error),
    #[error("cannot remove work directory `{0}`")]
    Cleanup(String, #[source] io::Error),
    #[error("cannot enter work directory `{0}`")]
    ChangeDir(String, #[source] io::Error),
    #[error("failed to clone repository")]
    Clone(#[source] shell::Error),
    #[error("failed to fetch branches")]
    Fetch(#[source] shell::Error),
    #[error("failed to switch to branch {0}")]
    Switch(String, #[source] shell::Error),
    #[error("failed to create branch {0}")]
    CreateBranch(String, #[source] shell::Error),
    #[error("{}", CONFLICTS)]
    CherryPick(#[source] shell::Error),
    #[error("{}", CONFLICTS)]
    Commit(#[source] shell::Error),
    #[error("failed to push branch {0}")]
    Push(String, #[source] shell::Error),
}

/// Print the step about to run, whatever its outcome ends up being
fn step(name: impl AsRef<str>) {
    println!(" • {}", name.as_ref());
}

/// Same as `rm -rf`: whatever sits at `dir` goes away, and a missing `dir` is fine
fn remove_work_directory(dir: &str) -> Result<(), Error> {
    let removed = match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dir),
        Ok(_) => fs::remove_file(dir),
        Err(e) => Err(e),
    };

    match removed {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(Error::Cleanup(dir.to_owned(), e)),
        _ => Ok(()),
    }
}

/// Branches involved in the cherry-pick, computed once the commit's subject is known
#[derive(Debug, PartialEq, Eq)]
pub struct Branches {
    pub release: String,
    pub cherry_pick: String,
}

impl Branches {
    pub fn new(metadata: &CommitMetadata, version: &ReleaseVersion) -> Branches {
        Branches {
            release: version.branch(),
            cherry_pick: metadata.cherry_pick_branch(version),
        }
    }
}

pub fn run(
    CherryPickOpt {
        commit_url,
        release,
        remote,
        open,
    }: CherryPickOpt,
) -> Result<(), Error> {
    let version = ReleaseVersion::normalize(&release)?;
    let reference = CommitReference::parse(&commit_url)?;

    debug!("parsed {reference:?}, release {version}");

    let work_dir = reference.work_directory();
    remove_work_directory(&work_dir)?;

    step("Cloning repository");
    git::clone(reference.clone_url())
        .directory(&work_dir)
        .spawn()
        .map_err(Error::Clone)?;

    env::set_current_dir(&work_dir).map_err(|e| Error::ChangeDir(work_dir.clone(), e))?;

    step("Fetching all branches from the server");
    git::fetch().all().spawn().map_err(Error::Fetch)?;

    // An unreadable commit leaves an empty subject, which the extraction below rejects
    let subject = git::show(git::Commit(&reference.commit))
        .format(git::Format::Subject)
        .no_patch()
        .spawn()
        .map(|out| out.stdout)
        .unwrap_or_else(|e| {
            warn!("couldn't read subject of commit {}: {e}", reference.commit);
            String::new()
        });

    info!("commit {} is `{subject}`", reference.commit);

    let metadata = CommitMetadata::extract(&subject)?;
    let (title, body) = metadata.commit_message(&version);
    let branches = Branches::new(&metadata, &version);

    step(format!("Switching to branch {}", branches.release));
    git::switch(git::Branch(&branches.release))
        .create()
        .start_point(git::Branch(format!("{remote}/{}", branches.release)))
        .spawn()
        .map_err(|e| Error::Switch(branches.release.clone(), e))?;

    step(format!("Creating branch {} from it", branches.cherry_pick));
    git::checkout()
        .new_branch(git::Branch(&branches.cherry_pick))
        .spawn()
        .map_err(|e| Error::CreateBranch(branches.cherry_pick.clone(), e))?;

    step("Cherry-picking");
    git::cherry_pick(git::Commit(&reference.commit))
        .no_commit()
        .spawn()
        .map_err(Error::CherryPick)?;

    step("Committing changes");
    git::add().path(".").spawn().map_err(Error::Commit)?;
    git::commit()
        .message(title)
        .message(body)
        .spawn()
        .map_err(Error::Commit)?;

    step("Pushing the new branch to the server");
    git::push()
        .remote(git::Remote(&remote))
        .branch(git::Branch(&branches.cherry_pick))
        .spawn()
        .map_err(|e| Error::Push(branches.cherry_pick.clone(), e))?;

    step("Removing work directory");
    let parent = Path::new("..");
    env::set_current_dir(parent).map_err(|e| Error::ChangeDir(parent.display().to_string(), e))?;
    remove_work_directory(&work_dir)?;

    let pr_url = match reference.pull_request_url(&branches.cherry_pick, &branches.release) {
        Ok(url) => url,
        Err(e) => {
            warn!("{e}");
            return Ok(());
        }
    };

    if open {
        step("Opening the pull-request creation page...");
        browser::open(&pr_url).spawn();
    } else {
        step("Pull-request creation page:");
    }
    println!("   {pr_url}");

    Ok(())
}
