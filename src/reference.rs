//! Parsing of commit permalinks, such as
//! `https://git.example.com/projects/PROJ/repos/repo/commits/1a2b3c`

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

static COMMIT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)/projects/(.*?)/repos/(.*?)/commits/(.*?)(/|$)").unwrap()
});

const WORK_DIRECTORY_PREFIX: &str = "__chpicker__";

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse commit URL")]
    Parse,
    #[error("cannot build pull-request URL from `{0}`")]
    PullRequestUrl(String),
}

/// Where the commit to cherry-pick lives on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReference {
    pub base_url: String,
    pub project: String,
    pub repo: String,
    pub commit: String,
}

impl CommitReference {
    /// Anything after the commit hash (`/diff`, `#anchor`...) is ignored
    pub fn parse(url: &str) -> Result<CommitReference, Error> {
        let caps = COMMIT_URL_REGEX.captures(url).ok_or(Error::Parse)?;

        Ok(CommitReference {
            base_url: caps[1].to_owned(),
            project: caps[2].to_owned(),
            repo: caps[3].to_owned(),
            commit: caps[4].to_owned(),
        })
    }

    pub fn clone_url(&self) -> String {
        format!("{}/scm/{}/{}.git", self.base_url, self.project, self.repo)
    }

    pub fn work_directory(&self) -> String {
        format!("{WORK_DIRECTORY_PREFIX}{}", self.repo)
    }

    /// Link to the server's pull-request creation page, with both branches preselected
    pub fn pull_request_url(&self, source: &str, target: &str) -> Result<String, Error> {
        let page = format!(
            "{}/projects/{}/repos/{}/pull-requests",
            self.base_url, self.project, self.repo
        );

        let mut url = Url::parse(&page).map_err(|_| Error::PullRequestUrl(page))?;

        url.set_query(Some("create"));
        url.query_pairs_mut()
            .append_pair("sourceBranch", &format!("refs/heads/{source}"))
            .append_pair("targetBranch", &format!("refs/heads/{target}"));

        Ok(url.into())
    }
}
