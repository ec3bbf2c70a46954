//! Extraction of ticket and pull-request information from a merged commit's subject.
//!
//! Subjects are expected to look like `TICKET-123 | #456 | Title of the pull-request`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::release::ReleaseVersion;

static TICKET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z0-9]+-\d+").unwrap());
static PR_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());
// The `#<number> | ` column, when present, is part of the marker rather than the title
static PR_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+\s\|\s(?:#\d+\s\|\s)?(.+)$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot extract ticket number from `{0}`")]
    Ticket(String),
    #[error("cannot extract pull-request number from `{0}`")]
    PrNumber(String),
    #[error("cannot extract pull-request title from `{0}`")]
    PrTitle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMetadata {
    pub ticket: String,
    pub pr_number: String,
    pub pr_title: String,
}

pub fn ticket(subject: &str) -> Result<String, Error> {
    TICKET_REGEX
        .find(subject)
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| Error::Ticket(subject.to_owned()))
}

pub fn pr_number(subject: &str) -> Result<String, Error> {
    PR_NUMBER_REGEX
        .captures(subject)
        .map(|caps| caps[1].to_owned())
        .ok_or_else(|| Error::PrNumber(subject.to_owned()))
}

/// Double quotes are swapped for single ones
pub fn pr_title(subject: &str) -> Result<String, Error> {
    PR_TITLE_REGEX
        .captures(subject)
        .map(|caps| caps[1].replace('"', "'"))
        .ok_or_else(|| Error::PrTitle(subject.to_owned()))
}

impl CommitMetadata {
    pub fn extract(subject: &str) -> Result<CommitMetadata, Error> {
        Ok(CommitMetadata {
            ticket: ticket(subject)?,
            pr_number: pr_number(subject)?,
            pr_title: pr_title(subject)?,
        })
    }

    /// `cherrypick/<ticket>_<version>.x`
    pub fn cherry_pick_branch(&self, version: &ReleaseVersion) -> String {
        format!("cherrypick/{}_{}", self.ticket, version.line())
    }

    /// Subject and body paragraphs of the cherry-picked commit
    pub fn commit_message(&self, version: &ReleaseVersion) -> (String, String) {
        (
            format!("{} | 🍒 {} | {}", self.ticket, version.line(), self.pr_title),
            format!("Pull request #{}", self.pr_number),
        )
    }
}
