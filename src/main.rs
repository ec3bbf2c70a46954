use std::process::ExitCode;

use clap::Parser;
use log::error;

mod browser;
mod cherrypick;
mod git;
mod metadata;
mod reference;
mod release;
mod shell;

/// Cherry-pick a merged commit into a release branch, push the result and open the matching
/// pull-request creation page.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[arg(
        help = "Link to the commit to cherry-pick, e.g. https://git.example.com/projects/PROJ/repos/repo/commits/1a2b3c"
    )]
    commit_url: String,
    #[arg(
        default_value = "",
        help = "Release line to cherry-pick into: `1.2`, `1.2.x`, `release/1.2` or `release/1.2.x`"
    )]
    release: String,
    #[arg(long, default_value = "origin", help = "Remote to track and push to")]
    remote: String,
    #[arg(
        long,
        help = "Print the pull-request creation link instead of opening it in a browser"
    )]
    no_open: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let res = cherrypick::run(cherrypick::CherryPickOpt {
        commit_url: args.commit_url,
        release: args.release,
        remote: args.remote,
        open: !args.no_open,
    });

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            println!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}
