//! `git-tessera` - git intrinsic issue tracking
//!
//! Each tessera lives as a directory of plain-text files inside the
//! repository it tracks, and every mutation becomes its own commit.

use git_tessera::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
