//! The `geoscan scan` command.

mod progress;
mod summary;

use clap::Args;
use geoscan_core::{Config, ScanOptions, Scanner};
use std::path::PathBuf;

use progress::ScanProgress;
use summary::{print_summary, Outcome};

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directories to scan; each gets its own reports
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// Also write an HTML report
    #[arg(long)]
    pub html: bool,

    /// Do not write the CSV report
    #[arg(long)]
    pub no_csv: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

impl ScanArgs {
    /// Report selection: config defaults adjusted by the flags.
    fn options(&self, config: &Config) -> ScanOptions {
        let mut options = ScanOptions::from_config(&config.output);
        if self.html {
            options.write_html = true;
        }
        if self.no_csv {
            options.write_csv = false;
        }
        options
    }

    /// Roots with a leading `~` expanded.
    fn expanded_roots(&self) -> Vec<PathBuf> {
        self.roots
            .iter()
            .map(|root| {
                let raw = root.to_string_lossy();
                PathBuf::from(shellexpand::tilde(&raw).into_owned())
            })
            .collect()
    }
}

/// Execute the scan command.
///
/// Every root is scanned even if an earlier one fails; the command errors at
/// the end if any scan did not complete.
pub fn execute(args: ScanArgs, mut config: Config) -> anyhow::Result<()> {
    if args.follow_links {
        config.scan.follow_links = true;
    }
    let options = args.options(&config);
    let scanner = Scanner::new(&config);
    let roots = args.expanded_roots();

    let mut incomplete = 0usize;
    for root in &roots {
        let mut progress = ScanProgress::new(root, !args.no_progress);
        let outcome = scanner.scan_observed(root, &options, &mut progress);
        progress.finish();

        if print_summary(&outcome) != Outcome::Success {
            incomplete += 1;
        }
    }

    if incomplete > 0 {
        anyhow::bail!("{incomplete} of {} scan(s) did not complete", roots.len());
    }
    Ok(())
}
