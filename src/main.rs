use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use minus::Pager;
use sesdiff::areas::session::Session;
use sesdiff::artifacts::core::{PagerWriter, should_page};
use sesdiff::{DiffOptions, LineEndings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sesdiff",
    version = "0.1.0",
    about = "Compact shortest-edit-script line diffs",
    long_about = "Computes minimal line diffs with Myers' algorithm and prints them \
    as compact patches: only added lines (\"+ \") and removed lines (\"- \"), \
    grouped under \"=== <path> ===\" headers when several files are compared.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    #[arg(long, global = true, help = "Strip a trailing carriage return from every line")]
    strip_cr: bool,
    #[arg(
        long,
        global = true,
        value_name = "N",
        help = "Skip files whose edit distance exceeds N"
    )]
    max_edit_distance: Option<usize>,
    #[arg(long, global = true, help = "Colorize added and removed lines")]
    color: bool,
    #[arg(long, global = true, help = "Never page the output")]
    no_pager: bool,
}

impl GlobalArgs {
    fn diff_options(&self) -> DiffOptions {
        let line_endings = if self.strip_cr {
            LineEndings::Strip
        } else {
            LineEndings::Preserve
        };

        DiffOptions::new(line_endings, self.max_edit_distance, self.color)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the compact diff of two files",
        long_about = "This command prints the lines removed from BEFORE and added in AFTER. \
        A file that cannot be read is compared as empty."
    )]
    Diff {
        #[arg(index = 1, help = "The old revision of the file")]
        before: PathBuf,
        #[arg(index = 2, help = "The new revision of the file")]
        after: PathBuf,
    },
    #[command(
        name = "report",
        about = "Show a compact report of two snapshot directories",
        long_about = "This command compares every file of BEFORE_DIR with the same path in AFTER_DIR. \
        Files only present in AFTER_DIR are reported as new, every line added."
    )]
    Report {
        #[arg(index = 1, help = "The directory holding the old revision")]
        before_dir: PathBuf,
        #[arg(index = 2, help = "The directory holding the new revision")]
        after_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.global.diff_options();

    if options.color {
        colored::control::set_override(true);
    }

    let pager = should_page(cli.global.no_pager).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let session = Session::new(writer, options);

    match &cli.command {
        Commands::Diff { before, after } => session.diff(before, after)?,
        Commands::Report {
            before_dir,
            after_dir,
        } => session.report(before_dir, after_dir).await?,
    }

    if let Some(pager) = pager {
        PagerWriter::page(pager)?;
    }

    Ok(())
}
