use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use drawly_rs::model::core_config::Config;
use drawly_rs::model::errors::DrawlyErr;
use drawly_rs::{Drawly, DrawlyErrKind};

mod clear;
mod list;
mod new;
mod remove;
mod rename;
mod show;
mod status;

#[derive(Parser)]
#[command(
    name = "drawly",
    version = drawly_rs::get_code_version(),
    about = "Turn photos into step-by-step drawing tutorials."
)]
struct DrawlyCli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a tutorial from a photo and save it to your library
    New { photo: PathBuf },

    /// List the tutorials in your library
    List,

    /// Print a tutorial, or a single step of it
    Show {
        id: String,
        /// Print only this step (1-based)
        #[arg(long)]
        step: Option<usize>,
    },

    /// Give a tutorial a new title
    Rename { id: String, title: String },

    /// Remove a tutorial from your library
    Remove { id: String },

    /// Remove every tutorial
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show how much storage your library uses
    Status,
}

#[tokio::main]
async fn main() {
    let cli = DrawlyCli::parse();

    let drawly = match Drawly::init(Config::cli_config("cli")).await {
        Ok(drawly) => drawly,
        Err(err) => exit_with(err),
    };

    let result = match cli.command {
        Command::New { photo } => new::new(&drawly, &photo).await,
        Command::List => list::list(&drawly).await,
        Command::Show { id, step } => show::show(&drawly, &id, step).await,
        Command::Rename { id, title } => rename::rename(&drawly, &id, &title).await,
        Command::Remove { id } => remove::remove(&drawly, &id).await,
        Command::Clear { force } => clear::clear(&drawly, force).await,
        Command::Status => status::status(&drawly).await,
    };

    if let Err(err) = result {
        exit_with(err);
    }
}

fn exit_with(err: DrawlyErr) -> ! {
    eprintln!("{err}");
    let code = match err.kind {
        DrawlyErrKind::TutorialNonexistent => TUTORIAL_NONEXISTENT,
        DrawlyErrKind::ImageNonexistent => IMAGE_NONEXISTENT,
        DrawlyErrKind::StorageFull | DrawlyErrKind::StorageQuotaExceeded => STORAGE_FULL,
        DrawlyErrKind::DiskPathInvalid => DISK_PATH_INVALID,
        DrawlyErrKind::Unexpected(_) => UNEXPECTED_ERROR,
    };
    process::exit(code as i32)
}

// Exit Codes, respect: http://www.tldp.org/LDP/abs/html/exitcodes.html
static TUTORIAL_NONEXISTENT: u8 = 1;
static IMAGE_NONEXISTENT: u8 = 2;
static STORAGE_FULL: u8 = 3;
static DISK_PATH_INVALID: u8 = 4;
static UNEXPECTED_ERROR: u8 = 5;
