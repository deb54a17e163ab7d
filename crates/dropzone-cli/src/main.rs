//! Command-line frontend: validates files on disk as one dropzone selection.
//!
//! ```text
//! dropzone-cli [--config dropzone.toml] [--drop] FILE...
//! ```
//!
//! Prints the accepted files and rejections as JSON on stdout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use dropzone_core::{
    DropzoneConfig, FileInfo, InputKind, Outcome, Rejection, Session, UploadListener,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    kind: Option<InputKind>,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--drop" => parsed.kind = Some(InputKind::Drop),
            other if other.starts_with("--") => anyhow::bail!("unknown option: {other}"),
            _ => parsed.files.push(PathBuf::from(arg)),
        }
    }
    Ok(parsed)
}

/// Keeps the most recent notification.
#[derive(Debug, Default)]
struct LastUpload {
    outcome: Option<Outcome>,
}

impl UploadListener for LastUpload {
    fn on_upload(&mut self, accepted: &[FileInfo], rejections: &[Rejection]) {
        tracing::info!(
            accepted = accepted.len(),
            rejected = rejections.len(),
            "upload"
        );
        self.outcome = Some(Outcome {
            accepted: accepted.to_vec(),
            rejections: rejections.to_vec(),
        });
    }
}

/// Reads a file from disk, preferring the registered MIME type over the
/// name-based guess.
fn load_file(path: &Path) -> anyhow::Result<FileInfo> {
    let file = FileInfo::from_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(match mime_guess::from_path(path).first_raw() {
        Some(mime) => file.with_mime(mime),
        None => file,
    })
}

fn run(args: CliArgs) -> anyhow::Result<Outcome> {
    let config = match &args.config {
        Some(path) => DropzoneConfig::load(path)?,
        None => DropzoneConfig::default(),
    };
    let files = args
        .files
        .iter()
        .map(|p| load_file(p))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut session = Session::new(config, LastUpload::default());
    session.handle_input(args.kind.unwrap_or(InputKind::Change), files);
    session.run_deferred();

    let current = session.outcome();
    Ok(session.into_listener().outcome.unwrap_or(current))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropzone_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.files.is_empty() {
        anyhow::bail!("usage: dropzone-cli [--config PATH] [--drop] FILE...");
    }

    let outcome = run(args)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
