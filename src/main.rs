use clap::Parser;
use sidecar_match::{config, logging, output, scan, sidecar};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "sidecar-match")]
#[command(version)]
#[command(about = "Copy truncated JSON sidecars next to the media files they describe")]
#[command(long_about = "\
Copy truncated JSON sidecars next to the media files they describe

Photo exports write one <name>.json sidecar per media file, but long names
are cut to 46 characters, copy numbers move to the end and live-photo videos
share the still image's sidecar. This tool finds each media file's sidecar
and copies it to <media file name>.json so exiftool can pick it up.

Candidate sidecar names (first existing wins):
  IMG_0001.jpg               -> IMG_0001.jpg.json
  <long name, 60 chars>.jpg  -> <first 46 chars>.json
  IMG_0001-edited.jpg        -> IMG_0001.jpg.json
  IMG_0001(2).jpg            -> IMG_0001.jpg(2).json
  IMG_0001.MOV               -> IMG_0001.HEIC.json, IMG_0001.jpg.json, ...

Sidecars are copied, never moved. Unmatched media files are logged as
warnings. Finally, the exiftool command to embed the metadata is printed.")]
struct Cli {
    /// Root folder of the exported archive
    folder: PathBuf,

    /// TOML file overriding matcher settings (name limit, extensions, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every copy performed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(cli.config.as_deref())?;
    let folder = scan::resolve_root(&cli.folder)?;

    let media_files = scan::media_files(&folder, &config)?;
    info!("found {} media files", media_files.len());

    let summary = sidecar::normalize(&media_files, &config)?;
    info!("{}", output::format_summary(&summary));
    info!("now you can run: {}", output::exiftool_command(&folder));

    Ok(())
}
