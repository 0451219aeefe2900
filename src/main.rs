use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use pagviz::{Background, Error};

#[derive(Parser)]
#[command(
    name = "pagviz",
    about = "Convert a PAG (Partial Ancestral Graph) in the TXT format exported from Tetrad into a DOT file or rendered image, with a color scheme for the different edge types"
)]
struct Cli {
    /// Input PAG text file
    input: PathBuf,

    /// Use a white background instead of OldLace
    #[arg(long, short = 'w')]
    white_background: bool,

    /// Save the output to this path; a `.dot` extension produces DOT
    /// source, any other extension selects the image format
    #[arg(long, short = 'f')]
    file_output: Option<PathBuf>,

    /// Write the rendered image to stdout
    #[arg(long, short = 't')]
    terminal_output: bool,

    /// Image format for terminal output
    #[arg(long, short = 'F', default_value = "png")]
    format: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    if cli.file_output.is_none() && !cli.terminal_output {
        return Err(Error::NoOutputSelected);
    }

    let input = std::fs::read_to_string(&cli.input).map_err(|e| Error::InputNotFound {
        path: cli.input.display().to_string(),
        source: e,
    })?;

    let background = if cli.white_background {
        Background::White
    } else {
        Background::OldLace
    };
    let dot_source = pagviz::to_dot(&input, background)?;

    if let Some(path) = &cli.file_output {
        match image_format(path) {
            None => write_file(path, dot_source.as_bytes())?,
            Some(format) => write_file(path, &pagviz::backend::render(&dot_source, &format)?)?,
        }
    }

    if cli.terminal_output {
        let bytes = pagviz::backend::render(&dot_source, &cli.format)?;
        std::io::stdout()
            .write_all(&bytes)
            .map_err(|e| Error::OutputWrite {
                path: "<stdout>".to_string(),
                source: e,
            })?;
    }

    Ok(())
}

/// `.dot` paths get DOT source; any other extension is handed to the
/// backend as the image format, defaulting to png when there is none.
fn image_format(path: &Path) -> Option<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("dot") => None,
        Some(ext) => Some(ext.to_ascii_lowercase()),
        None => Some("png".to_string()),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    std::fs::write(path, bytes).map_err(|e| Error::OutputWrite {
        path: path.display().to_string(),
        source: e,
    })
}
