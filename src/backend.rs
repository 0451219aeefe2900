use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::Error;

/// Rasterize DOT source by piping it through the Graphviz `dot` program.
/// Returns the rendered bytes in the requested format (png, svg, ...).
pub fn render(dot_source: &str, format: &str) -> Result<Vec<u8>, Error> {
    render_with("dot", dot_source, format)
}

fn render_with(program: &str, dot_source: &str, format: &str) -> Result<Vec<u8>, Error> {
    let mut child = Command::new(program)
        .arg(format!("-T{format}"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Backend(format!("failed to start `{program}`: {e}")))?;

    // Dropping stdin after the write closes the pipe so the renderer can
    // finish.
    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Backend(format!("`{program}` stdin unavailable")))?;
    write_source(stdin, dot_source, program)?;

    let output = child
        .wait_with_output()
        .map_err(|e| Error::Backend(format!("failed to wait for `{program}`: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Backend(format!(
            "`{program} -T{format}` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(output.stdout)
}

fn write_source(mut stdin: impl Write, dot_source: &str, program: &str) -> Result<(), Error> {
    stdin
        .write_all(dot_source.as_bytes())
        .map_err(|e| Error::Backend(format!("failed to send graph to `{program}`: {e}")))
}
