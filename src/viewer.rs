//! Interactive display of a rendered chart page.

use anyhow::{Context, bail};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// Something that can put a page on screen.
pub trait Launcher {
    fn launch(&self, page: &Path) -> anyhow::Result<()>;
}

/// The desktop's default handler (`xdg-open`, `open`, `start`).
pub struct SystemViewer;

impl Launcher for SystemViewer {
    fn launch(&self, page: &Path) -> anyhow::Result<()> {
        let mut cmd = viewer_command(page);
        let status = cmd
            .status()
            .with_context(|| format!("launch viewer {:?}", cmd.get_program()))?;
        if !status.success() {
            bail!("viewer {:?} exited with {}", cmd.get_program(), status);
        }
        Ok(())
    }
}

/// How the wait for the user ended.
#[derive(Debug, PartialEq)]
pub enum Dismissal {
    /// The user pressed Enter; the page has been removed.
    Closed,
    /// Nobody can answer on the input (EOF); the page was kept for the viewer.
    InputClosed(PathBuf),
}

/// Open `html` in the system viewer and block until the user presses Enter.
pub fn show_chart(html: &str) -> anyhow::Result<Dismissal> {
    let stdin = io::stdin();
    show_with(html, &SystemViewer, stdin.lock())
}

/// Write `html` to a temporary page, launch it, then wait on `input`.
///
/// The page is removed on return unless `input` is already at EOF, in which
/// case the viewer may still be loading it and the file is left in place.
pub fn show_with<L: Launcher, R: BufRead>(
    html: &str,
    launcher: &L,
    mut input: R,
) -> anyhow::Result<Dismissal> {
    let mut file = tempfile::Builder::new()
        .prefix("timing-chart-")
        .suffix(".html")
        .tempfile()
        .context("create temporary chart file")?;
    file.write_all(html.as_bytes())
        .context("write temporary chart file")?;
    file.flush()?;

    launcher.launch(file.path())?;
    info!(path = %file.path().display(), "chart opened; press Enter to close");

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("wait for viewer dismissal")?;

    if read == 0 {
        let kept = file
            .into_temp_path()
            .keep()
            .context("keep chart page for the viewer")?;
        warn!(path = %kept.display(), "no interactive input; leaving the chart page in place");
        return Ok(Dismissal::InputClosed(kept));
    }

    debug!("viewer dismissed");
    Ok(Dismissal::Closed)
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
