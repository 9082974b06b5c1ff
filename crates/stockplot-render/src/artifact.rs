//! Chart artifact naming and file output.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use stockplot_types::{ChartKind, ChartPayload};
use tracing::info;
use uuid::Uuid;

use crate::{ChartRenderer, RenderError};

/// Returns true if `symbol` can be used as a file name component.
///
/// Only ASCII letters, digits, `.`, `_` and `-` are accepted, and `..` is
/// rejected, so the artifact always lands inside the output directory.
#[must_use]
fn is_safe_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && !symbol.contains("..")
        && symbol
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

/// Returns the file name of a chart artifact.
///
/// With `isolation`, a unique component is inserted so that concurrent
/// requests for the same symbol and kind never share a file.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSymbol`] if the symbol is not a safe file
/// name component.
///
/// # Example
///
/// ```
/// use stockplot_render::artifact_name;
/// use stockplot_types::ChartKind;
///
/// assert_eq!(
///     artifact_name("IBM", ChartKind::Line, "svg", None).unwrap(),
///     "IBM_line_chart.svg"
/// );
/// assert!(artifact_name("../IBM", ChartKind::Line, "svg", None).is_err());
/// ```
pub fn artifact_name(
    symbol: &str,
    kind: ChartKind,
    extension: &str,
    isolation: Option<Uuid>,
) -> Result<String, RenderError> {
    if !is_safe_symbol(symbol) {
        return Err(RenderError::InvalidSymbol(symbol.to_string()));
    }
    Ok(match isolation {
        Some(id) => format!("{symbol}_{kind}_{}_chart.{extension}", id.simple()),
        None => format!("{symbol}_{kind}_chart.{extension}"),
    })
}

/// Renders `chart` into `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if the symbol is not a safe file name component, the
/// directory or file cannot be written, or the renderer fails.
pub fn render_to_dir<R: ChartRenderer>(
    renderer: &R,
    chart: &ChartPayload,
    dir: &Path,
    isolate: bool,
) -> Result<PathBuf, RenderError> {
    let isolation = isolate.then(Uuid::new_v4);
    let name = artifact_name(&chart.symbol, chart.kind, renderer.extension(), isolation)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let mut writer = BufWriter::new(File::create(&path)?);
    renderer.render(chart, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), points = chart.len(), "wrote chart");
    Ok(path)
}
