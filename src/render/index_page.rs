//! Writes `index.html`, the page that lays out the map and the two charts side by side.

use crate::render::error::RenderError;
use crate::render::output::write_atomic;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "index.html";

/// Writes the index page into `output_dir`, embedding every rendered file by its file name.
///
/// The first file fills the top of the page (the map); the remaining files are laid out
/// below it in a row (the charts).
pub fn write_index_page(
    output_dir: &Path,
    title: &str,
    files: &[PathBuf],
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, RenderError> {
    let mut frames = files.iter().filter_map(|path| path.file_name()?.to_str());

    let map_frame = frames
        .next()
        .map(|name| format!(r#"<iframe class="map" src="{name}"></iframe>"#))
        .unwrap_or_default();
    let chart_frames: Vec<String> = frames
        .map(|name| format!(r#"<iframe class="chart" src="{name}"></iframe>"#))
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 0 1rem; }}
iframe {{ border: 0; width: 100%; }}
.map {{ height: 600px; }}
.charts {{ display: flex; gap: 1rem; }}
.chart {{ flex: 1; height: 500px; }}
</style>
</head>
<body>
<h1>{title}</h1>
{map_frame}
<div class="charts">
{charts}
</div>
<footer>Generated at {generated}</footer>
</body>
</html>
"#,
        charts = chart_frames.join("\n"),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    write_atomic(&output_dir.join(INDEX_FILE_NAME), &html)
}
