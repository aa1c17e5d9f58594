//! Emit the composed figure as a standalone interactive HTML document.

use crate::figure::Figure;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the figure into a self-contained HTML page (plotly.js from CDN).
pub fn to_html(figure: &Figure) -> Result<String> {
    let data = serde_json::to_string(&figure.traces).context("serialize traces")?;
    let layout = serde_json::to_string(&figure.layout).context("serialize layout")?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Sales Data by Country</title>
<script src="{PLOTLY_CDN}"></script>
<style>html, body, #chart {{ margin: 0; height: 100%; }}</style>
</head>
<body>
<div id="chart"></div>
<script>
var data = {data};
var layout = {layout};
Plotly.newPlot("chart", data, layout, {{ responsive: true }});
</script>
</body>
</html>
"#
    ))
}

/// Write the figure to `path` as a standalone HTML file.
pub fn render_html<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let html = to_html(figure)?;
    fs::write(path.as_ref(), html)
        .with_context(|| format!("write chart to {}", path.as_ref().display()))?;
    Ok(())
}
