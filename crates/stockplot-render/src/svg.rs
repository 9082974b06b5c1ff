//! SVG output format.

use std::io::{self, Write};
use stockplot_types::{ChartKind, ChartPayload};

use crate::{ChartRenderer, RenderError};

/// Stroke and fill colours in legend order (Open, High, Low, Close).
pub const SERIES_COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 112.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 104.0;
const Y_GUIDES: usize = 5;
const LABEL_ROTATION: f64 = 30.0;

/// SVG formatter.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    /// Creates a renderer producing a 1200x600 image.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 1200,
            height: 600,
        }
    }
}

/// Plot area geometry and value scale.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    min: f64,
    max: f64,
    points: usize,
}

impl Frame {
    fn new(renderer: &SvgRenderer, points: usize, lo: f64, hi: f64) -> Self {
        // Flat series still need a non-zero scale.
        let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        };
        let pad = (hi - lo) * 0.05;
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (f64::from(renderer.width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (f64::from(renderer.height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            min: lo - pad,
            max: hi + pad,
            points,
        }
    }

    fn band(&self) -> f64 {
        self.width / self.points as f64
    }

    fn x(&self, index: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.band()
    }

    fn y(&self, value: f64) -> f64 {
        self.top + (self.max - value) / (self.max - self.min) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Escapes text for use in SVG content and attribute values.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ChartRenderer for SvgRenderer {
    fn render<W: Write + Send>(
        &self,
        chart: &ChartPayload,
        mut writer: W,
    ) -> Result<(), RenderError> {
        let Some((lo, hi)) = chart.value_bounds() else {
            return Err(RenderError::EmptyChart(chart.symbol.clone()));
        };
        let frame = Frame::new(self, chart.len(), lo, hi);
        let (w, h) = (self.width, self.height);

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="11">"#
        )?;
        writeln!(writer, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            writer,
            r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
            f64::from(w) / 2.0,
            escape_xml(&chart.title)
        )?;

        write_guides(&mut writer, &frame)?;
        match chart.kind {
            ChartKind::Line => write_lines(&mut writer, &frame, chart)?,
            ChartKind::Bar => write_bars(&mut writer, &frame, chart)?,
        }
        write_x_axis(&mut writer, &frame, chart)?;
        write_legend(&mut writer, &frame)?;

        writeln!(writer, "</svg>")?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "svg"
    }
}

fn write_guides<W: Write>(writer: &mut W, frame: &Frame) -> io::Result<()> {
    for step in 0..=Y_GUIDES {
        let value = frame.min + (frame.max - frame.min) * step as f64 / Y_GUIDES as f64;
        let y = frame.y(value);
        writeln!(
            writer,
            r##"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#e0e0e0"/>"##,
            frame.left,
            frame.right()
        )?;
        writeln!(
            writer,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{value:.2}</text>"#,
            frame.left - 6.0,
            y + 4.0
        )?;
    }
    writeln!(
        writer,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        frame.left, frame.top, frame.width, frame.height
    )
}

fn write_lines<W: Write>(writer: &mut W, frame: &Frame, chart: &ChartPayload) -> io::Result<()> {
    let markers = chart.labels.shows_all();
    for ((name, values), color) in chart.series().iter().zip(SERIES_COLORS) {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.2},{:.2}", frame.x(i), frame.y(*v)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            writer,
            r#"<polyline class="series-{}" fill="none" stroke="{color}" stroke-width="1.5" points="{points}"/>"#,
            name.to_lowercase()
        )?;
        if markers {
            for (i, v) in values.iter().enumerate() {
                writeln!(
                    writer,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="2.5" fill="{color}"/>"#,
                    frame.x(i),
                    frame.y(*v)
                )?;
            }
        }
    }
    Ok(())
}

fn write_bars<W: Write>(writer: &mut W, frame: &Frame, chart: &ChartPayload) -> io::Result<()> {
    let group = frame.band() * 0.8;
    let bar = group / SERIES_COLORS.len() as f64;
    for (k, ((name, values), color)) in chart.series().iter().zip(SERIES_COLORS).enumerate() {
        for (i, v) in values.iter().enumerate() {
            let x = frame.x(i) - group / 2.0 + k as f64 * bar;
            let y = frame.y(*v);
            writeln!(
                writer,
                r#"<rect class="series-{}" x="{x:.2}" y="{y:.2}" width="{bar:.2}" height="{:.2}" fill="{color}"/>"#,
                name.to_lowercase(),
                frame.bottom() - y
            )?;
        }
    }
    Ok(())
}

fn write_x_axis<W: Write>(writer: &mut W, frame: &Frame, chart: &ChartPayload) -> io::Result<()> {
    let bottom = frame.bottom();
    for (i, label) in chart.labels.labels.iter().enumerate() {
        let x = frame.x(i);
        let shown = chart.labels.is_shown(i);
        // Major ticks are longer than minor ones.
        let tick = if shown { 6.0 } else { 3.0 };
        writeln!(
            writer,
            r#"<line x1="{x:.2}" y1="{bottom:.2}" x2="{x:.2}" y2="{:.2}" stroke="black"/>"#,
            bottom + tick
        )?;
        if shown {
            let y = bottom + 16.0;
            writeln!(
                writer,
                r#"<text class="x-label" x="{x:.2}" y="{y:.2}" transform="rotate({LABEL_ROTATION} {x:.2} {y:.2})">{}</text>"#,
                escape_xml(label)
            )?;
        }
    }
    Ok(())
}

fn write_legend<W: Write>(writer: &mut W, frame: &Frame) -> io::Result<()> {
    let x = frame.right() + 16.0;
    for (k, (name, color)) in stockplot_types::SERIES_NAMES
        .iter()
        .zip(SERIES_COLORS)
        .enumerate()
    {
        let y = frame.top + 8.0 + k as f64 * 20.0;
        writeln!(
            writer,
            r#"<rect x="{x:.2}" y="{y:.2}" width="12" height="12" fill="{color}"/>"#
        )?;
        writeln!(
            writer,
            r#"<text class="legend" x="{:.2}" y="{:.2}">{name}</text>"#,
            x + 18.0,
            y + 10.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplot_types::LabelPlan;

    fn chart(kind: ChartKind, n: usize, major: Option<Vec<usize>>) -> ChartPayload {
        let base: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        ChartPayload {
            symbol: "AT&T".into(),
            kind,
            title: "AT&T Stock Data (2024-01-01 → 2024-03-31)".into(),
            open: base.clone(),
            high: base.iter().map(|v| v + 2.0).collect(),
            low: base.iter().map(|v| v - 1.0).collect(),
            close: base.iter().map(|v| v + 1.0).collect(),
            labels: LabelPlan {
                labels: (0..n).map(|i| format!("L{i:03}")).collect(),
                major,
            },
        }
    }

    fn render(chart: &ChartPayload) -> String {
        let mut output = Vec::new();
        SvgRenderer::new().render(chart, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_line_chart_structure() {
        let svg = render(&chart(ChartKind::Line, 3, None));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 4);
        assert_eq!(svg.matches("<circle").count(), 12);
        assert!(svg.contains("AT&amp;T Stock Data"));
        assert!(!svg.contains("AT&T"));
    }

    #[test]
    fn test_legend_order() {
        let svg = render(&chart(ChartKind::Line, 2, None));
        let positions: Vec<_> = ["Open", "High", "Low", "Close"]
            .iter()
            .map(|name| svg.find(&format!(">{name}</text>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_bar_chart_groups() {
        let svg = render(&chart(ChartKind::Bar, 5, None));
        assert_eq!(svg.matches("<polyline").count(), 0);
        assert_eq!(svg.matches(r#"<rect class="series-"#).count(), 20);
        assert_eq!(svg.matches(r#"class="series-close""#).count(), 5);
    }

    #[test]
    fn test_thinned_labels() {
        let major: Vec<usize> = (0..40).step_by(2).collect();
        let svg = render(&chart(ChartKind::Line, 40, Some(major)));
        assert_eq!(svg.matches(r#"class="x-label""#).count(), 20);
        assert!(svg.contains(">L000</text>"));
        assert!(!svg.contains(">L001</text>"));
        assert!(svg.contains("rotate(30"));
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_flat_series() {
        let mut flat = chart(ChartKind::Line, 2, None);
        for series in [&mut flat.open, &mut flat.high, &mut flat.low, &mut flat.close] {
            series.iter_mut().for_each(|v| *v = 5.0);
        }
        let svg = render(&flat);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_empty_chart_rejected() {
        let empty = chart(ChartKind::Bar, 0, None);
        let err = SvgRenderer::new().render(&empty, Vec::new()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyChart(_)));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
    }
}
