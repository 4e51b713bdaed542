// Chart
// Minimal SVG bar, line and scatter charts rendered as container content

use dashui::dom::NodeId;
use dashui::{Content, RenderContext};
use std::fmt::Write;

const PALETTE: &[&str] = &["#0d6efd", "#198754", "#ffc107", "#dc3545", "#6f42c1", "#20c997"];
const MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

/// Named list of `(x, y)` points. Bar and line charts use the point index
/// against the category axis and ignore `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Values placed at positions 0, 1, 2, ...
    pub fn values(name: impl Into<String>, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        Self::new(name, points)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    kind: ChartKind,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    categories: Vec<String>,
    series: Vec<Series>,
    colors: Vec<String>,
    width: u32,
    height: u32,
}

impl Chart {
    fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            x_label: None,
            y_label: None,
            categories: Vec::new(),
            series: Vec::new(),
            colors: PALETTE.iter().map(|c| c.to_string()).collect(),
            width: 300,
            height: 300,
        }
    }

    pub fn bar<S: ToString>(categories: &[S], values: &[f64]) -> Self {
        let mut chart = Self::new(ChartKind::Bar);
        chart.categories = categories.iter().map(ToString::to_string).collect();
        chart.series.push(Series::values("", values));
        chart
    }

    pub fn line<S: ToString>(categories: &[S], values: &[f64]) -> Self {
        let mut chart = Self::new(ChartKind::Line);
        chart.categories = categories.iter().map(ToString::to_string).collect();
        chart.series.push(Series::values("", values));
        chart
    }

    /// Categorical scatter: one dot per category position.
    pub fn dots<S: ToString>(categories: &[S], values: &[f64]) -> Self {
        let mut chart = Self::new(ChartKind::Scatter);
        chart.categories = categories.iter().map(ToString::to_string).collect();
        chart.series.push(Series::values("", values));
        chart
    }

    /// Numeric scatter or line plot with one series per group.
    pub fn xy(kind: ChartKind, series: Vec<Series>) -> Self {
        let mut chart = Self::new(kind);
        chart.series = series;
        chart
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Per-bar colors for a single series bar chart, per-series otherwise.
    pub fn colors<S: ToString>(mut self, colors: &[S]) -> Self {
        if !colors.is_empty() {
            self.colors = colors.iter().map(ToString::to_string).collect();
        }
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    fn color(&self, index: usize) -> &str {
        self.colors
            .get(index % self.colors.len().max(1))
            .map_or(PALETTE[0], String::as_str)
    }

    pub fn to_svg(&self) -> String {
        let plot = Plot::new(self);
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img">"#,
            w = self.width,
            h = self.height,
        );
        if let Some(title) = &self.title {
            let _ = write!(svg, "<title>{}</title>", escape(title));
            let _ = write!(
                svg,
                r#"<text x="{}" y="20" text-anchor="middle" font-size="14">{}</text>"#,
                fmt(f64::from(self.width) / 2.0),
                escape(title)
            );
        }
        let _ = write!(
            svg,
            r##"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#666"></line><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="#666"></line>"##,
            l = fmt(plot.left),
            r = fmt(plot.right),
            t = fmt(plot.top),
            b = fmt(plot.bottom),
        );

        match self.kind {
            ChartKind::Bar => self.bars(&plot, &mut svg),
            ChartKind::Line => self.lines(&plot, &mut svg),
            ChartKind::Scatter => self.dots_svg(&plot, &mut svg),
        }

        for (i, category) in self.categories.iter().enumerate() {
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="10">{}</text>"#,
                fmt(plot.x(i as f64)),
                fmt(plot.bottom + 14.0),
                escape(category)
            );
        }
        if let Some(label) = &self.x_label {
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="11">{}</text>"#,
                fmt((plot.left + plot.right) / 2.0),
                fmt(f64::from(self.height) - 4.0),
                escape(label)
            );
        }
        if let Some(label) = &self.y_label {
            let _ = write!(
                svg,
                r#"<text x="12" y="{}" text-anchor="middle" font-size="11" transform="rotate(-90 12 {})">{}</text>"#,
                fmt((plot.top + plot.bottom) / 2.0),
                fmt((plot.top + plot.bottom) / 2.0),
                escape(label)
            );
        }
        if self.series.len() > 1 {
            for (i, series) in self.series.iter().enumerate() {
                let y = plot.top + 12.0 * i as f64;
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" text-anchor="end" font-size="10" fill="{}">{}</text>"#,
                    fmt(plot.right),
                    fmt(y),
                    self.color(i),
                    escape(&series.name)
                );
            }
        }
        svg.push_str("</svg>");
        svg
    }

    fn bars(&self, plot: &Plot, svg: &mut String) {
        let Some(series) = self.series.first() else {
            return;
        };
        let width = plot.band() * 0.7;
        for (i, (x, y)) in series.points.iter().enumerate() {
            let top = plot.y(*y);
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"></rect>"#,
                fmt(plot.x(*x) - width / 2.0),
                fmt(top),
                fmt(width),
                fmt(plot.bottom - top),
                self.color(i)
            );
        }
    }

    fn lines(&self, plot: &Plot, svg: &mut String) {
        for (i, series) in self.series.iter().enumerate() {
            let points: Vec<String> = series
                .points
                .iter()
                .map(|(x, y)| format!("{},{}", fmt(plot.x(*x)), fmt(plot.y(*y))))
                .collect();
            let _ = write!(
                svg,
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"></polyline>"#,
                points.join(" "),
                self.color(i)
            );
        }
    }

    fn dots_svg(&self, plot: &Plot, svg: &mut String) {
        for (i, series) in self.series.iter().enumerate() {
            for (x, y) in &series.points {
                let _ = write!(
                    svg,
                    r#"<circle cx="{}" cy="{}" r="3" fill="{}"></circle>"#,
                    fmt(plot.x(*x)),
                    fmt(plot.y(*y)),
                    self.color(i)
                );
            }
        }
    }
}

impl Content for Chart {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        let markup = format!(r#"<figure class="dash-chart">{}</figure>"#, self.to_svg());
        cx.html(&markup)
    }
}

// Data-to-pixel mapping for the plot area
struct Plot {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    categorical: bool,
    slots: usize,
}

impl Plot {
    fn new(chart: &Chart) -> Self {
        let points = chart.series.iter().flat_map(|s| s.points.iter());
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in points {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
        if !x_min.is_finite() {
            (x_min, x_max, y_min, y_max) = (0.0, 1.0, 0.0, 1.0);
        }
        if chart.kind == ChartKind::Bar {
            y_min = y_min.min(0.0);
        }
        if y_max <= y_min {
            y_max = y_min + 1.0;
        }
        if x_max <= x_min {
            x_max = x_min + 1.0;
        }

        let categorical = !chart.categories.is_empty();
        let slots = chart
            .series
            .iter()
            .map(|s| s.points.len())
            .max()
            .unwrap_or(0)
            .max(chart.categories.len())
            .max(1);
        Self {
            left: MARGIN,
            right: f64::from(chart.width) - MARGIN / 2.0,
            top: MARGIN,
            bottom: f64::from(chart.height) - MARGIN,
            x_min,
            x_max,
            y_min,
            y_max,
            categorical,
            slots,
        }
    }

    fn band(&self) -> f64 {
        (self.right - self.left) / self.slots as f64
    }

    fn x(&self, x: f64) -> f64 {
        if self.categorical {
            self.left + self.band() * (x + 0.5)
        } else {
            self.left + (x - self.x_min) / (self.x_max - self.x_min) * (self.right - self.left)
        }
    }

    fn y(&self, y: f64) -> f64 {
        self.bottom - (y - self.y_min) / (self.y_max - self.y_min) * (self.bottom - self.top)
    }
}

fn fmt(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
