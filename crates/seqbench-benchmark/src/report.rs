//! Report sinks and renderers.
//!
//! The runner streams graph declarations and samples into a [`ReportSink`].
//! [`GraphReport`] keeps them in memory in declaration order and renders the
//! whole run in the configured format when flushed.

use std::fmt::{self, Write as _};
use std::io::Write;

use seqbench_config::OutputFormat;
use seqbench_core::{BenchError, Result};
use tracing::warn;

/// Destination for benchmark results.
pub trait ReportSink {
    /// Starts a new graph. Subsequent samples belong to it.
    fn declare_graph(&mut self, id: &str, title: &str, unit: &str);

    /// Records one averaged value of `series` at x-axis label `x_label`.
    fn record_sample(&mut self, series: &str, x_label: &str, value: u64);

    /// Renders everything recorded so far in `format`.
    fn flush(&mut self, format: OutputFormat) -> Result<()>;
}

/// One line of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(String, u64)>,
}

/// A chart: a title, a y-axis unit and its series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub series: Vec<Series>,
}

impl Graph {
    fn new(id: &str, title: &str, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            series: Vec::new(),
        }
    }

    /// Returns the distinct x labels in first-seen order.
    pub fn x_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for (x, _) in self.series.iter().flat_map(|s| s.points.iter()) {
            if !labels.contains(&x.as_str()) {
                labels.push(x);
            }
        }
        labels
    }

    /// Returns the value of `series` at `x`, if one was recorded.
    pub fn value(&self, series: &str, x: &str) -> Option<u64> {
        self.series
            .iter()
            .find(|s| s.label == series)?
            .points
            .iter()
            .find(|(label, _)| label == x)
            .map(|&(_, value)| value)
    }

    fn record(&mut self, series: &str, x_label: &str, value: u64) {
        let index = match self.series.iter().position(|s| s.label == series) {
            Some(index) => index,
            None => {
                self.series.push(Series {
                    label: series.to_string(),
                    points: Vec::new(),
                });
                self.series.len() - 1
            }
        };
        self.series[index].points.push((x_label.to_string(), value));
    }
}

/// In-memory report rendered to a writer on flush.
///
/// Declaring an id that already exists selects that graph again instead of
/// creating a duplicate.
///
/// # Example
///
/// ```
/// use seqbench_benchmark::{GraphReport, ReportSink};
/// use seqbench_config::OutputFormat;
///
/// let mut report = GraphReport::new(Vec::new());
/// report.declare_graph("sort___Small", "sort - Small", "ms");
/// report.record_sample("vector", "100000", 7);
/// report.record_sample("list", "100000", 21);
/// report.flush(OutputFormat::Csv).unwrap();
///
/// let csv = String::from_utf8(report.into_writer()).unwrap();
/// assert!(csv.starts_with("graph,series,x,y,unit\n"));
/// assert!(csv.contains("sort___Small,list,100000,21,ms"));
/// ```
pub struct GraphReport<W: Write> {
    graphs: Vec<Graph>,
    current: Option<usize>,
    writer: W,
}

impl<W: Write> GraphReport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            graphs: Vec::new(),
            current: None,
            writer,
        }
    }

    /// Returns the graphs in declaration order.
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    /// Renders the recorded graphs without writing them.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Google => GoogleChartsPage::to_string(&self.graphs),
            OutputFormat::Csv => CsvExporter::to_string(&self.graphs),
            OutputFormat::Markdown => MarkdownReport::to_string(&self.graphs),
        };
        rendered.map_err(|e| BenchError::Report(e.to_string()))
    }

    /// Consumes the report, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for GraphReport<W> {
    fn declare_graph(&mut self, id: &str, title: &str, unit: &str) {
        let index = match self.graphs.iter().position(|g| g.id == id) {
            Some(index) => index,
            None => {
                self.graphs.push(Graph::new(id, title, unit));
                self.graphs.len() - 1
            }
        };
        self.current = Some(index);
    }

    fn record_sample(&mut self, series: &str, x_label: &str, value: u64) {
        let index = match self.current {
            Some(index) => index,
            None => {
                warn!(event = "undeclared_graph", series, "sample recorded before any graph");
                self.graphs.push(Graph::new("untitled", "untitled", ""));
                let index = self.graphs.len() - 1;
                self.current = Some(index);
                index
            }
        };
        self.graphs[index].record(series, x_label, value);
    }

    fn flush(&mut self, format: OutputFormat) -> Result<()> {
        let rendered = self.render(format)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// CSV exporter: one row per sample.
pub struct CsvExporter;

impl CsvExporter {
    pub fn to_string(graphs: &[Graph]) -> std::result::Result<String, fmt::Error> {
        let mut output = String::new();
        writeln!(output, "graph,series,x,y,unit")?;
        for graph in graphs {
            for series in &graph.series {
                for (x, y) in &series.points {
                    writeln!(output, "{},{},{},{},{}", graph.id, series.label, x, y, graph.unit)?;
                }
            }
        }
        Ok(output)
    }
}

/// Markdown report: one table per graph, sizes as rows and series as columns.
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn to_string(graphs: &[Graph]) -> std::result::Result<String, fmt::Error> {
        let mut output = String::new();
        writeln!(output, "# Sequence container benchmarks")?;

        for graph in graphs {
            writeln!(output)?;
            writeln!(output, "## {}", graph.title)?;
            writeln!(output)?;
            writeln!(output, "Values in {}.", graph.unit)?;
            writeln!(output)?;

            write!(output, "| size |")?;
            for series in &graph.series {
                write!(output, " {} |", series.label)?;
            }
            writeln!(output)?;
            write!(output, "|------|")?;
            for _ in &graph.series {
                write!(output, "------|")?;
            }
            writeln!(output)?;

            for x in graph.x_labels() {
                write!(output, "| {} |", x)?;
                for series in &graph.series {
                    match graph.value(&series.label, x) {
                        Some(value) => write!(output, " {} |", value)?,
                        None => write!(output, " - |")?,
                    }
                }
                writeln!(output)?;
            }
        }
        Ok(output)
    }
}

/// Self-contained HTML page drawing every graph as a line chart.
pub struct GoogleChartsPage;

impl GoogleChartsPage {
    pub fn to_string(graphs: &[Graph]) -> std::result::Result<String, fmt::Error> {
        let mut output = String::new();
        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html>")?;
        writeln!(output, "<head>")?;
        writeln!(output, "<meta charset=\"utf-8\">")?;
        writeln!(output, "<title>Sequence container benchmarks</title>")?;
        writeln!(
            output,
            "<script type=\"text/javascript\" src=\"https://www.gstatic.com/charts/loader.js\"></script>"
        )?;
        writeln!(output, "<script type=\"text/javascript\">")?;
        writeln!(output, "google.charts.load('current', {{packages: ['corechart']}});")?;
        writeln!(output, "google.charts.setOnLoadCallback(drawCharts);")?;
        writeln!(output, "function drawCharts() {{")?;
        for graph in graphs {
            writeln!(output, "  draw_{}();", graph.id)?;
        }
        writeln!(output, "}}")?;

        for graph in graphs {
            Self::write_chart(&mut output, graph)?;
        }

        writeln!(output, "</script>")?;
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        for graph in graphs {
            writeln!(
                output,
                "<div id=\"{}\" style=\"width: 900px; height: 500px;\"></div>",
                graph.id
            )?;
        }
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;
        Ok(output)
    }

    fn write_chart(output: &mut String, graph: &Graph) -> fmt::Result {
        writeln!(output, "function draw_{}() {{", graph.id)?;
        writeln!(output, "  var data = google.visualization.arrayToDataTable([")?;

        write!(output, "    ['size'")?;
        for series in &graph.series {
            write!(output, ", {}", js_string(&series.label))?;
        }
        writeln!(output, "],")?;

        for x in graph.x_labels() {
            write!(output, "    [{}", js_string(x))?;
            for series in &graph.series {
                match graph.value(&series.label, x) {
                    Some(value) => write!(output, ", {}", value)?,
                    None => write!(output, ", null")?,
                }
            }
            writeln!(output, "],")?;
        }
        writeln!(output, "  ]);")?;

        writeln!(
            output,
            "  var options = {{title: {}, hAxis: {{title: 'size'}}, vAxis: {{title: {}}}, legend: {{position: 'right'}}}};",
            js_string(&graph.title),
            js_string(&graph.unit)
        )?;
        writeln!(
            output,
            "  new google.visualization.LineChart(document.getElementById('{}')).draw(data, options);",
            graph.id
        )?;
        writeln!(output, "}}")
    }
}

/// Quotes `s` as a single-quoted JavaScript literal safe inside a script tag.
fn js_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '<' => quoted.push_str("\\x3c"),
            '>' => quoted.push_str("\\x3e"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
