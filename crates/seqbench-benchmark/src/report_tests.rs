use super::*;

fn sample_report() -> GraphReport<Vec<u8>> {
    let mut report = GraphReport::new(Vec::new());
    report.declare_graph("fill_back___Small", "fill_back - Small", "us");
    report.record_sample("vector_pre", "100000", 40);
    report.record_sample("vector_pre", "200000", 80);
    report.record_sample("vector", "100000", 90);
    report.declare_graph("sort___Small", "sort - Small", "ms");
    report.record_sample("list", "100000", 12);
    report
}

#[test]
fn test_graphs_keep_declaration_order() {
    let report = sample_report();
    let ids: Vec<&str> = report.graphs().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["fill_back___Small", "sort___Small"]);

    let fill = &report.graphs()[0];
    assert_eq!(fill.x_labels(), ["100000", "200000"]);
    assert_eq!(fill.value("vector_pre", "200000"), Some(80));
    assert_eq!(fill.value("vector", "200000"), None);
}

#[test]
fn test_redeclared_id_reuses_graph() {
    let mut report = sample_report();
    report.declare_graph("fill_back___Small", "fill_back - Small", "us");
    report.record_sample("vector", "200000", 95);

    assert_eq!(report.graphs().len(), 2);
    assert_eq!(report.graphs()[0].value("vector", "200000"), Some(95));
}

#[test]
fn test_sample_without_graph_is_kept() {
    let mut report = GraphReport::new(Vec::new());
    report.record_sample("deque", "10", 1);

    assert_eq!(report.graphs().len(), 1);
    assert_eq!(report.graphs()[0].value("deque", "10"), Some(1));
}

#[test]
fn test_csv_rows() {
    let csv = sample_report().render(OutputFormat::Csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "graph,series,x,y,unit",
            "fill_back___Small,vector_pre,100000,40,us",
            "fill_back___Small,vector_pre,200000,80,us",
            "fill_back___Small,vector,100000,90,us",
            "sort___Small,list,100000,12,ms",
        ]
    );
}

#[test]
fn test_markdown_tables() {
    let md = sample_report().render(OutputFormat::Markdown).unwrap();
    assert!(md.contains("## fill_back - Small"));
    assert!(md.contains("| size | vector_pre | vector |"));
    assert!(md.contains("| 100000 | 40 | 90 |"));
    assert!(md.contains("| 200000 | 80 | - |"));
    assert!(md.contains("Values in ms."));
}

#[test]
fn test_google_page() {
    let html = sample_report().render(OutputFormat::Google).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("draw_fill_back___Small();"));
    assert!(html.contains("['size', 'vector_pre', 'vector'],"));
    assert!(html.contains("['200000', 80, null],"));
    assert!(html.contains("<div id=\"sort___Small\""));
}

#[test]
fn test_js_string_escapes() {
    assert_eq!(js_string("a'b"), "'a\\'b'");
    assert_eq!(js_string("NonTrivialString<Movable>"), "'NonTrivialString\\x3cMovable\\x3e'");
}

#[test]
fn test_flush_writes_rendering() {
    let mut report = sample_report();
    let expected = report.render(OutputFormat::Markdown).unwrap();
    report.flush(OutputFormat::Markdown).unwrap();

    assert_eq!(String::from_utf8(report.into_writer()).unwrap(), expected);
}
