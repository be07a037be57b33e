//! Output formats for [`Document`]s.

use super::{Block, Document};
use crate::error::DeskError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub trait ExportSink: Send + Sync {
    fn extension(&self) -> &'static str;

    fn render(&self, document: &Document) -> String;

    /// Renders `document` into `dir/<file_stem>.<extension>`, creating `dir`
    /// if needed.
    fn export(&self, document: &Document, dir: &Path) -> Result<PathBuf, DeskError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.{}", document.file_stem, self.extension()));
        fs::write(&path, self.render(document))?;
        info!(path = %path.display(), "Document exported");
        Ok(path)
    }
}

/// Plain `.txt` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSink;

impl ExportSink for TextSink {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &Document) -> String {
        let width = document.title.chars().count().max(20);
        let mut lines = vec![document.title.clone(), "=".repeat(width)];

        for block in &document.blocks {
            match block {
                Block::Meta { label, value } | Block::Field { label, value } => {
                    lines.push(format!("{label}: {value}"))
                }
                Block::Section(heading) => {
                    lines.push(heading.clone());
                    lines.push("-".repeat(heading.chars().count()));
                }
                Block::Rule => lines.push("-".repeat(width)),
                Block::Blank => lines.push(String::new()),
                Block::Table { headers, rows } => {
                    for row in rows {
                        for (header, cell) in headers.iter().zip(row) {
                            lines.push(format!("{header}: {cell}"));
                        }
                        lines.push("-".repeat(width));
                    }
                }
            }
        }

        lines.push("=".repeat(width));
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Standalone HTML page with print styles that opens the print dialog when
/// loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintableSink;

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 24px; }
.header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 10px; margin-bottom: 20px; }
.fecha { text-align: right; color: #666; font-size: 0.9em; margin-bottom: 20px; }
.row { margin: 6px 0; }
.k { font-weight: bold; }
h2 { color: #333; margin-top: 24px; }
hr { border: none; border-top: 1px solid #ddd; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 10px; text-align: left; }
th { background-color: #4CAF50; color: white; }
tr:nth-child(even) { background-color: #f2f2f2; }";

impl ExportSink for PrintableSink {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, document: &Document) -> String {
        let title = escape(&document.title);
        let mut body = format!("<div class=\"header\"><h1>{title}</h1></div>\n");

        let meta: Vec<String> = document
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Meta { label, value } => Some(format!("{}: {}", escape(label), escape(value))),
                _ => None,
            })
            .collect();
        if !meta.is_empty() {
            body.push_str(&format!("<div class=\"fecha\">{}</div>\n", meta.join("<br>")));
        }

        for block in &document.blocks {
            match block {
                Block::Meta { .. } | Block::Blank => {}
                Block::Section(heading) => body.push_str(&format!("<h2>{}</h2>\n", escape(heading))),
                Block::Field { label, value } => body.push_str(&format!(
                    "<div class=\"row\"><span class=\"k\">{}:</span> {}</div>\n",
                    escape(label),
                    escape(value)
                )),
                Block::Rule => body.push_str("<hr>\n"),
                Block::Table { headers, rows } => {
                    body.push_str("<table>\n<thead><tr>");
                    for header in headers {
                        body.push_str(&format!("<th>{}</th>", escape(header)));
                    }
                    body.push_str("</tr></thead>\n<tbody>\n");
                    for row in rows {
                        body.push_str("<tr>");
                        for cell in row {
                            body.push_str(&format!("<td>{}</td>", escape(cell)));
                        }
                        body.push_str("</tr>\n");
                    }
                    body.push_str("</tbody>\n</table>\n");
                }
            }
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <style>\n{PRINT_STYLE}\n</style>\n</head>\n<body>\n{body}\
             <script>window.onload = () => {{ window.print(); }};</script>\n</body>\n</html>\n"
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::new("factura_4", "SRH - FACTURA #4")
            .meta("Generado", "01/05/2025, 10:00:00")
            .field("Cliente", "Ana <b>Ortiz</b> & Hijos")
            .rule()
            .field("Total", "$150.00")
    }

    #[test]
    fn text_layout() {
        let text = TextSink.render(&document());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SRH - FACTURA #4");
        assert_eq!(lines[1], "====================");
        assert_eq!(lines[2], "Generado: 01/05/2025, 10:00:00");
        assert_eq!(lines[3], "Cliente: Ana <b>Ortiz</b> & Hijos");
        assert_eq!(lines[4], "-".repeat(20));
        assert_eq!(lines.last().copied(), Some("===================="));
    }

    #[test]
    fn html_escapes_interpolated_text() {
        let html = PrintableSink.render(&document());
        assert!(html.contains("Ana &lt;b&gt;Ortiz&lt;/b&gt; &amp; Hijos"));
        assert!(!html.contains("<b>Ortiz"));
        assert!(html.contains("<title>SRH - FACTURA #4</title>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("<div class=\"fecha\">Generado: 01/05/2025, 10:00:00</div>"));
    }

    #[test]
    fn html_table_has_header_row() {
        let doc = Document::new("t", "T").table(&["Cliente", "Total"], vec![vec!["Ana".into(), "$1.00".into()]]);
        let html = PrintableSink.render(&doc);
        assert!(html.contains("<th>Cliente</th><th>Total</th>"));
        assert!(html.contains("<td>Ana</td><td>$1.00</td>"));
    }

    #[test]
    fn export_writes_named_file() {
        let dir = std::env::temp_dir().join(format!("srh-export-{}", std::process::id()));
        let path = TextSink.export(&document(), &dir).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("factura_4.txt"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("SRH - FACTURA #4\n"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
