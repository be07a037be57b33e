//! # Export
//!
//! Documents built from data the pages already hold, written out through an
//! [`ExportSink`]. Renderers are pure: they take the row or report plus the
//! generation time and return a [`Document`]. The sink decides the format.
//!
//! ```rust,ignore
//! let doc = export::payment_receipt(&view, Local::now().naive_local());
//! let path = PrintableSink.export(&doc, &config.export.out_dir)?;
//! ```

pub mod invoice;
pub mod payment;
pub mod report;
pub mod sink;

pub use invoice::invoice_sheet;
pub use payment::payment_receipt;
pub use report::report_document;
pub use sink::{ExportSink, PrintableSink, TextSink};

use chrono::NaiveDateTime;

/// Format-independent content of an exported document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// File name without extension.
    pub file_stem: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Small print under the title, e.g. the generation time.
    Meta { label: String, value: String },
    Section(String),
    Field { label: String, value: String },
    Rule,
    Blank,
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
}

impl Document {
    pub fn new(file_stem: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn meta(mut self, label: &str, value: impl ToString) -> Self {
        self.blocks.push(Block::Meta {
            label: label.to_owned(),
            value: value.to_string(),
        });
        self
    }

    pub fn section(mut self, heading: &str) -> Self {
        self.blocks.push(Block::Section(heading.to_owned()));
        self
    }

    pub fn field(mut self, label: &str, value: impl ToString) -> Self {
        self.blocks.push(Block::Field {
            label: label.to_owned(),
            value: value.to_string(),
        });
        self
    }

    pub fn rule(mut self) -> Self {
        self.blocks.push(Block::Rule);
        self
    }

    pub fn blank(mut self) -> Self {
        self.blocks.push(Block::Blank);
        self
    }

    pub fn table(mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        self.blocks.push(Block::Table {
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            rows,
        });
        self
    }
}

/// `$1234.50`
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Generation stamp shown inside documents.
pub fn stamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Generation stamp used in file names.
pub fn file_stamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}
