use std::path::{Path, PathBuf};

use lopdf::Document;
use serde::Serialize;
use tracing::info;

use super::DocumentError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PdfPage {
    pub page: u32,
    pub text: String,
    pub tables: Vec<serde_json::Value>,
}

/// Extract the text of every page, in page order, trimmed.
pub fn extract_pdf_text(path: &Path) -> Result<String, DocumentError> {
    let document = Document::load(path).map_err(|e| DocumentError::Pdf(e.to_string()))?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        return Ok(String::new());
    }

    let text = document
        .extract_text(&page_numbers)
        .map_err(|e| DocumentError::Pdf(e.to_string()))?;

    info!(pages = page_numbers.len(), chars = text.len(), "Extracted PDF text");
    Ok(text.trim().to_string())
}

/// Whole document reported as a single page with no tables.
pub async fn extract_pdf_pages(path: PathBuf) -> Result<Vec<PdfPage>, DocumentError> {
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&path))
        .await
        .map_err(|e| DocumentError::Pdf(e.to_string()))??;

    Ok(vec![PdfPage {
        page: 1,
        text,
        tables: Vec::new(),
    }])
}

/// Small generated documents for tests.
#[doc(hidden)]
pub mod fixtures {
    use std::io;

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a one-page PDF showing `text`.
    pub fn single_page_pdf(text: &str) -> io::Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
