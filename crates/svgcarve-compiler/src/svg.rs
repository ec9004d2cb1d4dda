//! Normalized SVG document reader.
//!
//! Consumes the output of the external normalization step: an SVG whose
//! geometry lives entirely in `<path>` elements with resolved absolute
//! coordinates. This module extracts each path's data string plus the page
//! height needed for the Y-axis flip. It performs no shape or transform
//! flattening; a document that still needs either is the collaborator's
//! problem, not ours.

use regex::Regex;
use svgcarve_core::error::DocumentError;
use svgcarve_core::units::parse_svg_length;
use tracing::debug;

/// The pieces of a normalized SVG the pipeline consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Raw path-data strings (`d` attributes), in document order.
    pub path_data: Vec<String>,
    /// Page height in user units, for the document-to-machine Y flip.
    pub page_height: f64,
}

/// Read path data and page height out of a normalized SVG string.
pub fn read_document(content: &str) -> Result<SvgDocument, DocumentError> {
    if !content.contains("<svg") {
        return Err(DocumentError::MissingSvgElement);
    }

    let page_height = extract_page_height(content)?;
    let path_data = extract_path_data(content);
    debug!(
        paths = path_data.len(),
        page_height, "read normalized document"
    );

    Ok(SvgDocument {
        path_data,
        page_height,
    })
}

/// Page height from the viewBox, falling back to the height attribute.
fn extract_page_height(content: &str) -> Result<f64, DocumentError> {
    let re_viewbox =
        Regex::new(r#"viewBox\s*=\s*["']([^"']+)["']"#).expect("invalid viewbox regex");
    if let Some(caps) = re_viewbox.captures(content) {
        let viewbox_str = &caps[1];
        let parts: Vec<&str> = viewbox_str
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() >= 4 {
            let height: f64 =
                parts[3]
                    .parse()
                    .map_err(|_| DocumentError::MalformedDimension {
                        value: viewbox_str.to_string(),
                    })?;
            if !height.is_finite() || height <= 0.0 {
                return Err(DocumentError::MalformedDimension {
                    value: viewbox_str.to_string(),
                });
            }
            return Ok(height);
        }
    }

    // No viewBox: take the height attribute from the svg tag itself.
    if let Some(svg_start) = content.find("<svg") {
        if let Some(svg_end) = content[svg_start..].find('>') {
            let svg_tag = &content[svg_start..svg_start + svg_end];
            let re_height =
                Regex::new(r#"height\s*=\s*["']([^"']+)["']"#).expect("invalid height regex");
            if let Some(caps) = re_height.captures(svg_tag) {
                let height = parse_svg_length(&caps[1])?;
                if height <= 0.0 {
                    return Err(DocumentError::MalformedDimension {
                        value: caps[1].to_string(),
                    });
                }
                return Ok(height);
            }
        }
    }

    Err(DocumentError::MissingPageHeight)
}

/// All `d` attributes of `<path>` elements, in document order.
fn extract_path_data(content: &str) -> Vec<String> {
    let re_path = Regex::new(r#"<path\s+([^>]+)>"#).expect("invalid path regex");
    let re_d = Regex::new(r#"d\s*=\s*["']([^"']+)["']"#).expect("invalid d regex");

    let mut path_data = Vec::new();
    for cap in re_path.captures_iter(content) {
        let attrs = &cap[1];
        if let Some(d_cap) = re_d.captures(attrs) {
            path_data.push(d_cap[1].to_string());
        }
    }
    path_data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_paths_and_viewbox_height() {
        let svg = r#"<?xml version="1.0"?>
<svg viewBox="0 0 100 80" xmlns="http://www.w3.org/2000/svg">
  <path d="M 10 10 L 90 70"/>
  <path stroke="black" d="M 20 20 L 80 60"/>
</svg>"#;
        let doc = read_document(svg).unwrap();
        assert_eq!(doc.page_height, 80.0);
        assert_eq!(
            doc.path_data,
            vec!["M 10 10 L 90 70".to_string(), "M 20 20 L 80 60".to_string()]
        );
    }

    #[test]
    fn height_attribute_fallback() {
        let svg = r#"<svg width="210mm" height="297mm"><path d="M 0 0 L 1 1"/></svg>"#;
        let doc = read_document(svg).unwrap();
        assert!((doc.page_height - 297.0 * 96.0 / 25.4).abs() < 1e-9);
    }

    #[test]
    fn viewbox_wins_over_height() {
        let svg = r#"<svg viewBox="0 0 50 40" height="297mm"><path d="M 0 0 L 1 1"/></svg>"#;
        assert_eq!(read_document(svg).unwrap().page_height, 40.0);
    }

    #[test]
    fn missing_svg_element() {
        assert_eq!(
            read_document("<html></html>"),
            Err(DocumentError::MissingSvgElement)
        );
    }

    #[test]
    fn missing_page_height() {
        assert_eq!(
            read_document(r#"<svg><path d="M 0 0 L 1 1"/></svg>"#),
            Err(DocumentError::MissingPageHeight)
        );
    }

    #[test]
    fn malformed_viewbox_height() {
        let svg = r#"<svg viewBox="0 0 100 bogus"><path d="M 0 0 L 1 1"/></svg>"#;
        assert!(matches!(
            read_document(svg),
            Err(DocumentError::MalformedDimension { .. })
        ));
    }

    #[test]
    fn paths_without_d_are_skipped() {
        let svg = r#"<svg viewBox="0 0 10 10"><path stroke="red"/><path d="M 1 1 L 2 2"/></svg>"#;
        let doc = read_document(svg).unwrap();
        assert_eq!(doc.path_data.len(), 1);
    }
}
