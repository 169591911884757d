//! Format selection and rendering for CLI output

use prodexportlib::{export_products, ExportOptions, FormatKind, Product};

/// Pick the output format.
///
/// An explicit `--format` wins; otherwise the output file's extension is
/// used, and stdout falls back to Markdown.
pub fn resolve_format(
    format: Option<&str>,
    output: Option<&str>,
) -> Result<FormatKind, prodexportlib::ExportError> {
    match (format, output) {
        (Some(id), _) => id.parse(),
        (None, Some(path)) => FormatKind::from_path(path),
        (None, None) => Ok(FormatKind::default()),
    }
}

/// Render products with the given options
pub fn render_table(products: &[Product], options: &ExportOptions) -> String {
    log::debug!(
        "rendering {} products as {} with {} extra columns",
        products.len(),
        options.format,
        options.extra_fields.len()
    );
    export_products(products, options)
}

/// One line per supported format: name and extension
pub fn format_list() -> String {
    FormatKind::ALL
        .iter()
        .map(|kind| format!("{:<10} .{}\n", kind.to_string(), kind.extension()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            resolve_format(Some("html"), Some("out.md")).unwrap(),
            FormatKind::Html
        );
    }

    #[test]
    fn test_format_from_output_extension() {
        assert_eq!(
            resolve_format(None, Some("out/table.htm")).unwrap(),
            FormatKind::Html
        );
    }

    #[test]
    fn test_stdout_defaults_to_markdown() {
        assert_eq!(resolve_format(None, None).unwrap(), FormatKind::Markdown);
    }

    #[test]
    fn test_unknown_output_extension() {
        assert!(resolve_format(None, Some("table.pdf")).is_err());
    }

    #[test]
    fn test_format_list() {
        let list = format_list();
        assert!(list.contains("markdown"));
        assert!(list.contains(".md"));
        assert!(list.contains(".html"));
        assert_eq!(list.lines().count(), 2);
    }
}
