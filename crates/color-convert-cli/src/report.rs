//! Diagnostic output.

use color_convert::TextDocument;
use serde_json::{Value, json};
use std::path::Path;

/// One `path:line:col: severity: message` line per diagnostic (1-based line and column).
pub fn render_human(path: &Path, doc: &TextDocument) -> String {
    let mut out = String::new();
    for diagnostic in doc.diagnostics() {
        let (line, column) = doc.line_column(diagnostic.range.start);
        out.push_str(&format!(
            "{}:{}:{}: {}: {}\n",
            path.display(),
            line + 1,
            column + 1,
            diagnostic.severity.as_str(),
            diagnostic.message
        ));
    }
    out
}

/// A `textDocument/publishDiagnostics` params object with UTF-16 positions.
pub fn render_json(uri: &str, doc: &TextDocument) -> Value {
    let position = |offset: usize| {
        let (line, character) = doc.utf16_position(offset);
        json!({ "line": line, "character": character })
    };

    let diagnostics = doc
        .diagnostics()
        .iter()
        .map(|diagnostic| {
            json!({
                "range": {
                    "start": position(diagnostic.range.start),
                    "end": position(diagnostic.range.end),
                },
                "severity": diagnostic.severity.lsp_value(),
                "code": diagnostic.code,
                "source": diagnostic.source,
                "message": diagnostic.message,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "uri": uri,
        "version": doc.version(),
        "diagnostics": diagnostics,
    })
}

/// `file://` URI for `path`, made absolute against the current directory.
pub fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let text = absolute.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");

    let mut uri = String::from(if text.starts_with('/') { "file://" } else { "file:///" });
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~/".contains(&byte) {
            uri.push(char::from(byte));
        } else {
            uri.push_str(&format!("%{byte:02X}"));
        }
    }
    uri
}
