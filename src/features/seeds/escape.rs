// Elixir quoting rules for the values we splice into the seed template.
// Backslashes go first so the escapes added afterwards are not doubled.

/// Escapes text placed inside a `"""` heredoc.
pub fn escape_heredoc(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("\"\"\"", "\\\"\\\"\\\"")
        .replace("#{", "\\#{")
}

/// Escapes text placed inside a `"..."` string literal.
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("#{", "\\#{")
}

/// Flattens text onto a single line so it can follow a `#` comment marker.
pub fn comment_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
