//! Small emission helpers shared by the renderer and the emitter.

/// Wrap a formatted description as a doc block, or return an empty string
/// when there is nothing to say after trimming.
pub fn doc_block(description: &str) -> String {
    if description.trim().is_empty() {
        String::new()
    } else {
        format!("/**\n{description}\n*/")
    }
}

/// Prefix every line of a description with ` * ` doc-comment decoration.
pub fn doc_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                " *".to_string()
            } else {
                format!(" * {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Join names with `, ` for a single-line import list.
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
