//! Template object-name lookup candidates.

/// Ordered object-storage lookup candidates for a template binary.
///
/// Callers commonly address a template without its extension; the storage
/// adapter tries the exact name first, then the name with each recognized
/// template extension appended.
pub fn template_object_candidates(name: &str) -> Vec<String> {
    let mut candidates = vec![name.to_string()];
    for extension in [".jasper", ".jrxml"] {
        if !name.ends_with(extension) {
            candidates.push(format!("{name}{extension}"));
        }
    }
    candidates
}
