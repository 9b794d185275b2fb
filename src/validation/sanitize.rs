//! Query parameter sanitization

use super::MAX_QUERY_PARAM_LENGTH;

/// Characters removed from query parameters wherever they appear
const STRIPPED_CHARS: [char; 4] = ['\n', '\r', '\t', '\0'];

/// Sanitize a raw query parameter
///
/// Removes newlines, carriage returns, tabs and NUL bytes, trims surrounding
/// whitespace, then caps the result at [`MAX_QUERY_PARAM_LENGTH`] bytes.
/// Never fails.
///
/// The cap counts bytes, not characters. When the cut would land inside a
/// multi-byte character the whole character is dropped, so the result may be
/// a few bytes shorter than the cap.
///
/// Trimming happens before the cut, so a truncated result can end in
/// whitespace. Inputs longer than the cap are therefore not idempotent.
pub fn sanitize_query_param(param: &str) -> String {
    let stripped: String = param.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let trimmed = stripped.trim();

    let mut end = trimmed.len().min(MAX_QUERY_PARAM_LENGTH);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }

    trimmed[..end].to_string()
}
