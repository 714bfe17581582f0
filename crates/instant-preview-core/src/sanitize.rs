//! Filename sanitizing for export destinations.

/// Characters rejected by at least one supported filesystem.
const ILLEGAL_FILE_NAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replace every character that is illegal in a file name with `-`.
///
/// ```
/// use instant_preview_core::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("a/b:c\"d"), "a-b-c-d");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILE_NAME_CHARS.contains(&c) {
                '-'
            } else {
                c
            }
        })
        .collect()
}
