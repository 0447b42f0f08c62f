/// Maps arbitrary text to a restricted safe-text form usable as a
/// filename or identifier fragment.
pub struct TextSanitizer;

impl TextSanitizer {
    /// Strip characters unsafe for downstream use while keeping words
    /// separated by single spaces.
    ///
    /// Total over all inputs; an input with no safe characters yields an
    /// empty string. Idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
    pub fn sanitize(value: &str) -> String {
        value
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
