/// Lowercases text, taking the ASCII fast path when possible.
#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    lowercase_text_if_needed(value).unwrap_or_else(|| value.to_owned())
}

/// Returns the lowercase form of `value`, or `None` when it is already lowercase.
///
/// Non-ASCII text goes through [`str::to_lowercase`], which handles titlecase
/// letters and the context-dependent Greek final sigma.
pub(crate) fn lowercase_text_if_needed(value: &str) -> Option<String> {
    if value.is_ascii() {
        return if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Some(value.to_ascii_lowercase())
        } else {
            None
        };
    }

    let lowered = value.to_lowercase();
    (lowered != value).then_some(lowered)
}

/// Byte strings only know ASCII case; bytes outside `A-Z` are kept as-is.
pub(crate) fn lowercase_bytes_if_needed(value: &[u8]) -> Option<Vec<u8>> {
    let first_upper = value.iter().position(u8::is_ascii_uppercase)?;

    let mut lowered = Vec::with_capacity(value.len());
    lowered.extend_from_slice(&value[..first_upper]);
    lowered.extend(value[first_upper..].iter().map(u8::to_ascii_lowercase));
    Some(lowered)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
