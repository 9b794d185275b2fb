//! Free-text field checks: titles, descriptions, feed URLs, tags, metadata
//!
//! Lengths are counted in Unicode code points, except metadata which is
//! capped in bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ValidationError, ValidationResult};
use super::{
    MAX_DESCRIPTION_LENGTH, MAX_FEED_URL_LENGTH, MAX_METADATA_SIZE, MAX_TAG_COUNT,
    MAX_TAG_LENGTH, MAX_TITLE_LENGTH,
};
use crate::utils::ensure_with;

/// Safe characters: ASCII letters, digits, ASCII whitespace and `- _ . , ! ? ( )`
static SAFE_STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\t\n\x0C\r \-_.,!?()]+$").expect("valid safe string regex")
});

fn is_safe_string(value: &str) -> bool {
    SAFE_STRING_REGEX.is_match(value)
}

/// Validate string length with a custom limit
///
/// Accepts `&str` or raw bytes. Raw bytes are first checked to be UTF-8,
/// then the code points are counted.
pub fn validate_string_length<T>(field: &str, value: &T, max_length: usize) -> ValidationResult<()>
where
    T: AsRef<[u8]> + ?Sized,
{
    let text = std::str::from_utf8(value.as_ref())
        .map_err(|_| ValidationError::InvalidUtf8(field.to_string()))?;

    ensure_with(text.chars().count() <= max_length, || {
        ValidationError::TooLong {
            field: field.to_string(),
            max: max_length,
        }
    })
}

/// Validate a mint or offer title
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() {
        return Err(ValidationError::Required("title"));
    }

    validate_string_length("title", title, MAX_TITLE_LENGTH)?;

    if !is_safe_string(title) {
        return Err(ValidationError::UnsafeCharacters("title".to_string()));
    }

    Ok(())
}

/// Validate a description (any UTF-8 text within the length cap)
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::Required("description"));
    }

    validate_string_length("description", description, MAX_DESCRIPTION_LENGTH)
}

/// Validate an optional feed URL
///
/// An empty URL is accepted. Otherwise only the length and the
/// `http://`/`https://` prefix are checked.
pub fn validate_feed_url(feed_url: &str) -> ValidationResult<()> {
    if feed_url.is_empty() {
        return Ok(());
    }

    validate_string_length("feed_url", feed_url, MAX_FEED_URL_LENGTH)?;

    if !feed_url.starts_with("http://") && !feed_url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl("feed_url"));
    }

    Ok(())
}

/// Validate a tag list
///
/// Errors name the offending tag by its 1-based position.
pub fn validate_tags<S>(tags: &[S]) -> ValidationResult<()>
where
    S: AsRef<str>,
{
    if tags.len() > MAX_TAG_COUNT {
        return Err(ValidationError::TooManyTags { max: MAX_TAG_COUNT });
    }

    for (i, tag) in tags.iter().enumerate() {
        let tag = tag.as_ref();
        let position = i + 1;

        if tag.is_empty() {
            return Err(ValidationError::EmptyTag(position));
        }

        let field = format!("tag {}", position);
        validate_string_length(&field, tag, MAX_TAG_LENGTH)?;

        if !is_safe_string(tag) {
            return Err(ValidationError::UnsafeCharacters(field));
        }
    }

    Ok(())
}

/// Validate the size of a serialized metadata payload
pub fn validate_metadata_size(field: &str, data: &[u8]) -> ValidationResult<()> {
    ensure_with(data.len() <= MAX_METADATA_SIZE, || ValidationError::TooLarge {
        field: field.to_string(),
        max: MAX_METADATA_SIZE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_counts_code_points() {
        // 3 code points, 9 bytes
        assert!(validate_string_length("name", "日本語", 3).is_ok());
        assert!(validate_string_length("name", "日本語", 2).is_err());
    }

    #[test]
    fn test_string_length_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x66, 0x6f, 0xff, 0x6f];
        let err = validate_string_length("name", bytes, 10).unwrap_err();
        assert_eq!(err, ValidationError::InvalidUtf8("name".to_string()));
        assert_eq!(err.to_string(), "name contains invalid UTF-8 characters");
    }

    #[test]
    fn test_title() {
        assert!(validate_title("My Test Token").is_ok());
        assert!(validate_title("Token-2024_v1.0!").is_ok());
        assert!(validate_title("What? (really), yes.").is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH)).is_ok());

        assert_eq!(
            validate_title("").unwrap_err(),
            ValidationError::Required("title")
        );
        assert_eq!(
            validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).unwrap_err(),
            ValidationError::TooLong {
                field: "title".to_string(),
                max: MAX_TITLE_LENGTH
            }
        );
        assert_eq!(
            validate_title("My Token <script>").unwrap_err().to_string(),
            "title contains invalid characters"
        );
    }

    #[test]
    fn test_title_rejects_non_ascii() {
        assert!(validate_title("Café").is_err());
        assert!(validate_title("a/b").is_err());
        // Non-ASCII whitespace is not in the safe set
        assert!(validate_title("a\u{00a0}b").is_err());
    }

    #[test]
    fn test_description() {
        assert!(validate_description("Any text <b>goes</b> here, ünïcödé too").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(&"é".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
        assert!(validate_description(&"é".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_feed_url() {
        assert!(validate_feed_url("").is_ok());
        assert!(validate_feed_url("https://example.com/feed").is_ok());
        assert!(validate_feed_url("http://example.com").is_ok());
        assert_eq!(
            validate_feed_url("ftp://example.com").unwrap_err(),
            ValidationError::InvalidUrl("feed_url")
        );

        let long = format!("https://{}", "a".repeat(MAX_FEED_URL_LENGTH));
        assert!(matches!(
            validate_feed_url(&long).unwrap_err(),
            ValidationError::TooLong { .. }
        ));
    }

    #[test]
    fn test_tags() {
        assert!(validate_tags(&["token", "test", "demo"]).is_ok());
        assert!(validate_tags::<String>(&[]).is_ok());

        let many = vec!["tag"; MAX_TAG_COUNT + 1];
        assert_eq!(
            validate_tags(&many).unwrap_err(),
            ValidationError::TooManyTags { max: MAX_TAG_COUNT }
        );

        assert_eq!(
            validate_tags(&["valid", "", "tags"]).unwrap_err(),
            ValidationError::EmptyTag(2)
        );

        let long = "a".repeat(MAX_TAG_LENGTH + 1);
        assert_eq!(
            validate_tags(&[long.as_str()]).unwrap_err().to_string(),
            "tag 1 exceeds maximum length of 50 characters"
        );

        assert_eq!(
            validate_tags(&["valid", "tag<script>", "safe"]).unwrap_err(),
            ValidationError::UnsafeCharacters("tag 2".to_string())
        );
    }

    #[test]
    fn test_metadata_size() {
        assert!(validate_metadata_size("metadata", &[]).is_ok());
        assert!(validate_metadata_size("metadata", &vec![b'x'; MAX_METADATA_SIZE]).is_ok());
        assert_eq!(
            validate_metadata_size("metadata", &vec![b'x'; MAX_METADATA_SIZE + 1])
                .unwrap_err()
                .to_string(),
            "metadata exceeds maximum size of 10000 bytes"
        );
    }
}
