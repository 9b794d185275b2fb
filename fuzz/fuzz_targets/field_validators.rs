#![no_main]
use fractal_validation::rpc::{parse_request, CreateMintPayload, SignedRequest};
use fractal_validation::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Validators must reject, never panic
    let _ = validate_string_length("field", data, MAX_DESCRIPTION_LENGTH);
    let _ = validate_metadata_size("metadata", data);
    let _ = parse_request::<SignedRequest<CreateMintPayload>>(data);

    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };

    let _ = validate_address(text);
    let _ = validate_title(text);
    let _ = validate_feed_url(text);

    if validate_hash(text).is_ok() {
        assert!(decode_hash(text).is_ok());
    }
    if validate_public_key(text).is_ok() {
        assert!(decode_public_key(text).is_ok());
    }

    let tags: Vec<&str> = text.split(',').collect();
    let _ = validate_tags(&tags);

    let sanitized = sanitize_query_param(text);
    assert!(sanitized.len() <= MAX_QUERY_PARAM_LENGTH);
    if text.len() <= MAX_QUERY_PARAM_LENGTH {
        assert_eq!(sanitize_query_param(&sanitized), sanitized);
    }
});
