/// Strip the API key from an endpoint URL before it reaches a log line.
/// Only a parameter actually named `key` is masked; everything after it up
/// to the next `&` is replaced.
pub fn redact_api_key(endpoint: &str) -> String {
    for marker in ["?key=", "&key="] {
        if let Some((prefix, rest)) = endpoint.split_once(marker) {
            let tail = rest
                .split_once('&')
                .map(|(_, tail)| format!("&{tail}"))
                .unwrap_or_default();
            return format!("{prefix}{marker}<redacted>{tail}");
        }
    }
    endpoint.to_string()
}

#[cfg(test)]
mod tests {
    use super::redact_api_key;

    #[test]
    fn replaces_the_key_parameter() {
        let url = "https://example.com/v1beta/models/m:generateContent?key=secret123";
        assert_eq!(
            redact_api_key(url),
            "https://example.com/v1beta/models/m:generateContent?key=<redacted>"
        );
    }

    #[test]
    fn preserves_parameters_after_the_key() {
        let url = "https://example.com/path?key=secret&alt=json";
        assert_eq!(
            redact_api_key(url),
            "https://example.com/path?key=<redacted>&alt=json"
        );
    }

    #[test]
    fn redacts_the_key_when_it_is_not_the_first_parameter() {
        let url = "https://example.com/path?alt=json&key=secret";
        assert_eq!(
            redact_api_key(url),
            "https://example.com/path?alt=json&key=<redacted>"
        );
    }

    #[test]
    fn leaves_lookalike_parameter_names_untouched() {
        let url = "https://example.com/path?apikey=secret&monkey=banana";
        assert_eq!(redact_api_key(url), url);
    }

    #[test]
    fn masks_only_the_key_among_lookalikes() {
        let url = "https://example.com/path?monkey=banana&key=secret&alt=json";
        assert_eq!(
            redact_api_key(url),
            "https://example.com/path?monkey=banana&key=<redacted>&alt=json"
        );
    }

    #[test]
    fn leaves_urls_without_a_key_untouched() {
        let url = "https://example.com/path?alt=json";
        assert_eq!(redact_api_key(url), url);
    }
}
