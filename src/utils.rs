use reqwest::Url;

/// Parses the configured API root, making sure it ends in a slash so endpoint
/// names append to it instead of replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(format!("unsupported base URL '{}'", raw));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Builds `{base}{endpoint}?{query}` with percent-encoded query values.
pub fn endpoint_url(base: &Url, endpoint: &str, query: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    // Bases are validated by `parse_base_url`, so they always have path segments.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(endpoint);
    }
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    url
}
