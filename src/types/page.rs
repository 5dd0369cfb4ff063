use serde::Deserialize;

/// Envelope shared by every OpenAQ list endpoint. `meta` is ignored.
#[derive(Debug, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
}
