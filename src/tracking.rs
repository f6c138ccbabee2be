//! Seam between the HTTP facade and whatever answers tracking queries.
//!
//! The carrier reports failures as data: a lookup for an unknown code still
//! succeeds, but its category text starts with "erro". Translating that into
//! a transport-level error is the caller's job, helped by [`is_error_category`]
//! and [`not_found_detail`].

use async_trait::async_trait;
use thiserror::Error;

use crate::types::TrackingResult;

/// Faults raised while talking to the carrier.
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("carrier request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("carrier answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid carrier response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TrackingClient: Send + Sync {
    /// Fetch the tracking history of `code`.
    async fn track(&self, code: &str) -> Result<TrackingResult, TrackingError>;

    /// Complete `partial` with a valid check digit.
    async fn generate_valid_code(&self, partial: &str) -> Result<Option<String>, TrackingError>;

    /// Find a code near `code` whose package is bound to `postal_code`,
    /// looking `previous` codes behind and `next` codes ahead.
    async fn search_by_postal_code(
        &self,
        postal_code: &str,
        code: &str,
        previous: u32,
        next: u32,
    ) -> Result<Option<String>, TrackingError>;
}

pub fn is_error_category(categoria: &str) -> bool {
    categoria
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("erro"))
}

/// Message reported when a lookup yields nothing usable:
/// `"<category without trailing period>: <code>"`.
pub fn not_found_detail(result: &TrackingResult) -> String {
    let categoria = result
        .categoria
        .strip_suffix('.')
        .unwrap_or(&result.categoria);
    format!("{}: {}", categoria, result.numero)
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::sync::Mutex;

    /// Client answering from canned values and recording search calls.
    #[derive(Default)]
    pub struct StubClient {
        pub result: Option<TrackingResult>,
        pub generated: Option<String>,
        pub found: Option<String>,
        pub fail: bool,
        pub searches: Mutex<Vec<(String, String, u32, u32)>>,
    }

    impl StubClient {
        pub fn with_result(result: TrackingResult) -> Self {
            Self {
                result: Some(result),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl TrackingClient for StubClient {
        async fn track(&self, code: &str) -> Result<TrackingResult, TrackingError> {
            if self.fail {
                return Err(TrackingError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.result.clone().unwrap_or_else(|| TrackingResult {
                numero: code.to_string(),
                categoria: "ERRO: Objeto não encontrado na base de dados dos Correios.".to_string(),
                eventos: Vec::new(),
            }))
        }

        async fn generate_valid_code(
            &self,
            _partial: &str,
        ) -> Result<Option<String>, TrackingError> {
            Ok(self.generated.clone())
        }

        async fn search_by_postal_code(
            &self,
            postal_code: &str,
            code: &str,
            previous: u32,
            next: u32,
        ) -> Result<Option<String>, TrackingError> {
            self.searches.lock().unwrap().push((
                postal_code.to_string(),
                code.to_string(),
                previous,
                next,
            ));
            Ok(self.found.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(categoria: &str) -> TrackingResult {
        TrackingResult {
            numero: "AA123456789BR".to_string(),
            categoria: categoria.to_string(),
            eventos: Vec::new(),
        }
    }

    #[test]
    fn test_error_category_is_case_insensitive_prefix() {
        assert!(is_error_category("ERRO: Objeto não encontrado."));
        assert!(is_error_category("Erro"));
        assert!(is_error_category("erro interno"));
        assert!(!is_error_category("SEDEX"));
        assert!(!is_error_category("err"));
        assert!(!is_error_category(""));
        assert!(!is_error_category("Objeto com erro"));
    }

    #[test]
    fn test_error_category_with_multibyte_text() {
        assert!(!is_error_category("Ação"));
        assert!(!is_error_category("é"));
    }

    #[test]
    fn test_not_found_detail_strips_one_trailing_period() {
        assert_eq!(
            not_found_detail(&result("ERRO: Objeto não encontrado.")),
            "ERRO: Objeto não encontrado: AA123456789BR"
        );
        assert_eq!(
            not_found_detail(&result("Erro..")),
            "Erro.: AA123456789BR"
        );
        assert_eq!(not_found_detail(&result("PAC")), "PAC: AA123456789BR");
    }
}
