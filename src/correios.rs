//! Client for the Correios tracking API.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::code::{self, TrackingNumber};
use crate::config::Config;
use crate::tracking::{is_error_category, TrackingClient, TrackingError};
use crate::types::{Event, TrackingResult};

const NOT_FOUND_CATEGORY: &str = "ERRO: Objeto não encontrado.";

/// Carrier tracking response (partial, only fields we need)
#[derive(Debug, Deserialize)]
struct RastroResponse {
    #[serde(default)]
    objetos: Vec<Objeto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Objeto {
    cod_objeto: Option<String>,
    tipo_postal: Option<TipoPostal>,
    mensagem: Option<String>,
    #[serde(default)]
    eventos: Vec<Evento>,
}

#[derive(Debug, Deserialize)]
struct TipoPostal {
    categoria: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Evento {
    #[serde(default)]
    dt_hr_criado: String,
    #[serde(default)]
    descricao: String,
    detalhe: Option<String>,
    unidade: Option<Unidade>,
}

#[derive(Debug, Default, Deserialize)]
struct Unidade {
    #[serde(default)]
    tipo: String,
    #[serde(default)]
    endereco: Endereco,
}

#[derive(Debug, Default, Deserialize)]
struct Endereco {
    #[serde(default)]
    cidade: String,
    #[serde(default)]
    uf: String,
    cep: Option<String>,
}

impl From<Evento> for Event {
    fn from(evento: Evento) -> Self {
        let unidade = evento.unidade.unwrap_or_default();
        Event {
            data: evento.dt_hr_criado,
            descricao: evento.descricao,
            detalhe: evento.detalhe,
            local: unidade.tipo,
            cidade: unidade.endereco.cidade,
            uf: unidade.endereco.uf,
            cep: unidade.endereco.cep,
        }
    }
}

fn into_tracking_result(code: &str, response: RastroResponse) -> TrackingResult {
    let Some(objeto) = response.objetos.into_iter().next() else {
        return TrackingResult {
            numero: code.to_string(),
            categoria: NOT_FOUND_CATEGORY.to_string(),
            eventos: Vec::new(),
        };
    };

    let categoria = match objeto.mensagem {
        Some(mensagem) if objeto.eventos.is_empty() => format!("ERRO: {}", mensagem),
        _ => objeto
            .tipo_postal
            .and_then(|tipo| tipo.categoria)
            .unwrap_or_default(),
    };

    TrackingResult {
        numero: objeto.cod_objeto.unwrap_or_else(|| code.to_string()),
        categoria,
        eventos: objeto.eventos.into_iter().map(Event::from).collect(),
    }
}

fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

fn delivered_to(result: &TrackingResult, postal_digits: &str) -> bool {
    result
        .eventos
        .iter()
        .filter_map(|evento| evento.cep.as_deref())
        .any(|cep| digits(cep) == postal_digits)
}

pub struct CorreiosClient {
    base_url: Url,
    http_client: Client,
}

impl CorreiosClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_timeout(
            &config.correios_api_url,
            Duration::from_secs(config.correios_timeout_secs),
        )
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid carrier API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Carrier API URL cannot take a path: {}", base_url);
        }

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// The code always travels as a single escaped path segment.
    fn track_url(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(code);
        }
        url
    }
}

#[async_trait]
impl TrackingClient for CorreiosClient {
    async fn track(&self, code: &str) -> Result<TrackingResult, TrackingError> {
        let url = self.track_url(code);
        debug!("Querying carrier: {}", url);

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TrackingError::Status { status, body });
        }

        let body: RastroResponse = response
            .json()
            .await
            .map_err(|e| TrackingError::Decode(e.to_string()))?;

        Ok(into_tracking_result(code, body))
    }

    async fn generate_valid_code(&self, partial: &str) -> Result<Option<String>, TrackingError> {
        Ok(code::generate_valid_code(partial))
    }

    async fn search_by_postal_code(
        &self,
        postal_code: &str,
        code: &str,
        previous: u32,
        next: u32,
    ) -> Result<Option<String>, TrackingError> {
        let postal_digits = digits(postal_code);
        let Some(origin) = TrackingNumber::parse(code) else {
            return Ok(None);
        };
        if postal_digits.is_empty() {
            return Ok(None);
        }

        for candidate in origin.window(previous, next) {
            let candidate = candidate.to_string();
            let result = self.track(&candidate).await?;
            if is_error_category(&result.categoria) {
                continue;
            }
            if delivered_to(&result, &postal_digits) {
                info!("Code {} matched postal code {}", candidate, postal_code);
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }
}
