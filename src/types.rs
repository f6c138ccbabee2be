use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Tracking history of a single package as reported by the carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackingResult {
    /// Tracking code the carrier answered for
    pub numero: String,
    /// Carrier category label; error conditions start with "erro"
    pub categoria: String,
    /// Tracking events, most recent first
    pub eventos: Vec<Event>,
}

/// One checkpoint in a package's tracking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Creation timestamp reported by the carrier
    pub data: String,
    /// Event description
    pub descricao: String,
    /// Extra detail attached to the event
    pub detalhe: Option<String>,
    /// Kind of postal unit that registered the event
    pub local: String,
    /// City of the postal unit
    pub cidade: String,
    /// State of the postal unit
    pub uf: String,
    /// Postal code of the postal unit
    pub cep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackingCode {
    /// Generated or matched tracking code
    pub numero: Option<String>,
}

/// Search window around the tracking code fragment.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindParams {
    /// How many sequential codes to look behind
    #[serde(default)]
    pub previous: u32,
    /// How many sequential codes to look ahead
    #[serde(default = "default_next")]
    pub next: u32,
}

impl Default for FindParams {
    fn default() -> Self {
        Self {
            previous: 0,
            next: default_next(),
        }
    }
}

fn default_next() -> u32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
