use serde::Deserialize;

use agrireg_core::ProducerId;
use agrireg_producers::{CreateProducerRequest, UpdateProfileRequest};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /api/producers` body. Missing fields read as empty strings.
#[derive(Debug, Deserialize)]
pub struct CreateProducerBody {
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub name: String,
}

impl From<CreateProducerBody> for CreateProducerRequest {
    fn from(body: CreateProducerBody) -> Self {
        Self {
            document: body.document,
            name: body.name,
        }
    }
}

/// `PUT /api/producers/:id` body.
#[derive(Debug, Deserialize)]
pub struct UpdateProducerBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub document: Option<String>,
}

impl UpdateProducerBody {
    pub fn into_request(self, id: ProducerId) -> UpdateProfileRequest {
        UpdateProfileRequest {
            id,
            name: self.name,
            country: self.country,
            document: self.document,
        }
    }
}

/// Query of `GET /api/producers`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProducersQuery {
    pub document: Option<String>,
}
