//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{DomainId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::custom_domain::{CustomDomain, DnsInstructions};

/// Register domain request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomainRequest {
    #[serde(default)]
    pub domain: String,
}

/// Domain as returned to its owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub id: DomainId,
    pub domain: String,
    pub verified: bool,
    pub verify_token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomDomain> for DomainResponse {
    fn from(domain: CustomDomain) -> Self {
        Self {
            id: domain.domain_id,
            domain: domain.domain.as_str().to_string(),
            verified: domain.verified,
            verify_token: domain.verify_token.as_str().to_string(),
            user_id: domain.user_id,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

/// `{"type": "TXT", "name": …, "value": …}`
#[derive(Debug, Clone, Serialize)]
pub struct InstructionsResponse {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub name: String,
    pub value: String,
}

impl From<DnsInstructions> for InstructionsResponse {
    fn from(instructions: DnsInstructions) -> Self {
        Self {
            record_type: instructions.record_type,
            name: instructions.name,
            value: instructions.value,
        }
    }
}

/// `{"domain": …, "instructions": …}`
#[derive(Debug, Clone, Serialize)]
pub struct DomainWithInstructions {
    pub domain: DomainResponse,
    pub instructions: InstructionsResponse,
}

impl DomainWithInstructions {
    pub fn new(domain: CustomDomain, label: &str) -> Self {
        let instructions = InstructionsResponse::from(domain.instructions(label));
        Self {
            domain: DomainResponse::from(domain),
            instructions,
        }
    }
}

/// `{"domain": …}`
#[derive(Debug, Clone, Serialize)]
pub struct DomainEnvelope {
    pub domain: DomainResponse,
}

/// `{"domains": […]}`
#[derive(Debug, Clone, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainResponse>,
}

/// `{"message": …}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
