//! HTTP Handlers
//!
//! Every route sits behind the bearer gate; the caller is the owner.

use auth::{AuthUser, TokenCodec};
use axum::Json;
use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::ApiJson;
use kernel::id::DomainId;
use std::sync::Arc;

use crate::application::{
    DeleteDomainUseCase, DomainConfig, GetDomainUseCase, ListDomainsUseCase,
    RegisterDomainUseCase, VerifyDomainUseCase,
};
use crate::domain::repository::DomainRepository;
use crate::domain::resolver::TxtResolver;
use crate::error::{DomainError, DomainResult};
use crate::presentation::dto::{
    CreateDomainRequest, DomainEnvelope, DomainListResponse, DomainResponse,
    DomainWithInstructions, MessageResponse,
};

/// Shared state for domain handlers
#[derive(Clone)]
pub struct DomainAppState<R, D>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub resolver: Arc<D>,
    pub tokens: Arc<TokenCodec>,
    pub config: Arc<DomainConfig>,
}

impl<R, D> FromRef<DomainAppState<R, D>> for Arc<TokenCodec>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &DomainAppState<R, D>) -> Self {
        state.tokens.clone()
    }
}

fn parse_domain_id(raw: &str) -> DomainResult<DomainId> {
    raw.parse().map_err(|_| DomainError::InvalidId)
}

/// POST /api/admin/domains
pub async fn create<R, D>(
    State(state): State<DomainAppState<R, D>>,
    caller: AuthUser,
    ApiJson(req): ApiJson<CreateDomainRequest>,
) -> DomainResult<impl IntoResponse>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let domain = RegisterDomainUseCase::new(state.repo.clone())
        .execute(caller.user_id, &req.domain)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DomainWithInstructions::new(
            domain,
            &state.config.verification_label,
        )),
    ))
}

/// GET /api/admin/domains
pub async fn list<R, D>(
    State(state): State<DomainAppState<R, D>>,
    caller: AuthUser,
) -> DomainResult<Json<DomainListResponse>>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let domains = ListDomainsUseCase::new(state.repo.clone())
        .execute(&caller.user_id)
        .await?;

    Ok(Json(DomainListResponse {
        domains: domains.into_iter().map(DomainResponse::from).collect(),
    }))
}

/// GET /api/admin/domains/{id}
pub async fn get<R, D>(
    State(state): State<DomainAppState<R, D>>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> DomainResult<Json<DomainWithInstructions>>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let domain_id = parse_domain_id(&id)?;

    let domain = GetDomainUseCase::new(state.repo.clone())
        .execute(&domain_id, &caller.user_id)
        .await?;

    Ok(Json(DomainWithInstructions::new(
        domain,
        &state.config.verification_label,
    )))
}

/// DELETE /api/admin/domains/{id}
pub async fn delete<R, D>(
    State(state): State<DomainAppState<R, D>>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> DomainResult<Json<MessageResponse>>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let domain_id = parse_domain_id(&id)?;

    DeleteDomainUseCase::new(state.repo.clone())
        .execute(&domain_id, &caller.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Domain deleted successfully",
    }))
}

/// POST /api/admin/domains/{id}/verify
pub async fn verify<R, D>(
    State(state): State<DomainAppState<R, D>>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> DomainResult<Json<DomainEnvelope>>
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let domain_id = parse_domain_id(&id)?;

    let use_case = VerifyDomainUseCase::new(
        state.repo.clone(),
        state.resolver.clone(),
        state.config.clone(),
    );
    let domain = use_case.execute(&domain_id, &caller.user_id).await?;

    Ok(Json(DomainEnvelope {
        domain: DomainResponse::from(domain),
    }))
}
