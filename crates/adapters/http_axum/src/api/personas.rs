//! JSON REST handlers for people.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use garage_app::ports::{CarRepository, PersonRepository};
use garage_domain::error::{GarageError, ValidationError};
use garage_domain::id::PersonId;
use garage_domain::person::{NewPerson, Person};

use crate::api::MessageBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a person.
///
/// Fields are optional at the deserialization layer so that an absent field
/// produces the service's own 400 response instead of a rejection from the
/// JSON extractor.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    pub name: Option<String>,
    pub surname1: Option<String>,
    pub surname2: Option<String>,
    pub identity_number: Option<String>,
}

impl PersonRequest {
    fn into_draft(self) -> Result<NewPerson, ApiError> {
        NewPerson::from_parts(self.name, self.surname1, self.surname2, self.identity_number)
            .map_err(ApiError::from)
    }
}

/// Parse a path id, mapping failure into a JSON 400 rather than an
/// extractor rejection.
fn parse_id(id: &str) -> Result<PersonId, ApiError> {
    PersonId::from_str(id)
        .map_err(|_| ApiError::from(GarageError::from(ValidationError::InvalidId(id.to_string()))))
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Person>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Person>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/personas`
pub async fn list<PR, CR>(State(state): State<AppState<PR, CR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /api/personas/:id`
pub async fn get<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let person = state.person_service.get_person(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /api/personas`
pub async fn create<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Json(req): Json<PersonRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let draft = req.into_draft()?;
    let created = state.person_service.create_person(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/personas/:id`
pub async fn update<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(id): Path<String>,
    Json(req): Json<PersonRequest>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let draft = req.into_draft()?;
    let updated = state.person_service.update_person(id, draft).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/personas/:id`
pub async fn delete<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    state.person_service.delete_person(parse_id(&id)?).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody {
        message: "person deleted",
    })))
}
