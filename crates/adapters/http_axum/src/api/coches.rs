//! JSON REST handlers for cars.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use garage_app::ports::{CarRepository, PersonRepository};
use garage_domain::car::Car;
use garage_domain::id::Plate;

use crate::api::MessageBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a car.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub horsepower: Option<i64>,
    pub owner_id: Option<i64>,
}

/// Request body for replacing a car's mutable fields; the plate comes from
/// the path and never changes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub horsepower: Option<i64>,
    pub owner_id: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Car>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Car>),
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
    Ok(Json<Car>),
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

/// `GET /api/coches`
pub async fn list<PR, CR>(State(state): State<AppState<PR, CR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let cars = state.car_service.list_cars().await?;
    Ok(ListResponse::Ok(Json(cars)))
}

/// `POST /api/coches`
pub async fn create<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Json(req): Json<CreateCarRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let car = Car::from_parts(req.plate, req.brand, req.model, req.horsepower, req.owner_id)?;
    let created = state.car_service.create_car(car).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/coches/:plate`
///
/// Replies 200 even when the plate matches no row; only the person endpoints
/// report 404 on zero affected rows.
pub async fn update<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(plate): Path<String>,
    Json(req): Json<UpdateCarRequest>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    let car = Car::from_parts(
        Some(plate),
        req.brand,
        req.model,
        req.horsepower,
        req.owner_id,
    )?;
    let updated = state.car_service.update_car(car).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/coches/:plate`
///
/// Replies 200 whether or not a row matched the plate.
pub async fn delete<PR, CR>(
    State(state): State<AppState<PR, CR>>,
    Path(plate): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    state.car_service.delete_car(Plate::new(plate)).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody {
        message: "car deleted",
    })))
}
