//! Point accrual handlers.
//!
//! - `POST /api/points` - Award points for a purchase
//! - `GET /api/customers/{customer_id}/point-events` - List a customer's ledger records
//!
//! Both require bearer authentication.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::auth::AuthenticatedUser;
use crate::api::dto::{AddPointRequest, PointEventResponse};
use crate::api::error::ApiError;
use crate::application::{AddPointCommand, add_point};
use crate::domain::{CustomerId, EventLabel, Timestamp};
use crate::infrastructure::AppDependencies;

/// POST /api/points - Award points for a purchase.
///
/// # Request Body
///
/// ```json
/// { "customer_id": 1, "amount": 12000, "event": "purchase" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - non-positive customer id or invalid label
/// - `404 Not Found` - the customer does not exist
/// - `500 Internal Server Error` - the ledger write failed
///
/// # Response
///
/// - `201 Created` - the stored ledger record
pub async fn add_points(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<AddPointRequest>,
) -> Result<(StatusCode, Json<PointEventResponse>), ApiError> {
    let customer_id = CustomerId::create(request.customer_id)?;
    let label = request
        .event
        .as_deref()
        .map_or_else(|| Ok(EventLabel::purchase()), EventLabel::create)?;

    let command = AddPointCommand::new(customer_id, request.amount, label);
    let record = add_point(dependencies.ledger().as_ref(), &command, Timestamp::now()).await?;

    tracing::info!(
        record_id = record.id,
        user_id = user.id,
        "Point event recorded"
    );

    Ok((StatusCode::CREATED, Json(PointEventResponse::from(record))))
}

/// GET /api/customers/{customer_id}/point-events - List ledger records.
///
/// A customer without records yields an empty list.
///
/// # Errors
///
/// - `400 Bad Request` - non-positive customer id
/// - `500 Internal Server Error` - the ledger read failed
pub async fn point_history(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(customer_id): Path<i64>,
) -> Result<Json<Vec<PointEventResponse>>, ApiError> {
    let customer_id = CustomerId::create(customer_id)?;

    let records = dependencies.ledger().records_for(customer_id).await?;

    Ok(Json(
        records.into_iter().map(PointEventResponse::from).collect(),
    ))
}
