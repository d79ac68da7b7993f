//! Route handlers, generic over the store and the resource.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::{DataBody, Greeting, MessageBody};
use super::error::ApiError;
use super::resource::{Mutable, Resource};
use super::Catalog;
use crate::catalog::Validate;
use crate::patch::Patch;
use crate::store::{RecordStore, RecordsExt};

type Body = Result<Json<Value>, JsonRejection>;

/// `GET /`
pub(super) async fn welcome() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello, Catalog!",
    })
}

/// Fallback for unknown paths.
pub(super) async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// `GET /{resource}`
pub(super) async fn list<S, M>(
    State(catalog): State<Arc<Catalog<S>>>,
) -> Result<Json<DataBody<Vec<M>>>, ApiError>
where
    S: RecordStore + 'static,
    M: Resource,
{
    let data = catalog.store().records::<M>().all()?;
    Ok(Json(DataBody { data }))
}

/// `GET /{resource}/:id`
pub(super) async fn get_one<S, M>(
    State(catalog): State<Arc<Catalog<S>>>,
    Path(id): Path<String>,
) -> Result<Json<DataBody<M>>, ApiError>
where
    S: RecordStore + 'static,
    M: Resource,
{
    let id = parse_id::<M>(&id)?;
    let data = catalog
        .store()
        .records::<M>()
        .get(id)?
        .ok_or(ApiError::NotFound(M::NOT_FOUND))?;
    Ok(Json(DataBody { data }))
}

/// `POST /{resource}`
pub(super) async fn create<S, M>(
    State(catalog): State<Arc<Catalog<S>>>,
    body: Body,
) -> Result<(StatusCode, Json<MessageBody<M>>), ApiError>
where
    S: RecordStore + 'static,
    M: Resource,
{
    let new: M::New = decode::<M, _>(body)?;
    if let Err(err) = new.validate() {
        warn!(table = M::TABLE, error = %err, "create rejected");
        return Err(ApiError::Validation(M::INVALID));
    }

    let data = catalog.store().records::<M>().insert(&new)?;
    debug!(table = M::TABLE, id = data.id(), "created");
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: M::CREATED,
            data,
        }),
    ))
}

/// `PATCH /{resource}/:id`
pub(super) async fn update<S, M>(
    State(catalog): State<Arc<Catalog<S>>>,
    Path(id): Path<String>,
    body: Body,
) -> Result<Json<MessageBody<M>>, ApiError>
where
    S: RecordStore + 'static,
    M: Mutable,
{
    let id = parse_id::<M>(&id)?;
    let raw = object_body::<M>(body)?;

    let nulls = <M::Patch as Patch>::null_violations(&raw);
    if !nulls.is_empty() {
        warn!(table = M::TABLE, fields = ?nulls, "null for a required-value field");
        return Err(ApiError::Validation(M::INVALID));
    }

    let patch: M::Patch = from_value::<M, _>(raw)?;
    let data = catalog
        .store()
        .records::<M>()
        .patch(id, &patch)?
        .ok_or(ApiError::NotFound(M::NOT_FOUND))?;

    Ok(Json(MessageBody {
        message: M::UPDATED,
        data,
    }))
}

/// `DELETE /{resource}/:id`
pub(super) async fn remove<S, M>(
    State(catalog): State<Arc<Catalog<S>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody<M>>, ApiError>
where
    S: RecordStore + 'static,
    M: Mutable,
{
    let id = parse_id::<M>(&id)?;
    let data = catalog
        .store()
        .records::<M>()
        .delete(id)?
        .ok_or(ApiError::NotFound(M::NOT_FOUND))?;

    Ok(Json(MessageBody {
        message: M::DELETED,
        data,
    }))
}

/// A non-numeric id can never match a record.
fn parse_id<M: Resource>(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(M::NOT_FOUND))
}

/// Unwrap the JSON body and require a top-level object.
fn object_body<M: Resource>(body: Body) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) if value.is_object() => Ok(value),
        Ok(_) => {
            warn!(table = M::TABLE, "body is not a JSON object");
            Err(ApiError::Validation(M::INVALID))
        }
        Err(rejection) => {
            warn!(table = M::TABLE, error = %rejection, "unreadable JSON body");
            Err(ApiError::Validation(M::INVALID))
        }
    }
}

fn from_value<M: Resource, T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| {
        warn!(table = M::TABLE, error = %err, "body failed to decode");
        ApiError::Validation(M::INVALID)
    })
}

fn decode<M: Resource, T: DeserializeOwned>(body: Body) -> Result<T, ApiError> {
    from_value::<M, T>(object_body::<M>(body)?)
}
