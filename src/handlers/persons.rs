use crate::dtos::{CreatePersonRequest, PersonListResponse, PersonResponse, UpdatePersonRequest};
use crate::error::AppError;
use crate::models::Person;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};

/// Listing is capped; there is no pagination cursor.
const LIST_LIMIT: i64 = 100;

fn parse_person_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Malformed person id: {}", id)))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<impl IntoResponse, AppError> {
    let person = Person::new(request.name, request.occupation, request.address);

    state
        .db
        .people()
        .insert_one(&person, None)
        .await
        .map_err(|e| {
            tracing::error!(person_id = %person.id, "Failed to insert person: {}", e);
            AppError::from(e)
        })?;

    metrics::counter!("persons_created_total").increment(1);
    tracing::info!(person_id = %person.id, "Person created");

    Ok(Json(PersonResponse::from(person)))
}

pub async fn list_persons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder().limit(LIST_LIMIT).build();

    let mut cursor = state
        .db
        .people()
        .find(doc! {}, find_options)
        .await
        .map_err(AppError::from)?;

    let mut persons = Vec::new();
    while let Some(person) = cursor.try_next().await.map_err(AppError::from)? {
        persons.push(PersonResponse::from(person));
    }

    Ok(Json(PersonListResponse { persons }))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_person_id(&person_id)?;

    let person = state
        .db
        .people()
        .find_one(doc! { "_id": id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Person not found")))?;

    Ok(Json(PersonResponse::from(person)))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_person_id(&person_id)?;

    // A single delete doubles as the existence check: zero deletions
    // means the id had no matching document.
    let result = state
        .db
        .people()
        .delete_one(doc! { "_id": id }, None)
        .await
        .map_err(AppError::from)?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Person not found")));
    }

    metrics::counter!("persons_deleted_total").increment(1);
    tracing::info!(person_id = %person_id, "Person deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_person_id(&person_id)?;

    // Nothing to change: degrade to a plain fetch so the caller still
    // gets the current record (or a 404).
    if request.is_empty() {
        let person = state
            .db
            .people()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Person not found")))?;
        return Ok(Json(PersonResponse::from(person)));
    }

    let mut set_doc = Document::new();
    if let Some(name) = request.name {
        set_doc.insert("name", name);
    }
    if let Some(occupation) = request.occupation {
        set_doc.insert("occupation", occupation);
    }
    if let Some(address) = request.address {
        set_doc.insert("address", address);
    }

    // One atomic update-if-exists; no match is the not-found signal.
    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    let person = state
        .db
        .people()
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_doc }, options)
        .await
        .map_err(|e| {
            tracing::error!(person_id = %person_id, "Failed to update person: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Person not found")))?;

    metrics::counter!("persons_updated_total").increment(1);
    tracing::info!(person_id = %person_id, "Person updated");

    Ok(Json(PersonResponse::from(person)))
}
