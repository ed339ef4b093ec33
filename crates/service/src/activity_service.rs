use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use tracing::info;
use uuid::Uuid;

use common::pagination::ListPage;
use models::activity::{self, ActivityCreate};

use crate::errors::ServiceError;

/// Optional predicates for `GET /api/activities`.
#[derive(Debug, Default, Clone)]
pub struct ActivityFilters {
    pub pet_id: Option<String>,
    pub kind: Option<String>,
    /// inclusive lower bound on the activity timestamp
    pub from: Option<DateTime<Utc>>,
    /// exclusive upper bound on the activity timestamp
    pub to: Option<DateTime<Utc>>,
}

impl ActivityFilters {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(kind) = &self.kind {
            activity::validate_type(kind)?;
        }
        Ok(())
    }
}

/// Record an activity. Activities are immutable once created; there is no
/// update operation on purpose.
pub async fn create_activity(
    db: &DatabaseConnection,
    input: ActivityCreate,
) -> Result<activity::Model, ServiceError> {
    input.validate()?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let am = activity::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        pet_id: Set(input.pet_id),
        kind: Set(input.kind),
        timestamp: Set(input.timestamp.into()),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::storage("activity", "create", None, e))?;
    info!(id = %created.id, pet_id = %created.pet_id, "created activity");
    Ok(created)
}

/// Point lookup by id.
pub async fn get_activity(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<activity::Model>, ServiceError> {
    activity::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::storage("activity", "get", Some(id), e))
}

/// Build the list select; see `pet_service::list_query` for the contract.
fn list_query(filters: &ActivityFilters, page: ListPage) -> Select<activity::Entity> {
    let mut query = activity::Entity::find();
    if let Some(pet_id) = &filters.pet_id {
        query = query.filter(activity::Column::PetId.eq(pet_id.as_str()));
    }
    if let Some(kind) = &filters.kind {
        query = query.filter(activity::Column::Kind.eq(kind.as_str()));
    }
    if let Some(from) = filters.from {
        query = query.filter(activity::Column::Timestamp.gte(from));
    }
    if let Some(to) = filters.to {
        query = query.filter(activity::Column::Timestamp.lt(to));
    }
    query
        .order_by_desc(activity::Column::CreatedAt)
        .order_by_asc(activity::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
}

/// Filtered, paginated list, newest first with a stable id tie-break.
pub async fn list_activities(
    db: &DatabaseConnection,
    filters: &ActivityFilters,
    page: ListPage,
) -> Result<Vec<activity::Model>, ServiceError> {
    filters.validate()?;
    list_query(filters, page)
        .all(db)
        .await
        .map_err(|e| ServiceError::storage("activity", "list", None, e))
}

/// Hard delete. Deleting a missing id is NotFound, including repeat deletes.
pub async fn delete_activity(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = activity::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::storage("activity", "delete", Some(id), e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("activity", id));
    }
    info!(id, "deleted activity");
    Ok(())
}
