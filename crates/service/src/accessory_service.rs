use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use tracing::info;
use uuid::Uuid;

use common::pagination::ListPage;
use models::accessory::{self, AccessoryCreate, AccessoryUpdate, LOW_STOCK_THRESHOLD};

use crate::errors::ServiceError;

/// Optional predicates for `GET /api/accessories`.
#[derive(Debug, Default, Clone)]
pub struct AccessoryFilters {
    /// substring match against name or description
    pub search: Option<String>,
    pub kind: Option<String>,
    /// keep only items with stock below the low-stock threshold
    pub low_stock_only: bool,
}

impl AccessoryFilters {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(kind) = &self.kind {
            accessory::validate_type(kind)?;
        }
        Ok(())
    }
}

/// Create an accessory. Assigns a fresh id and sets both timestamps to now.
pub async fn create_accessory(
    db: &DatabaseConnection,
    input: AccessoryCreate,
) -> Result<accessory::Model, ServiceError> {
    input.validate()?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let am = accessory::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(input.name),
        kind: Set(input.kind),
        price: Set(input.price),
        stock: Set(input.stock),
        size: Set(input.size),
        image_url: Set(input.image_url),
        description: Set(input.description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::storage("accessory", "create", None, e))?;
    info!(id = %created.id, "created accessory");
    Ok(created)
}

/// Point lookup by id.
pub async fn get_accessory(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<accessory::Model>, ServiceError> {
    accessory::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::storage("accessory", "get", Some(id), e))
}

/// Build the list select; see `pet_service::list_query` for the contract.
fn list_query(filters: &AccessoryFilters, page: ListPage) -> Select<accessory::Entity> {
    let mut query = accessory::Entity::find();
    if let Some(term) = filters.search.as_deref().filter(|t| !t.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(accessory::Column::Name.contains(term))
                .add(accessory::Column::Description.contains(term)),
        );
    }
    if let Some(kind) = &filters.kind {
        query = query.filter(accessory::Column::Kind.eq(kind.as_str()));
    }
    if filters.low_stock_only {
        query = query.filter(accessory::Column::Stock.lt(LOW_STOCK_THRESHOLD));
    }
    query
        .order_by_desc(accessory::Column::CreatedAt)
        .order_by_asc(accessory::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
}

/// Filtered, paginated list, newest first with a stable id tie-break.
pub async fn list_accessories(
    db: &DatabaseConnection,
    filters: &AccessoryFilters,
    page: ListPage,
) -> Result<Vec<accessory::Model>, ServiceError> {
    filters.validate()?;
    list_query(filters, page)
        .all(db)
        .await
        .map_err(|e| ServiceError::storage("accessory", "list", None, e))
}

/// Merge the provided fields into the stored accessory and refresh
/// `updated_at`. An empty patch returns the stored record unchanged.
pub async fn update_accessory(
    db: &DatabaseConnection,
    id: &str,
    patch: AccessoryUpdate,
) -> Result<accessory::Model, ServiceError> {
    patch.validate()?;
    let existing = get_accessory(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("accessory", id))?;
    if patch.is_empty() {
        return Ok(existing);
    }

    let mut am: accessory::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        am.name = Set(name);
    }
    if let Some(kind) = patch.kind {
        am.kind = Set(kind);
    }
    if let Some(price) = patch.price {
        am.price = Set(price);
    }
    if let Some(stock) = patch.stock {
        am.stock = Set(stock);
    }
    if let Some(size) = patch.size {
        am.size = Set(size);
    }
    if let Some(image_url) = patch.image_url {
        am.image_url = Set(image_url);
    }
    if let Some(description) = patch.description {
        am.description = Set(description);
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::storage("accessory", "update", Some(id), e))?;
    info!(id = %updated.id, "updated accessory");
    Ok(updated)
}

/// Hard delete. Deleting a missing id is NotFound, including repeat deletes.
pub async fn delete_accessory(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = accessory::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::storage("accessory", "delete", Some(id), e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("accessory", id));
    }
    info!(id, "deleted accessory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use common::types::ServiceKind;
    use sea_orm::sea_query::PostgresQueryBuilder;
    use sea_orm::QueryTrait;

    fn render(filters: &AccessoryFilters, page: ListPage) -> String {
        list_query(filters, page).into_query().to_string(PostgresQueryBuilder)
    }

    #[test]
    fn empty_filters_render_no_where_clause() {
        let sql = render(&AccessoryFilters::default(), ListPage::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
        assert!(sql.contains(
            r#"ORDER BY "accessories"."created_at" DESC, "accessories"."id" ASC"#
        ));
    }

    #[test]
    fn low_stock_filter_uses_threshold() {
        let filters = AccessoryFilters { low_stock_only: true, ..Default::default() };
        let sql = render(&filters, ListPage::default());
        assert!(sql.contains(r#""accessories"."stock" < 10"#));
    }

    #[test]
    fn search_matches_name_or_description() {
        let filters = AccessoryFilters { search: Some("rope".into()), ..Default::default() };
        let sql = render(&filters, ListPage::default());
        assert!(sql.contains(r#""accessories"."name" LIKE '%rope%'"#));
        assert!(sql.contains(r#"OR "accessories"."description" LIKE '%rope%'"#));
    }

    #[test]
    fn all_filters_compose_with_and() {
        let filters = AccessoryFilters {
            search: Some("chew".into()),
            kind: Some("toy".into()),
            low_stock_only: true,
        };
        let sql = render(&filters, ListPage::default());
        assert!(sql.contains(r#"AND "accessories"."kind" = 'toy'"#));
        assert!(sql.contains(r#"AND "accessories"."stock" < 10"#));
    }

    #[test]
    fn list_rejects_unknown_type_before_storage() {
        let filters = AccessoryFilters { kind: Some("gadget".into()), ..Default::default() };
        assert!(filters.validate().is_err());
    }

    #[tokio::test]
    async fn accessory_low_stock_scenario() -> Result<(), anyhow::Error> {
        let db = match get_db(ServiceKind::Accessories).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: {e}");
                return Ok(());
            }
        };

        let marker = Uuid::new_v4().to_string();
        let image = format!("data:image/png;base64,{}", "B".repeat(600));
        let created = create_accessory(
            &db,
            AccessoryCreate {
                name: format!("Rope {marker}"),
                kind: "toy".into(),
                price: 7.25,
                stock: 5,
                size: "M".into(),
                image_url: Some(image.clone()),
                description: Some(marker.clone()),
            },
        )
        .await?;
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.image_url.as_deref(), Some(image.as_str()));

        let low = list_accessories(
            &db,
            &AccessoryFilters {
                search: Some(marker.clone()),
                low_stock_only: true,
                ..Default::default()
            },
            ListPage::default(),
        )
        .await?;
        assert!(low.iter().any(|a| a.id == created.id));

        // restocking above the threshold drops it from the low-stock view
        let restocked = update_accessory(
            &db,
            &created.id,
            AccessoryUpdate { stock: Some(20), ..Default::default() },
        )
        .await?;
        assert_eq!(restocked.stock, 20);
        assert!(restocked.updated_at > created.updated_at);

        let low = list_accessories(
            &db,
            &AccessoryFilters {
                search: Some(marker.clone()),
                low_stock_only: true,
                ..Default::default()
            },
            ListPage::default(),
        )
        .await?;
        assert!(low.iter().all(|a| a.id != created.id));

        delete_accessory(&db, &created.id).await?;
        assert!(matches!(
            delete_accessory(&db, &created.id).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }
}
