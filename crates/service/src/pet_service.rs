use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use tracing::info;
use uuid::Uuid;

use common::pagination::ListPage;
use models::pet::{self, PetCreate, PetUpdate};

use crate::errors::ServiceError;

/// Optional predicates for `GET /api/pets`.
#[derive(Debug, Default, Clone)]
pub struct PetFilters {
    /// substring match against name or notes
    pub search: Option<String>,
    pub species: Option<String>,
}

impl PetFilters {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(species) = &self.species {
            pet::validate_species(species)?;
        }
        Ok(())
    }
}

/// Create a pet. Assigns a fresh id and sets both timestamps to now.
pub async fn create_pet(db: &DatabaseConnection, input: PetCreate) -> Result<pet::Model, ServiceError> {
    input.validate()?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let am = pet::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(input.name),
        species: Set(input.species),
        age_years: Set(input.age_years),
        health: Set(input.health),
        happiness: Set(input.happiness),
        energy: Set(input.energy),
        avatar_url: Set(input.avatar_url),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::storage("pet", "create", None, e))?;
    info!(id = %created.id, "created pet");
    Ok(created)
}

/// Point lookup by id.
pub async fn get_pet(db: &DatabaseConnection, id: &str) -> Result<Option<pet::Model>, ServiceError> {
    pet::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::storage("pet", "get", Some(id), e))
}

/// Build the list select. Filters contribute predicates only when present;
/// with no active filters the statement carries no WHERE clause at all.
fn list_query(filters: &PetFilters, page: ListPage) -> Select<pet::Entity> {
    let mut query = pet::Entity::find();
    if let Some(term) = filters.search.as_deref().filter(|t| !t.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(pet::Column::Name.contains(term))
                .add(pet::Column::Notes.contains(term)),
        );
    }
    if let Some(species) = &filters.species {
        query = query.filter(pet::Column::Species.eq(species.as_str()));
    }
    query
        .order_by_desc(pet::Column::CreatedAt)
        .order_by_asc(pet::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
}

/// Filtered, paginated list, newest first with a stable id tie-break.
pub async fn list_pets(
    db: &DatabaseConnection,
    filters: &PetFilters,
    page: ListPage,
) -> Result<Vec<pet::Model>, ServiceError> {
    filters.validate()?;
    list_query(filters, page)
        .all(db)
        .await
        .map_err(|e| ServiceError::storage("pet", "list", None, e))
}

/// Merge the provided fields into the stored pet and refresh `updated_at`.
/// An empty patch returns the stored record unchanged.
pub async fn update_pet(
    db: &DatabaseConnection,
    id: &str,
    patch: PetUpdate,
) -> Result<pet::Model, ServiceError> {
    patch.validate()?;
    let existing = get_pet(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("pet", id))?;
    if patch.is_empty() {
        return Ok(existing);
    }

    let mut am: pet::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        am.name = Set(name);
    }
    if let Some(species) = patch.species {
        am.species = Set(species);
    }
    if let Some(age_years) = patch.age_years {
        am.age_years = Set(age_years);
    }
    if let Some(health) = patch.health {
        am.health = Set(health);
    }
    if let Some(happiness) = patch.happiness {
        am.happiness = Set(happiness);
    }
    if let Some(energy) = patch.energy {
        am.energy = Set(energy);
    }
    if let Some(avatar_url) = patch.avatar_url {
        am.avatar_url = Set(avatar_url);
    }
    if let Some(notes) = patch.notes {
        am.notes = Set(notes);
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::storage("pet", "update", Some(id), e))?;
    info!(id = %updated.id, "updated pet");
    Ok(updated)
}

/// Hard delete. Deleting a missing id is NotFound, including repeat deletes.
pub async fn delete_pet(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = pet::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::storage("pet", "delete", Some(id), e))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("pet", id));
    }
    info!(id, "deleted pet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use common::types::ServiceKind;
    use sea_orm::sea_query::PostgresQueryBuilder;
    use sea_orm::QueryTrait;

    fn render(filters: &PetFilters, page: ListPage) -> String {
        list_query(filters, page).into_query().to_string(PostgresQueryBuilder)
    }

    #[test]
    fn empty_filters_render_no_where_clause() {
        let sql = render(&PetFilters::default(), ListPage::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
        assert!(!sql.contains("1 = 1"));
        assert!(sql.contains(r#"ORDER BY "pets"."created_at" DESC, "pets"."id" ASC"#));
        assert!(sql.contains("LIMIT 100"));
        assert!(sql.contains("OFFSET 0"));
    }

    #[test]
    fn search_matches_name_or_notes() {
        let filters = PetFilters { search: Some("fetch".into()), species: None };
        let sql = render(&filters, ListPage::default());
        assert!(sql.contains(r#""pets"."name" LIKE '%fetch%'"#));
        assert!(sql.contains(r#"OR "pets"."notes" LIKE '%fetch%'"#));
    }

    #[test]
    fn filters_compose_with_and() {
        let filters = PetFilters { search: Some("lu".into()), species: Some("dog".into()) };
        let sql = render(&filters, ListPage::new(Some(10), Some(20)).unwrap());
        assert!(sql.contains("WHERE"));
        assert!(sql.contains(r#"AND "pets"."species" = 'dog'"#));
        assert!(sql.contains("LIMIT 10"));
        assert!(sql.contains("OFFSET 20"));
    }

    #[test]
    fn blank_search_is_ignored() {
        let filters = PetFilters { search: Some(String::new()), species: None };
        assert!(!render(&filters, ListPage::default()).contains("WHERE"));
    }

    #[test]
    fn list_rejects_unknown_species_before_storage() {
        let filters = PetFilters { search: None, species: Some("fish".into()) };
        assert!(filters.validate().is_err());
    }

    #[tokio::test]
    async fn pet_crud_service() -> Result<(), anyhow::Error> {
        let db = match get_db(ServiceKind::Pets).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: {e}");
                return Ok(());
            }
        };

        let created = create_pet(
            &db,
            PetCreate {
                name: "Luna".into(),
                species: "dog".into(),
                age_years: 3,
                health: 85,
                happiness: 90,
                energy: 75,
                avatar_url: None,
                notes: Some("Loves fetch".into()),
            },
        )
        .await?;
        assert!(!created.id.is_empty());
        assert_eq!(created.species, "dog");
        assert_eq!(created.created_at, created.updated_at);

        let got = get_pet(&db, &created.id).await?.unwrap();
        assert_eq!(got, created);

        // partial update: only happiness changes, updated_at advances
        let updated = update_pet(
            &db,
            &created.id,
            PetUpdate { happiness: Some(95), ..Default::default() },
        )
        .await?;
        assert_eq!(updated.name, "Luna");
        assert_eq!(updated.notes.as_deref(), Some("Loves fetch"));
        assert_eq!(updated.happiness, 95);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        // explicit null clears a nullable field
        let cleared = update_pet(
            &db,
            &created.id,
            PetUpdate { notes: Some(None), ..Default::default() },
        )
        .await?;
        assert_eq!(cleared.notes, None);
        assert_eq!(cleared.happiness, 95);

        delete_pet(&db, &created.id).await?;
        assert!(get_pet(&db, &created.id).await?.is_none());
        assert!(matches!(
            delete_pet(&db, &created.id).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn create_accepts_unbounded_url_fields() -> Result<(), anyhow::Error> {
        let db = match get_db(ServiceKind::Pets).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: {e}");
                return Ok(());
            }
        };

        // inline data: URLs easily exceed any fixed varchar width
        let avatar = format!("data:image/png;base64,{}", "A".repeat(600));
        let created = create_pet(
            &db,
            PetCreate {
                name: "Pixel".into(),
                species: "cat".into(),
                age_years: 1,
                health: 70,
                happiness: 70,
                energy: 70,
                avatar_url: Some(avatar.clone()),
                notes: None,
            },
        )
        .await?;
        assert_eq!(created.avatar_url.as_deref(), Some(avatar.as_str()));

        delete_pet(&db, &created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn pet_pagination_is_stable() -> Result<(), anyhow::Error> {
        let db = match get_db(ServiceKind::Pets).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: {e}");
                return Ok(());
            }
        };

        let marker = uuid::Uuid::new_v4().to_string();
        let mut ids = Vec::new();
        for i in 0..5 {
            let p = create_pet(
                &db,
                PetCreate {
                    name: format!("pager-{i}"),
                    species: "cat".into(),
                    age_years: 1,
                    health: 50,
                    happiness: 50,
                    energy: 50,
                    avatar_url: None,
                    notes: Some(marker.clone()),
                },
            )
            .await?;
            ids.push(p.id);
        }

        let filters = PetFilters { search: Some(marker.clone()), species: None };
        let mut seen = Vec::new();
        for offset in [0, 2, 4] {
            let page = list_pets(&db, &filters, ListPage::new(Some(2), Some(offset))?).await?;
            assert!(page.len() <= 2);
            for p in page {
                assert!(!seen.contains(&p.id), "page overlap at offset {offset}");
                seen.push(p.id);
            }
        }
        assert_eq!(seen.len(), 5, "pages missed rows");

        for id in ids {
            delete_pet(&db, &id).await?;
        }
        Ok(())
    }
}
