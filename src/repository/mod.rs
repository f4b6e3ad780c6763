mod lookup;
mod soft_delete;

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, Order, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder, QuerySelect, Related, Select,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::config::RepositoryConfig;
use crate::entity::RepoEntity;
use crate::error::{Error, RepoResult};

/// Primary-key value of an entity, e.g. `i32` or `Uuid`.
pub type RecordId<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Generic repository bound to one entity type.
///
/// Holds only configuration; the connection is passed per call so one
/// repository can serve any number of connections.
#[derive(Debug, Clone)]
pub struct Repository<E: RepoEntity> {
    config: RepositoryConfig,
    entity: PhantomData<E>,
}

impl<E: RepoEntity> Default for Repository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RepoEntity> Repository<E> {
    /// Repository with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    pub fn with_config(config: RepositoryConfig) -> Self {
        Self {
            config,
            entity: PhantomData,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Base query with the entity's default scope applied.
    ///
    /// Escape hatch for callers that need column projections or clauses
    /// the fixed operations do not cover.
    pub fn query(&self) -> Select<E> {
        E::scope(E::find())
    }

    /// Every row in the table.
    pub async fn all(&self, db: &DatabaseConnection) -> RepoResult<Vec<E::Model>> {
        Ok(self.query().all(db).await?)
    }

    /// Every row together with its eagerly loaded related `R` rows.
    pub async fn all_with_related<R>(
        &self,
        db: &DatabaseConnection,
    ) -> RepoResult<Vec<(E::Model, Vec<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        Ok(self.query().find_with_related(R::default()).all(db).await?)
    }

    /// Whether a row with this id exists in the default scope.
    pub async fn exists_by_id(&self, db: &DatabaseConnection, id: RecordId<E>) -> RepoResult<bool> {
        Ok(self.find_by_id(db, id).await?.is_some())
    }

    /// Row by id, or `None` when nothing matches.
    pub async fn find_by_id(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
    ) -> RepoResult<Option<E::Model>> {
        Ok(E::scope(E::find_by_id(id)).one(db).await?)
    }

    /// Row by id with its eagerly loaded related `R` rows.
    pub async fn find_by_id_with_related<R>(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
    ) -> RepoResult<Option<(E::Model, Vec<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        let rows = E::scope(E::find_by_id(id))
            .find_with_related(R::default())
            .all(db)
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Rows matching the criteria.
    pub async fn find(
        &self,
        db: &DatabaseConnection,
        criteria: Condition,
    ) -> RepoResult<Vec<E::Model>> {
        Ok(self.query().filter(criteria).all(db).await?)
    }

    /// Rows matching the criteria, capped at `limit` rows.
    ///
    /// `None` falls back to the configured default limit.
    pub async fn find_limited(
        &self,
        db: &DatabaseConnection,
        criteria: Condition,
        limit: Option<u64>,
    ) -> RepoResult<Vec<E::Model>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        Ok(self.query().filter(criteria).limit(limit).all(db).await?)
    }

    /// Rows matching the criteria in the given order, capped at `limit` rows.
    ///
    /// At least one `(column, direction)` pair is required.
    pub async fn find_ordered_limited(
        &self,
        db: &DatabaseConnection,
        criteria: Condition,
        ordering: &[(E::Column, Order)],
        limit: Option<u64>,
    ) -> RepoResult<Vec<E::Model>> {
        if ordering.is_empty() {
            return Err(Error::UnspecifiedOrdering);
        }

        let mut query = self.query().filter(criteria);
        for (column, direction) in ordering {
            query = query.order_by(*column, direction.clone());
        }

        let limit = limit.unwrap_or(self.config.default_limit);
        Ok(query.limit(limit).all(db).await?)
    }

    /// Insert a new row and read it back from storage.
    ///
    /// The returned model carries storage-assigned state (generated id,
    /// column defaults), not the payload echoed back.
    pub async fn create<A>(&self, db: &DatabaseConnection, payload: A) -> RepoResult<E::Model>
    where
        A: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        let inserted = payload.into_active_model().insert(db).await?;
        self.reload(db, inserted).await
    }

    /// Alias of [`create`](Self::create).
    pub async fn save<A>(&self, db: &DatabaseConnection, payload: A) -> RepoResult<E::Model>
    where
        A: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        self.create(db, payload).await
    }

    /// Insert a new row from a JSON object payload.
    ///
    /// Fails with [`Error::InvalidPayload`] when the value is not an object
    /// or its fields do not convert; storage is left untouched in that case.
    pub async fn create_from_json(
        &self,
        db: &DatabaseConnection,
        payload: JsonValue,
    ) -> RepoResult<E::Model>
    where
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel> + for<'de> Deserialize<'de>,
    {
        let model = <E as RepoEntity>::ActiveModel::from_json(payload)
            .map_err(|err| Error::InvalidPayload(err.to_string()))?;
        self.create(db, model).await
    }

    /// Apply the payload to the row with this id.
    ///
    /// `false` when no row matches; nothing is written in that case.
    pub async fn update<A>(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
        payload: A,
    ) -> RepoResult<bool>
    where
        A: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        let Some(current) = self.find_by_id(db, id).await? else {
            return Ok(false);
        };

        // Pin the primary key to the fetched row, whatever the payload says
        let mut changes = payload.into_active_model();
        for key in <E::PrimaryKey as Iterable>::iter() {
            let column = key.into_column();
            changes.set(column, current.get(column));
        }

        changes.update(db).await?;
        Ok(true)
    }

    /// Apply a JSON object payload to the row with this id.
    ///
    /// `false` when the id is absent or the payload does not normalize.
    pub async fn update_from_json(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
        payload: JsonValue,
    ) -> RepoResult<bool>
    where
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel> + for<'de> Deserialize<'de>,
    {
        let changes = match <E as RepoEntity>::ActiveModel::from_json(payload) {
            Ok(changes) => changes,
            Err(err) => {
                tracing::warn!(
                    table = E::default().table_name(),
                    error = %err,
                    "rejected update payload"
                );
                return Ok(false);
            }
        };
        self.update(db, id, changes).await
    }

    /// Flag a record inactive without deleting it.
    ///
    /// Reserved: currently returns success without touching the row.
    /// TODO: write the archive flag once the column exists.
    pub async fn archive(&self, _db: &DatabaseConnection, _id: RecordId<E>) -> RepoResult<bool> {
        tracing::debug!(
            table = E::default().table_name(),
            "archive invoked, record left untouched"
        );
        Ok(true)
    }

    /// Re-read a just-written row so storage-assigned state is visible.
    async fn reload(&self, db: &DatabaseConnection, model: E::Model) -> RepoResult<E::Model> {
        let mut query = E::find();
        for key in <E::PrimaryKey as Iterable>::iter() {
            let column = key.into_column();
            query = query.filter(column.eq(model.get(column)));
        }
        Ok(query.one(db).await?.unwrap_or(model))
    }
}
