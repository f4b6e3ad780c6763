use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, IntoActiveModel, QueryFilter,
};
use time::OffsetDateTime;

use super::{RecordId, Repository};
use crate::entity::{RepoEntity, SoftDelete};
use crate::error::RepoResult;

/// Trash operations, available when the entity supports soft deletion.
impl<E: RepoEntity + SoftDelete> Repository<E> {
    /// Soft-delete the row with this id.
    ///
    /// `false` when no live row matches.
    pub async fn delete_by_id(&self, db: &DatabaseConnection, id: RecordId<E>) -> RepoResult<bool>
    where
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        let Some(model) = self.find_by_id(db, id).await? else {
            return Ok(false);
        };
        self.stamp(db, model, Some(OffsetDateTime::now_utc())).await?;
        Ok(true)
    }

    /// Bring a soft-deleted row back into the default scope.
    ///
    /// The row is searched including trashed rows; restoring a live row
    /// succeeds and leaves it live.
    pub async fn restore_by_id(&self, db: &DatabaseConnection, id: RecordId<E>) -> RepoResult<bool>
    where
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        let Some(model) = self.find_trashed_by_id(db, id).await? else {
            return Ok(false);
        };
        self.stamp(db, model, None).await?;
        Ok(true)
    }

    /// Remove the row from storage for good. Irreversible.
    pub async fn permanently_delete_by_id(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
    ) -> RepoResult<bool> {
        let result = E::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Soft-deleted rows only.
    pub async fn all_trashed(&self, db: &DatabaseConnection) -> RepoResult<Vec<E::Model>> {
        Ok(E::find()
            .filter(E::deleted_at_column().is_not_null())
            .all(db)
            .await?)
    }

    /// Row by id, searched across live and soft-deleted rows.
    pub async fn find_trashed_by_id(
        &self,
        db: &DatabaseConnection,
        id: RecordId<E>,
    ) -> RepoResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(db).await?)
    }

    /// Write the deleted-at column of one row.
    async fn stamp(
        &self,
        db: &DatabaseConnection,
        model: E::Model,
        at: Option<OffsetDateTime>,
    ) -> RepoResult<()>
    where
        E::Model: IntoActiveModel<<E as RepoEntity>::ActiveModel>,
    {
        let mut active = model.into_active_model();
        active.set(E::deleted_at_column(), E::deleted_at_value(at));
        active.update(db).await?;
        Ok(())
    }
}
