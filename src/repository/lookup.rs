use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use super::Repository;
use crate::entity::{CodeLookup, RepoEntity, SlugLookup};
use crate::error::RepoResult;

impl<E: RepoEntity + CodeLookup> Repository<E> {
    /// First row whose code column matches, or `None`.
    pub async fn find_by_code(
        &self,
        db: &DatabaseConnection,
        code: &str,
    ) -> RepoResult<Option<E::Model>> {
        Ok(self
            .query()
            .filter(E::code_column().eq(code))
            .one(db)
            .await?)
    }
}

impl<E: RepoEntity + SlugLookup> Repository<E> {
    /// First row whose slug column matches, or `None`.
    ///
    /// Same contract as [`find_by_code`](Repository::find_by_code), against
    /// the slug column of gateway-style tables.
    pub async fn find_by_slug(
        &self,
        db: &DatabaseConnection,
        slug: &str,
    ) -> RepoResult<Option<E::Model>> {
        Ok(self
            .query()
            .filter(E::slug_column().eq(slug))
            .one(db)
            .await?)
    }
}
