use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Select, Value,
};
use time::OffsetDateTime;

/// Binds an entity to a [`Repository`](crate::Repository).
///
/// SeaORM does not expose the active model through [`EntityTrait`], so the
/// association is declared here once per entity.
pub trait RepoEntity: EntityTrait {
    /// The entity's active model type.
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    /// Base scope every default read goes through.
    ///
    /// Soft-deleting entities hide trashed rows here, see [`without_trashed`].
    fn scope(select: Select<Self>) -> Select<Self> {
        select
    }
}

/// Soft-delete capability: the entity carries a nullable deleted-at column.
///
/// Rows with a non-null deleted-at are "trashed": invisible to default
/// reads and reachable through the trashed operations until restored or
/// permanently removed.
pub trait SoftDelete: EntityTrait {
    /// Column holding the deletion timestamp, `NULL` while the row is live.
    fn deleted_at_column() -> Self::Column;

    /// Database value written into the deleted-at column.
    ///
    /// Override when the column is not a timestamp with time zone.
    fn deleted_at_value(at: Option<OffsetDateTime>) -> Value {
        Value::TimeDateTimeWithTimeZone(at.map(Box::new))
    }
}

/// Lookup capability for entities with a short, unique code column.
pub trait CodeLookup: EntityTrait {
    fn code_column() -> Self::Column;
}

/// Lookup capability for entities keyed by a slug or short code,
/// as used by payment-gateway style tables.
pub trait SlugLookup: EntityTrait {
    fn slug_column() -> Self::Column;
}

/// Restrict a query to rows that are not soft-deleted.
///
/// The usual body of [`RepoEntity::scope`] for soft-deleting entities.
pub fn without_trashed<E: SoftDelete>(select: Select<E>) -> Select<E> {
    select.filter(E::deleted_at_column().is_null())
}
