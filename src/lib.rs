// Generic repository layer over SeaORM entities.
// One Repository type per entity; capabilities are opted into through
// the entity traits instead of per-entity repository structs.

pub mod config;
pub mod entity;
pub mod error;
pub mod repository;

pub use config::{RepositoryConfig, DEFAULT_LIMIT};
pub use entity::{without_trashed, CodeLookup, RepoEntity, SlugLookup, SoftDelete};
pub use error::{Error, RepoResult};
pub use repository::{RecordId, Repository};
