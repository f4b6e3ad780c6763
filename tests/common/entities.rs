//! Entities backing the repository tests.

pub mod department {
    use sea_orm::entity::prelude::*;
    use seaorm_repo::RepoEntity;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "departments")]
    pub struct Model {
        #[sea_orm(primary_key)]
        #[serde(skip_deserializing)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::employee::Entity")]
        Employees,
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employees.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl RepoEntity for Entity {
        type ActiveModel = ActiveModel;
    }
}

pub mod employee {
    use sea_orm::entity::prelude::*;
    use sea_orm::Select;
    use seaorm_repo::{without_trashed, CodeLookup, RepoEntity, SoftDelete};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "employees")]
    pub struct Model {
        #[sea_orm(primary_key)]
        #[serde(skip_deserializing)]
        pub id: i32,
        #[sea_orm(unique)]
        #[serde(default)]
        pub code: String,
        #[serde(default)]
        pub full_name: String,
        pub email: Option<String>,
        pub mobile: Option<String>,
        #[serde(default)]
        pub is_checked: bool,
        pub department_id: Option<i32>,
        pub deleted_at: Option<TimeDateTimeWithTimeZone>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentId",
            to = "super::department::Column::Id"
        )]
        Department,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Department.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl RepoEntity for Entity {
        type ActiveModel = ActiveModel;

        fn scope(select: Select<Self>) -> Select<Self> {
            without_trashed(select)
        }
    }

    impl SoftDelete for Entity {
        fn deleted_at_column() -> Self::Column {
            Column::DeletedAt
        }
    }

    impl CodeLookup for Entity {
        fn code_column() -> Self::Column {
            Column::Code
        }
    }
}

pub mod gateway {
    use sea_orm::entity::prelude::*;
    use sea_orm::Select;
    use seaorm_repo::{without_trashed, RepoEntity, SlugLookup, SoftDelete};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "gateways")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub slug: String,
        pub name: String,
        pub currency: String,
        pub deleted_at: Option<TimeDateTimeWithTimeZone>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl RepoEntity for Entity {
        type ActiveModel = ActiveModel;

        fn scope(select: Select<Self>) -> Select<Self> {
            without_trashed(select)
        }
    }

    impl SoftDelete for Entity {
        fn deleted_at_column() -> Self::Column {
            Column::DeletedAt
        }
    }

    impl SlugLookup for Entity {
        fn slug_column() -> Self::Column {
            Column::Slug
        }
    }
}
