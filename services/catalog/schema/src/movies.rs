use sea_orm::entity::prelude::*;

/// Catalog movie. `rating` is the canonical score from metadata lookup or
/// manual entry, independent of any user's personal rating.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_movies::Entity")]
    UserMovies,
}

impl Related<super::user_movies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMovies.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_movies::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_movies::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
