use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMovies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMovies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserMovies::UserId).integer().not_null())
                    .col(ColumnDef::new(UserMovies::MovieId).integer().not_null())
                    .col(ColumnDef::new(UserMovies::Rating).double().not_null())
                    .col(
                        ColumnDef::new(UserMovies::UserRating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserMovies::Table, UserMovies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserMovies::Table, UserMovies::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one edge per (user, movie) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx-user-movies-user-id-movie-id")
                    .table(UserMovies::Table)
                    .col(UserMovies::UserId)
                    .col(UserMovies::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMovies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserMovies {
    Table,
    Id,
    UserId,
    MovieId,
    Rating,
    UserRating,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}
