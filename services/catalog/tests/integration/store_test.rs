use sea_orm::{ActiveValue::Set, EntityTrait};

use cinelog_catalog::domain::repository::{MovieRepository, RatingRepository, UserRepository};
use cinelog_catalog::domain::types::{MoviePatch, RatingEdge, RatingOutcome};
use cinelog_catalog::infra::db::{DbMovieRepository, DbRatingRepository, DbUserRepository};
use cinelog_catalog_schema::user_movies;

use crate::helpers::{inception, matrix, seed_movie, seed_user, test_db};

fn edge(user_id: i32, movie_id: i32, rating: f64) -> RatingEdge {
    RatingEdge {
        user_id,
        movie_id,
        rating,
        user_rating: 0.0,
    }
}

// ── Upsert law ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_exactly_one_edge_after_repeat_upsert() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;
    let repo = DbRatingRepository { db: db.clone() };

    let first = repo.upsert(&edge(user.id, movie.id, 9.0)).await.unwrap();
    let second = repo.upsert(&edge(user.id, movie.id, 7.0)).await.unwrap();

    assert_eq!(first, RatingOutcome::Created);
    assert_eq!(second, RatingOutcome::Updated);

    let edges = user_movies::Entity::find().all(&db).await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].rating, 7.0);
}

#[tokio::test]
async fn should_keep_edge_identity_across_upserts() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;
    let repo = DbRatingRepository { db: db.clone() };

    repo.upsert(&edge(user.id, movie.id, 9.0)).await.unwrap();
    let before = user_movies::Entity::find().all(&db).await.unwrap()[0].id;
    repo.upsert(&edge(user.id, movie.id, 7.0)).await.unwrap();
    let after = user_movies::Entity::find().all(&db).await.unwrap()[0].id;

    assert_eq!(before, after);
}

#[tokio::test]
async fn should_update_both_rating_attributes() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;
    let repo = DbRatingRepository { db: db.clone() };

    repo.upsert(&RatingEdge {
        user_id: user.id,
        movie_id: movie.id,
        rating: 9.0,
        user_rating: 8.9,
    })
    .await
    .unwrap();
    repo.upsert(&RatingEdge {
        user_id: user.id,
        movie_id: movie.id,
        rating: 7.0,
        user_rating: 6.5,
    })
    .await
    .unwrap();

    let edges = user_movies::Entity::find().all(&db).await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].rating, 7.0);
    assert_eq!(edges[0].user_rating, 6.5);
}

#[tokio::test]
async fn should_report_not_found_without_writing_when_user_missing() {
    let db = test_db().await;
    let movie = seed_movie(&db, &inception()).await;
    let repo = DbRatingRepository { db: db.clone() };

    let outcome = repo.upsert(&edge(999, movie.id, 9.0)).await.unwrap();

    assert_eq!(outcome, RatingOutcome::NotFound);
    assert!(user_movies::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_report_not_found_without_writing_when_movie_missing() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let repo = DbRatingRepository { db: db.clone() };

    let outcome = repo.upsert(&edge(user.id, 999, 9.0)).await.unwrap();

    assert_eq!(outcome, RatingOutcome::NotFound);
    assert!(user_movies::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_single_edge_under_concurrent_upserts() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = DbRatingRepository { db: db.clone() };
        let (user_id, movie_id) = (user.id, movie.id);
        handles.push(tokio::spawn(async move {
            repo.upsert(&edge(user_id, movie_id, f64::from(i))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let edges = user_movies::Entity::find().all(&db).await.unwrap();
    assert_eq!(edges.len(), 1);
}

#[tokio::test]
async fn should_keep_edges_for_distinct_pairs_independent() {
    let db = test_db().await;
    let alice = seed_user(&db, "Alice").await;
    let bob = seed_user(&db, "Bob").await;
    let movie = seed_movie(&db, &inception()).await;
    let repo = DbRatingRepository { db: db.clone() };

    repo.upsert(&edge(alice.id, movie.id, 9.0)).await.unwrap();
    repo.upsert(&edge(bob.id, movie.id, 6.0)).await.unwrap();
    repo.upsert(&edge(alice.id, movie.id, 8.0)).await.unwrap();

    let alice_movies = repo.list_for_user(alice.id).await.unwrap();
    let bob_movies = repo.list_for_user(bob.id).await.unwrap();
    assert_eq!(alice_movies[0].rating, 8.0);
    assert_eq!(bob_movies[0].rating, 6.0);
}

#[tokio::test]
async fn should_report_updated_for_edge_created_out_of_band() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;

    // An edge written directly to the store, bypassing the repository.
    user_movies::Entity::insert(user_movies::ActiveModel {
        user_id: Set(user.id),
        movie_id: Set(movie.id),
        rating: Set(5.0),
        user_rating: Set(0.0),
        ..Default::default()
    })
    .exec(&db)
    .await
    .unwrap();

    let repo = DbRatingRepository { db: db.clone() };
    let outcome = repo.upsert(&edge(user.id, movie.id, 7.0)).await.unwrap();

    assert_eq!(outcome, RatingOutcome::Updated);
    let edges = user_movies::Entity::find().all(&db).await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].rating, 7.0);
}

// ── Cascade delete ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_movie_and_its_edges_then_report_false_on_repeat() {
    let db = test_db().await;
    let alice = seed_user(&db, "Alice").await;
    let bob = seed_user(&db, "Bob").await;
    let movie = seed_movie(&db, &inception()).await;
    let ratings = DbRatingRepository { db: db.clone() };
    let movies = DbMovieRepository { db: db.clone() };

    ratings.upsert(&edge(alice.id, movie.id, 9.0)).await.unwrap();
    ratings.upsert(&edge(bob.id, movie.id, 8.5)).await.unwrap();

    assert!(movies.delete(movie.id).await.unwrap());
    assert!(!movies.delete(movie.id).await.unwrap());

    assert!(user_movies::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(ratings.list_for_user(alice.id).await.unwrap().is_empty());
    assert!(ratings.list_for_user(bob.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_false_for_delete_of_unknown_movie() {
    let db = test_db().await;
    let movies = DbMovieRepository { db: db.clone() };
    assert!(!movies.delete(999).await.unwrap());
}

#[tokio::test]
async fn should_leave_other_movies_edges_intact_on_delete() {
    let db = test_db().await;
    let alice = seed_user(&db, "Alice").await;
    let kept = seed_movie(&db, &matrix()).await;
    let doomed = seed_movie(&db, &inception()).await;
    let ratings = DbRatingRepository { db: db.clone() };
    let movies = DbMovieRepository { db: db.clone() };

    ratings.upsert(&edge(alice.id, kept.id, 8.0)).await.unwrap();
    ratings.upsert(&edge(alice.id, doomed.id, 9.0)).await.unwrap();

    assert!(movies.delete(doomed.id).await.unwrap());

    let remaining = ratings.list_for_user(alice.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

// ── Partial update ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_patch_only_the_given_fields() {
    let db = test_db().await;
    let movie = seed_movie(&db, &inception()).await;
    let movies = DbMovieRepository { db: db.clone() };

    let updated = movies
        .update(
            movie.id,
            &MoviePatch {
                rating: Some(9.5),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.rating, 9.5);
    assert_eq!(updated.name, movie.name);
    assert_eq!(updated.director, movie.director);
    assert_eq!(updated.year, movie.year);
    assert_eq!(updated.poster, movie.poster);
}

#[tokio::test]
async fn should_return_none_when_patching_unknown_movie() {
    let db = test_db().await;
    let movies = DbMovieRepository { db: db.clone() };

    let result = movies
        .update(
            999,
            &MoviePatch {
                rating: Some(9.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn should_report_not_found_when_patch_races_with_delete() {
    let db = test_db().await;
    let movie = seed_movie(&db, &inception()).await;
    let movies = DbMovieRepository { db: db.clone() };

    let patcher = {
        let movies = movies.clone();
        let id = movie.id;
        tokio::spawn(async move {
            movies
                .update(
                    id,
                    &MoviePatch {
                        rating: Some(9.5),
                        ..Default::default()
                    },
                )
                .await
        })
    };
    let deleter = {
        let movies = movies.clone();
        let id = movie.id;
        tokio::spawn(async move { movies.delete(id).await })
    };

    // Whichever order the store serializes them in, the patch reports a
    // typed result: the updated movie if it ran first, None if the delete
    // won. Never a store-level failure.
    let patched = patcher.await.unwrap().unwrap();
    assert!(deleter.await.unwrap().unwrap());
    if let Some(updated) = patched {
        assert_eq!(updated.rating, 9.5);
    }
    assert!(movies.list_with_users().await.unwrap().is_empty());
}

// ── Point reads ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_find_user_by_id_and_none_for_unknown() {
    let db = test_db().await;
    let alice = seed_user(&db, "Alice").await;
    let users = DbUserRepository { db: db.clone() };

    let found = users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Alice");

    assert!(users.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn should_find_movie_by_id_and_none_for_unknown() {
    let db = test_db().await;
    let movie = seed_movie(&db, &inception()).await;
    let movies = DbMovieRepository { db: db.clone() };

    let found = movies.find_by_id(movie.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Inception");
    assert_eq!(found.rating, 8.8);

    assert!(movies.find_by_id(999).await.unwrap().is_none());
}

// ── Read projections ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_project_edge_rating_not_canonical_rating() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let movie = seed_movie(&db, &inception()).await;
    let ratings = DbRatingRepository { db: db.clone() };

    ratings.upsert(&edge(user.id, movie.id, 9.0)).await.unwrap();

    let projection = ratings.list_for_user(user.id).await.unwrap();
    assert_eq!(projection.len(), 1);
    assert_eq!(projection[0].id, movie.id);
    assert_eq!(projection[0].name, "Inception");
    assert_eq!(projection[0].rating, 9.0); // edge value, movie holds 8.8
}

#[tokio::test]
async fn should_order_user_movies_by_edge_creation() {
    let db = test_db().await;
    let user = seed_user(&db, "Alice").await;
    let first = seed_movie(&db, &matrix()).await;
    let second = seed_movie(&db, &inception()).await;
    let ratings = DbRatingRepository { db: db.clone() };

    // Rate in reverse id order; projection follows edge creation order.
    ratings.upsert(&edge(user.id, second.id, 9.0)).await.unwrap();
    ratings.upsert(&edge(user.id, first.id, 8.0)).await.unwrap();

    let projection = ratings.list_for_user(user.id).await.unwrap();
    assert_eq!(projection.len(), 2);
    assert_eq!(projection[0].id, second.id);
    assert_eq!(projection[1].id, first.id);
}

#[tokio::test]
async fn should_return_empty_projection_for_unknown_user() {
    let db = test_db().await;
    let ratings = DbRatingRepository { db: db.clone() };
    assert!(ratings.list_for_user(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_list_movies_with_their_users_eagerly() {
    let db = test_db().await;
    let alice = seed_user(&db, "Alice").await;
    let bob = seed_user(&db, "Bob").await;
    let rated = seed_movie(&db, &inception()).await;
    let unrated = seed_movie(&db, &matrix()).await;
    let ratings = DbRatingRepository { db: db.clone() };
    let movies = DbMovieRepository { db: db.clone() };

    ratings.upsert(&edge(alice.id, rated.id, 9.0)).await.unwrap();
    ratings.upsert(&edge(bob.id, rated.id, 9.2)).await.unwrap();

    let listing = movies.list_with_users().await.unwrap();
    assert_eq!(listing.len(), 2);

    let rated_entry = listing.iter().find(|e| e.movie.id == rated.id).unwrap();
    let mut names: Vec<_> = rated_entry.users.iter().map(|u| u.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Alice", "Bob"]);

    let unrated_entry = listing.iter().find(|e| e.movie.id == unrated.id).unwrap();
    assert!(unrated_entry.users.is_empty());
}

#[tokio::test]
async fn should_list_users_in_stable_id_order() {
    let db = test_db().await;
    seed_user(&db, "Alice").await;
    seed_user(&db, "Bob").await;
    let users = DbUserRepository { db: db.clone() };

    let listed = users.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].id < listed[1].id);
    assert_eq!(listed[0].name, "Alice");
}
