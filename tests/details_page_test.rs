mod common;

use std::sync::Arc;

use career_findr::{
    domain::{Course, Job, ListingStatus},
    pages::{DetailState, DetailsPage},
    repository::{SqliteCourseRepository, SqliteJobRepository, SqliteSavedItemRepository},
    service::{catalog_service::CatalogService, saved_item_service::SavedItemService},
};
use common::FailingSavedItemRepository;
use sqlx::SqlitePool;
use uuid::Uuid;

fn services(pool: &SqlitePool) -> (Arc<CatalogService>, Arc<SavedItemService>) {
    let catalog = CatalogService::new(
        Arc::new(SqliteCourseRepository::new(pool.clone())),
        Arc::new(SqliteJobRepository::new(pool.clone())),
    );
    let saved = SavedItemService::new(Arc::new(SqliteSavedItemRepository::new(pool.clone())));
    (Arc::new(catalog), Arc::new(saved))
}

#[tokio::test]
async fn test_open_course_page() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let course = common::create_course(&pool, "Software Engineering", ListingStatus::Active).await?;
    let (catalog, saved) = services(&pool);

    let mut page: DetailsPage<Course> =
        DetailsPage::new(catalog, saved.clone(), course.id, Some("student-1".to_string()));
    page.load().await;

    assert_eq!(page.listing().map(|c| c.title.as_str()), Some("Software Engineering"));
    assert_eq!(page.status_label(), Some("Open"));
    assert!(page.can_apply());
    assert_eq!(page.apply_path(), Some(format!("/apply/{}", course.id)));
    assert!(!page.is_saved());
    assert_eq!(page.save_label(), "Save");

    assert!(page.toggle_save().await);
    assert_eq!(page.save_label(), "Saved");

    let items = saved.list("student-1", None).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].snapshot.title, "Software Engineering");

    assert!(!page.toggle_save().await);
    assert!(saved.list("student-1", None).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_closed_job_cannot_apply() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let job = common::create_job(&pool, "Night Auditor", ListingStatus::Closed).await?;
    let (catalog, saved) = services(&pool);

    let mut page: DetailsPage<Job> = DetailsPage::new(catalog, saved, job.id, Some("student-1".to_string()));
    page.load().await;

    assert_eq!(page.status_label(), Some("Closed"));
    assert!(!page.can_apply());
    assert_eq!(page.apply_path(), None);

    Ok(())
}

#[tokio::test]
async fn test_open_job_apply_path() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let job = common::create_job(&pool, "Platform Engineer", ListingStatus::Active).await?;
    let (catalog, saved) = services(&pool);

    let mut page: DetailsPage<Job> = DetailsPage::new(catalog, saved, job.id, None);
    page.load().await;

    assert_eq!(page.apply_path(), Some(format!("/jobs/{}/apply", job.id)));

    Ok(())
}

#[tokio::test]
async fn test_missing_listing_renders_not_found() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let (catalog, saved) = services(&pool);

    let mut course_page: DetailsPage<Course> =
        DetailsPage::new(catalog.clone(), saved.clone(), Uuid::new_v4(), None);
    course_page.load().await;
    match course_page.state() {
        DetailState::NotFound { message, back_path } => {
            assert_eq!(message, "Course not found");
            assert_eq!(*back_path, "/courses");
        }
        other => panic!("unexpected state: {:?}", other),
    }

    let mut job_page: DetailsPage<Job> = DetailsPage::new(catalog, saved, Uuid::new_v4(), None);
    job_page.load().await;
    match job_page.state() {
        DetailState::NotFound { message, back_path } => {
            assert_eq!(message, "Job not found");
            assert_eq!(*back_path, "/jobs");
        }
        other => panic!("unexpected state: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_save_without_user_does_nothing() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let course = common::create_course(&pool, "Hospitality", ListingStatus::Active).await?;
    let (catalog, saved) = services(&pool);

    let mut page: DetailsPage<Course> = DetailsPage::new(catalog, saved.clone(), course.id, None);
    page.load().await;

    assert!(!page.toggle_save().await);
    assert!(!page.is_saved());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM saved_items")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn test_failed_toggle_keeps_saved_state() -> anyhow::Result<()> {
    let pool = common::test_pool().await?;
    let course = common::create_course(&pool, "Civil Engineering", ListingStatus::Active).await?;
    let (catalog, _) = services(&pool);
    let repo = Arc::new(FailingSavedItemRepository::new(pool.clone()));
    let saved = Arc::new(SavedItemService::new(repo.clone()));

    let mut page: DetailsPage<Course> =
        DetailsPage::new(catalog, saved.clone(), course.id, Some("student-1".to_string()));
    page.load().await;

    assert!(page.toggle_save().await);
    assert!(page.is_saved());

    repo.fail_writes(true);
    assert!(page.toggle_save().await);
    assert!(page.is_saved());
    assert_eq!(page.save_label(), "Saved");
    assert_eq!(saved.list("student-1", None).await?.len(), 1);

    Ok(())
}
