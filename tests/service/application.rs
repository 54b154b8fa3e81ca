use entity::application::ApplicationStatus;
use jobboard::server::{
    error::{application::ApplicationError, unique_violation, Error},
    service::application::ApplicationService,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect the unique index to refuse a second row for the same candidate & listing
///
/// The index is what keeps applications unique when two requests pass the existence
/// check at the same time, so it is checked here without going through the service.
#[tokio::test]
async fn unique_index_rejects_duplicate_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_candidate("ana@example.com")
        .with_company("acme@example.com")
        .build()
        .await?;
    let candidate_id = test.candidates[0].id;
    let listing = test
        .listing()
        .insert_listing(test.companies[0].id, "Backend Developer")
        .await?;
    test.application()
        .insert_application(candidate_id, listing.id, ApplicationStatus::Pending)
        .await?;

    let duplicate = test
        .application()
        .insert_application(candidate_id, listing.id, ApplicationStatus::Pending)
        .await;

    let Err(TestError::DbErr(err)) = duplicate else {
        panic!("duplicate application must be refused by the database");
    };
    assert!(unique_violation(&err).is_some());

    let stored = entity::prelude::Application::find().count(&test.db).await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Expect applying twice to succeed once then fail with AlreadyApplied
#[tokio::test]
async fn second_apply_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_candidate("ana@example.com")
        .with_company("acme@example.com")
        .build()
        .await?;
    let candidate_id = test.candidates[0].id;
    let listing = test
        .listing()
        .insert_listing(test.companies[0].id, "Backend Developer")
        .await?;
    let service = ApplicationService::new(&test.db);

    let first = service.apply(candidate_id, listing.id).await;
    let second = service.apply(candidate_id, listing.id).await;

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(Error::ApplicationError(ApplicationError::AlreadyApplied { .. }))
    ));

    let stored = entity::prelude::Application::find().count(&test.db).await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Expect a forbidden review to leave the status as it was
#[tokio::test]
async fn forbidden_review_keeps_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_candidate("ana@example.com")
        .with_company("acme@example.com")
        .with_company("globex@example.com")
        .build()
        .await?;
    let listing = test
        .listing()
        .insert_listing(test.companies[0].id, "Backend Developer")
        .await?;
    let application = test
        .application()
        .insert_application(test.candidates[0].id, listing.id, ApplicationStatus::Pending)
        .await?;

    let result = ApplicationService::new(&test.db)
        .set_status(
            test.companies[1].id,
            application.id,
            jobboard::model::application::ApplicationStatusDto::Rejected,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ApplicationError(ApplicationError::NotListingOwner { .. }))
    ));

    let stored = entity::prelude::Application::find_by_id(application.id)
        .one(&test.db)
        .await?
        .map(|application| application.status);
    assert_eq!(stored, Some(ApplicationStatus::Pending));

    Ok(())
}
