use entity::application::ApplicationStatus;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::util::listing_body;

mod create_listing {
    use super::*;

    /// Expect 201 with the owner taken from the token & the company joined
    #[tokio::test]
    async fn publishes_for_token_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let token = test.company_token(0);

        let (status, body) = send(
            &test.router(),
            Method::POST,
            "/api/listings",
            Some(&token),
            Some(listing_body("Backend Developer")),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["company_id"], test.companies[0].id);
        assert_eq!(body["company"]["name"], test.companies[0].name.as_str());
        assert_eq!(body["contract_type"], "CLT");
        assert_eq!(body["skills"], json!(["Rust", "SQL"]));

        Ok(())
    }

    /// Expect 401 without a token
    #[tokio::test]
    async fn unauthenticated_without_token() -> Result<(), TestError> {
        let test = TestBuilder::new().with_job_board_tables().build().await?;

        let (status, _) = send(
            &test.router(),
            Method::POST,
            "/api/listings",
            None,
            Some(listing_body("Backend Developer")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 403 for a candidate token
    #[tokio::test]
    async fn forbidden_for_candidate() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;
        let token = test.candidate_token(0);

        let (status, _) = send(
            &test.router(),
            Method::POST,
            "/api/listings",
            Some(&token),
            Some(listing_body("Backend Developer")),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 400 for an empty title
    #[tokio::test]
    async fn rejects_empty_title() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let token = test.company_token(0);

        let (status, body) = send(&test.router(), Method::POST, "/api/listings", Some(&token), Some(listing_body(""))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "title: Title is required");

        Ok(())
    }
}

mod get_listing {
    use super::*;

    /// Expect 200 with the listing and its company
    #[tokio::test]
    async fn returns_listing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let listing = test
            .listing()
            .insert_listing(test.companies[0].id, "Backend Developer")
            .await?;

        let (status, body) = send(&test.router(), Method::GET, &format!("/api/listings/{}", listing.id), None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Backend Developer");
        assert_eq!(body["company"]["id"], test.companies[0].id);

        Ok(())
    }

    /// Expect 404 for a listing that does not exist
    #[tokio::test]
    async fn not_found_for_missing_listing() -> Result<(), TestError> {
        let test = TestBuilder::new().with_job_board_tables().build().await?;

        let (status, _) = send(&test.router(), Method::GET, "/api/listings/999", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod list_listings {
    use super::*;

    /// Expect every listing newest first, and the company filter to keep only its own
    #[tokio::test]
    async fn lists_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .with_company("globex@example.com")
            .build()
            .await?;
        let acme = test.companies[0].id;
        let globex = test.companies[1].id;
        test.listing().insert_listing(acme, "First").await?;
        test.listing().insert_listing(globex, "Second").await?;
        test.listing().insert_listing(acme, "Third").await?;
        let router = test.router();

        let (status, all) = send(&router, Method::GET, "/api/listings", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = all
            .as_array()
            .expect("body is an array")
            .iter()
            .filter_map(|listing| listing["title"].as_str())
            .collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        let (status, own) = send(&router, Method::GET, &format!("/api/listings/company/{}", acme), None, None).await;
        assert_eq!(status, StatusCode::OK);
        let own = own.as_array().expect("body is an array");
        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|listing| listing["company"]["id"] == acme));

        Ok(())
    }

    /// Expect an empty array for a company without listings
    #[tokio::test]
    async fn empty_for_unknown_company() -> Result<(), TestError> {
        let test = TestBuilder::new().with_job_board_tables().build().await?;

        let (status, body) = send(&test.router(), Method::GET, "/api/listings/company/42", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        Ok(())
    }
}

mod update_listing {
    use super::*;

    /// Expect 200 with the replaced fields for the owner
    #[tokio::test]
    async fn owner_updates_listing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let listing = test
            .listing()
            .insert_listing(test.companies[0].id, "Backend Developer")
            .await?;
        let token = test.company_token(0);
        let mut update = listing_body("Senior Backend Developer");
        update["modality"] = json!("Hybrid");

        let (status, body) = send(
            &test.router(),
            Method::PUT,
            &format!("/api/listings/{}", listing.id),
            Some(&token),
            Some(update),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Senior Backend Developer");
        assert_eq!(body["modality"], "Hybrid");

        Ok(())
    }

    /// Expect 403 and the listing untouched when another company updates it
    #[tokio::test]
    async fn forbidden_for_other_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .with_company("globex@example.com")
            .build()
            .await?;
        let listing = test
            .listing()
            .insert_listing(test.companies[0].id, "Backend Developer")
            .await?;
        let token = test.company_token(1);

        let (status, _) = send(
            &test.router(),
            Method::PUT,
            &format!("/api/listings/{}", listing.id),
            Some(&token),
            Some(listing_body("Hijacked")),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);

        let stored = entity::prelude::Listing::find_by_id(listing.id).one(&test.db).await?;
        assert_eq!(stored.map(|l| l.title), Some("Backend Developer".to_string()));

        Ok(())
    }
}

mod delete_listing {
    use super::*;

    /// Expect 200 with an acknowledgement & the listing's applications removed with it
    #[tokio::test]
    async fn owner_deletes_listing_and_applications() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .with_company("acme@example.com")
            .build()
            .await?;
        let listing = test
            .listing()
            .insert_listing(test.companies[0].id, "Backend Developer")
            .await?;
        test.application()
            .insert_application(test.candidates[0].id, listing.id, ApplicationStatus::Pending)
            .await?;
        let token = test.company_token(0);
        let router = test.router();

        let (status, body) = send(
            &router,
            Method::DELETE,
            &format!("/api/listings/{}", listing.id),
            Some(&token),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Listing deleted");

        let listings = entity::prelude::Listing::find().count(&test.db).await?;
        let applications = entity::prelude::Application::find().count(&test.db).await?;
        assert_eq!(listings, 0);
        assert_eq!(applications, 0);

        let (status, _) = send(&router, Method::GET, &format!("/api/listings/{}", listing.id), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 403 and the listing kept when another company deletes it
    #[tokio::test]
    async fn forbidden_for_other_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .with_company("globex@example.com")
            .build()
            .await?;
        let listing = test
            .listing()
            .insert_listing(test.companies[0].id, "Backend Developer")
            .await?;
        let token = test.company_token(1);

        let (status, _) = send(
            &test.router(),
            Method::DELETE,
            &format!("/api/listings/{}", listing.id),
            Some(&token),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);

        let listings = entity::prelude::Listing::find().count(&test.db).await?;
        assert_eq!(listings, 1);

        Ok(())
    }

    /// Expect 404 for a listing that does not exist
    #[tokio::test]
    async fn not_found_for_missing_listing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let token = test.company_token(0);

        let (status, _) = send(&test.router(), Method::DELETE, "/api/listings/999", Some(&token), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }
}
