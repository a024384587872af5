use crate::helpers::{fill_signup, spawn_page, spawn_unconfigured_page};
use organi::signup_form::{SubmissionStatus, SubmitFailure};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_signup_joins_the_waitlist() {
    // Arrange
    let mut app = spawn_page().await;

    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let form = &mut app.page.signup;
    fill_signup(form, "Ada", "ada@x.com", "small");

    // Act
    form.submit().await;

    // Assert
    assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    assert_eq!(
        form.success_message(),
        Some("Successfully joined the waitlist!")
    );
    assert_eq!(form.error_message(), None);
    assert!(form.draft().name.is_empty());
    assert!(form.draft().email.is_empty());
    assert!(form.draft().company_size.is_empty());
}

#[tokio::test]
async fn submitting_the_same_email_twice_reports_a_duplicate() {
    // Arrange
    let mut app = spawn_page().await;

    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.waitlist_server)
        .await;
    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": "23505",
            "details": "Key (email)=(ada@x.com) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"waitlist_email_key\""
        })))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let form = &mut app.page.signup;

    // Act
    fill_signup(form, "Ada", "ada@x.com", "small");
    form.submit().await;
    assert_eq!(form.status(), &SubmissionStatus::Succeeded);

    fill_signup(form, "Ada", "ada@x.com", "small");
    form.submit().await;

    // Assert
    assert_eq!(
        form.status(),
        &SubmissionStatus::Failed(SubmitFailure::DuplicateEmail)
    );
    assert_eq!(
        form.error_message(),
        Some("This email is already on the waitlist.".to_string())
    );
    // The draft survives a failed attempt.
    assert_eq!(form.draft().email, "ada@x.com");
}

#[tokio::test]
async fn a_service_failure_reports_the_generic_message() {
    // Arrange
    let mut app = spawn_page().await;

    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let form = &mut app.page.signup;
    fill_signup(form, "Ada", "ada@x.com", "small");

    // Act
    form.submit().await;

    // Assert
    assert_eq!(
        form.status(),
        &SubmissionStatus::Failed(SubmitFailure::ServiceFailure)
    );
    assert_eq!(
        form.error_message(),
        Some("Error joining waitlist. Please try again.".to_string())
    );
    assert_eq!(form.draft().name, "Ada");
}

#[tokio::test]
async fn an_unconfigured_page_fails_fast_without_a_network_attempt() {
    // Arrange
    let mut app = spawn_unconfigured_page().await;

    let form = &mut app.page.signup;
    fill_signup(form, "Ada", "ada@x.com", "small");

    // Act
    form.submit().await;

    // Assert
    assert_eq!(
        form.status(),
        &SubmissionStatus::Failed(SubmitFailure::ConfigurationMissing)
    );
    assert_eq!(
        form.error_message(),
        Some("Waitlist configuration is missing. Please try again later.".to_string())
    );
    assert!(app
        .waitlist_server
        .received_requests()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn the_form_recovers_after_a_failed_attempt() {
    // Arrange
    let mut app = spawn_page().await;

    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.waitlist_server)
        .await;
    Mock::given(path("/rest/v1/waitlist"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let form = &mut app.page.signup;
    fill_signup(form, "Ada", "ada@x.com", "small");

    // Act
    form.submit().await;
    assert_eq!(
        form.status(),
        &SubmissionStatus::Failed(SubmitFailure::ServiceFailure)
    );

    form.submit().await;

    // Assert
    assert_eq!(form.status(), &SubmissionStatus::Succeeded);
}
