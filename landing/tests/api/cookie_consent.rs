use crate::helpers::spawn_page;
use organi::startup::LandingPage;

#[tokio::test]
async fn the_cookie_banner_shows_until_consent_is_recorded() {
    // Arrange
    let mut app = spawn_page().await;
    assert!(app.page.cookie_banner.is_visible());

    // Act
    app.page
        .cookie_banner
        .accept()
        .expect("Failed to record consent");

    // Assert
    assert!(!app.page.cookie_banner.is_visible());

    // A fresh mount of the same page no longer shows the banner.
    let remounted =
        LandingPage::build(app.settings.clone()).expect("Failed to build the landing page");
    assert!(!remounted.cookie_banner.is_visible());
}
