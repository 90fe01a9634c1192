mod interests;
mod login;
mod matches;
mod profile_details;
mod start;
mod swipe;

pub use interests::InterestsPage;
pub use login::LoginPage;
pub use matches::MatchesPage;
pub use profile_details::ProfileDetailsPage;
pub use start::StartPage;
pub use swipe::SwipePage;

use reqwest::Error;

/// Short message shown under a form when a request fails.
pub(crate) fn error_message(err: &Error) -> String {
    err.status().map_or_else(
        || "Unable to connect to server".to_string(),
        |status| format!("Request failed: {status}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Method};

    #[test]
    fn maps_transport_failures_to_a_generic_message() {
        let err = Client::new()
            .request(Method::GET, "http://")
            .build()
            .unwrap_err();
        assert_eq!(error_message(&err), "Unable to connect to server");
    }
}
