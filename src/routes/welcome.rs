//! Greeting endpoint for deployment pipeline demos.
//!
//! Returns a fixed plain-text payload so an orchestrated rollout can be
//! verified end to end with a single request.

/// Response body of the welcome endpoint, returned verbatim.
pub const WELCOME_BODY: &str = "Spring boot app deployment in Kubernetes cluster !";

/// Welcome handler.
///
/// Always produces the same greeting; the endpoint takes no input and keeps
/// no state between calls.
pub async fn welcome() -> &'static str {
    WELCOME_BODY
}
