use super::*;

#[test]
fn rejected_login_shows_the_mapped_message() {
    // 后端原话不透出，无论它说了什么
    let failure = ApiFailure::Api {
        status: 401,
        message: Some("No user found with this email".to_string()),
    };
    assert_eq!(login_failure_message(&failure), "Invalid email or password");

    let bare = ApiFailure::Api {
        status: 400,
        message: None,
    };
    assert_eq!(login_failure_message(&bare), "Invalid email or password");
}

#[test]
fn login_transport_failures_keep_their_generic_texts() {
    let network = ApiFailure::Network("timeout".to_string());
    assert_eq!(login_failure_message(&network), network.user_message());

    let contract = ApiFailure::Contract("missing statusCode".to_string());
    assert_eq!(login_failure_message(&contract), contract.user_message());
}

#[test]
fn user_message_surfaces_the_backend_message_verbatim() {
    let failure = ApiFailure::Api {
        status: 409,
        message: Some("Vehicle with this VIN already exists".to_string()),
    };
    assert_eq!(
        failure.user_message(),
        "Vehicle with this VIN already exists"
    );

    let bare = ApiFailure::Api {
        status: 500,
        message: None,
    };
    assert_eq!(bare.user_message(), "Request failed. Please try again.");
}

#[test]
fn transport_failures_never_leak_their_detail() {
    let network = ApiFailure::Network("connection refused: 127.0.0.1:5000".to_string());
    assert_eq!(
        network.user_message(),
        "Network error. Please check your connection and try again."
    );

    let contract = ApiFailure::Contract("invalid type: null".to_string());
    assert_eq!(
        contract.user_message(),
        "Unexpected response from the server."
    );
}
