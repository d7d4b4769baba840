//! Verify response classification against the vectors in `test-vectors/`.
//!
//! Each case names a policy, a method, a simulated response, and the expected
//! outcome plus the identifier the state should hold afterward. The vectors
//! drive `Dispatcher::interpret` directly, so the unconditional post-delete
//! clear (which lives in `Dispatcher::delete`) is outside their scope.

use http_resource::{DispatchError, Dispatcher, HttpMethod, HttpResponse, Policy, ResourceState};

fn parse_policy(s: &str) -> Policy {
    match s {
        "lenient" => Policy::Lenient,
        "strict" => Policy::Strict,
        other => panic!("unknown policy: {other}"),
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_response(value: &serde_json::Value) -> HttpResponse {
    let headers = value["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    HttpResponse {
        status: value["status"].as_u64().unwrap() as u16,
        headers,
        body: value["body"].as_str().unwrap().to_string(),
    }
}

#[test]
fn classification_vectors() {
    let raw = include_str!("../../test-vectors/classify.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let dispatcher = Dispatcher::new(parse_policy(case["policy"].as_str().unwrap()));
        let method = parse_method(case["method"].as_str().unwrap());
        let response = parse_response(&case["response"]);

        let mut state = ResourceState {
            id: case["initial_id"].as_str().unwrap().to_string(),
            ..ResourceState::default()
        };

        let result = dispatcher.interpret(method, response, &mut state);

        match case["expect"].as_str().unwrap() {
            "ok" => assert!(result.is_ok(), "{name}: expected success, got {result:?}"),
            "request-error" => assert!(
                matches!(result, Err(DispatchError::Request { .. })),
                "{name}: expected Request error, got {result:?}"
            ),
            "content-type-error" => assert!(
                matches!(result, Err(DispatchError::ContentType(_))),
                "{name}: expected ContentType error, got {result:?}"
            ),
            "identity-missing" => assert!(
                matches!(result, Err(DispatchError::IdentityMissing)),
                "{name}: expected IdentityMissing, got {result:?}"
            ),
            other => panic!("{name}: unknown expectation: {other}"),
        }

        assert_eq!(
            state.id,
            case["expected_id"].as_str().unwrap(),
            "{name}: identifier after the call"
        );
    }
}
