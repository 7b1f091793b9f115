use std::sync::Arc;

use super::types::{calculus, econ, MockHttp, SchoolClass};
use crate::{client::ResourceClient, config::ModelRequestConfig};

#[test]
fn puts_encoded_model_to_item_path_with_trailing_slash() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_ok(&econ());
        let classes = ResourceClient::<SchoolClass>::new(http.clone(), "classes");

        let mut got = None;
        classes
            .update(econ(), "5", |updated| got = Some(updated), None)
            .await;

        assert_eq!(got, Some(econ()));
        let calls = http.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].verb, "PUT");
        assert_eq!(calls[0].path, "classes/5/");
        assert_eq!(
            calls[0].body.as_deref(),
            Some(serde_json::to_vec(&econ()).unwrap().as_slice())
        );
    });
}

#[test]
fn trailing_slash_is_applied_for_base_paths_with_their_own() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_ok(&econ());
        let classes = ResourceClient::<SchoolClass>::new(http.clone(), "classes/");

        classes.update(econ(), 5, |_| (), None).await;

        assert_eq!(http.calls.lock().unwrap()[0].path, "classes/5/");
    });
}

#[test]
fn cb_with_model_hands_the_submitted_model_to_the_continuation() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_ok(&calculus());
        let classes = ResourceClient::<SchoolClass>::new(http, "classes");

        let config = ModelRequestConfig {
            cb_with_model: true,
            ..Default::default()
        };
        let mut got = None;
        classes
            .update(econ(), 5, |updated| got = Some(updated), Some(&config))
            .await;

        assert_eq!(got, Some(econ()));
    });
}

#[test]
fn missing_config_defaults_to_response_continuation() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_ok(&calculus());
        let classes = ResourceClient::<SchoolClass>::new(http, "classes");

        let mut got = None;
        classes
            .update(econ(), 5, |updated| got = Some(updated), None)
            .await;

        assert_eq!(got, Some(calculus()));
    });
}
