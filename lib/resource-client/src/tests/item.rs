use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use super::types::{econ, MockHttp, SchoolClass};
use crate::{client::ResourceClient, config::RequestConfig, errors::RequestError};

#[test]
fn invokes_continuation_with_decoded_item() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_ok(&econ());
        let classes = ResourceClient::<SchoolClass>::new(http.clone(), "classes");

        let mut got = None;
        classes.get(3, |item| got = Some(item), None).await;

        assert_eq!(got, Some(econ()));
        let calls = http.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].verb, "GET");
        assert_eq!(calls[0].path, "classes/3");
    });
}

#[test]
fn call_config_without_fail_handler_falls_back_to_instance_level() {
    pollster::block_on(async {
        let http = Arc::new(MockHttp::default());
        http.push_err(RequestError::Status(404));

        let failures = Arc::new(AtomicUsize::new(0));
        let counted = failures.clone();
        let mut classes = ResourceClient::<SchoolClass>::new(http, "classes");
        classes.default_config.on_fail = Some(Box::new(move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
        }));

        // A per-call config that only overrides `finally`.
        let config = RequestConfig {
            finally: Some(Box::new(|| ())),
            ..Default::default()
        };
        classes
            .get(
                3,
                |_| panic!("continuation must not run on failure"),
                Some(&config),
            )
            .await;

        assert_eq!(failures.load(Ordering::SeqCst), 1);
    });
}
