//! Slide image preloading.
//!
//! Every slide image is requested once, all requests are in flight before
//! any is awaited, and the join resolves `Ok` only when all of them load.
//! The first failure resolves the join with an error; what the page does
//! with that error is decided by [`FailurePolicy`].

use futures::future::{try_join_all, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LoadError, PreloadError};
use crate::types::Slide;

/// Host resource loader: resolves once the image at `url` has loaded or failed.
///
/// The browser implementation lives in the entry crate; tests use stubs.
pub trait ImageLoader: Send + Sync {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), LoadError>>;
}

/// Request every slide image and wait for all of them.
pub async fn preload_all<L>(loader: &L, slides: &[Slide]) -> Result<(), PreloadError>
where
    L: ImageLoader + ?Sized,
{
    debug!(count = slides.len(), "preloading slide images");
    let pending: Vec<_> = slides.iter().map(|slide| loader.load(&slide.image)).collect();

    match try_join_all(pending).await {
        Ok(loaded) => {
            info!(count = loaded.len(), "slide images ready");
            Ok(())
        }
        Err(err) => {
            warn!(url = %err.url, reason = %err.reason, "slide image failed to load");
            Err(err.into())
        }
    }
}

/// What the page does when a slide image fails to load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Replace the spinner with a visible notice.
    #[default]
    Report,
    /// Keep the spinner forever; the failure is only logged.
    Block,
}

/// Readiness of the carousel. Never returns to `Loading` once settled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Readiness {
    #[default]
    Loading,
    Ready,
    Failed(PreloadError),
}

impl Readiness {
    /// True only after every image loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Readiness::Loading)
    }

    pub fn error(&self) -> Option<&PreloadError> {
        match self {
            Readiness::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Apply a preload outcome. Returns whether the state changed.
    pub fn settle(&mut self, outcome: Result<(), PreloadError>, policy: FailurePolicy) -> bool {
        if !self.is_loading() {
            return false;
        }
        match (outcome, policy) {
            (Ok(()), _) => *self = Readiness::Ready,
            (Err(err), FailurePolicy::Report) => *self = Readiness::Failed(err),
            (Err(_), FailurePolicy::Block) => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use futures::FutureExt;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubLoader {
        failing: HashSet<String>,
        hanging: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl StubLoader {
        fn failing(urls: &[&str]) -> Self {
            Self {
                failing: urls.iter().map(|u| u.to_string()).collect(),
                ..Default::default()
            }
        }

        fn hanging(urls: &[&str]) -> Self {
            Self {
                hanging: urls.iter().map(|u| u.to_string()).collect(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ImageLoader for StubLoader {
        fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), LoadError>> {
            self.calls.lock().unwrap().push(url.to_string());
            if self.hanging.contains(url) {
                pending().boxed_local()
            } else if self.failing.contains(url) {
                ready(Err(LoadError::new(url, "404"))).boxed_local()
            } else {
                ready(Ok(())).boxed_local()
            }
        }
    }

    fn slides(urls: &[&str]) -> Vec<Slide> {
        urls.iter()
            .map(|url| Slide {
                image: url.to_string(),
                link: "/".into(),
                show_button: false,
            })
            .collect()
    }

    #[test]
    fn requests_each_image_exactly_once_in_order() {
        let loader = StubLoader::default();
        let result = block_on(preload_all(&loader, &slides(&["a.png", "b.png", "c.png"])));
        assert_eq!(result, Ok(()));
        assert_eq!(loader.calls(), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn single_failure_fails_the_join() {
        let loader = StubLoader::failing(&["b.png"]);
        let result = block_on(preload_all(&loader, &slides(&["a.png", "b.png"])));
        assert_eq!(
            result,
            Err(PreloadError::Image(LoadError::new("b.png", "404")))
        );
    }

    #[test]
    fn all_requests_issued_before_any_completes() {
        let loader = StubLoader::hanging(&["a.png"]);
        let list = slides(&["a.png", "b.png"]);
        let join = preload_all(&loader, &list);
        assert!(join.now_or_never().is_none());
        assert_eq!(loader.calls(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn hanging_image_keeps_join_pending() {
        let loader = StubLoader::hanging(&["b.png"]);
        let list = slides(&["a.png", "b.png"]);
        let mut join = Box::pin(preload_all(&loader, &list));
        for _ in 0..10 {
            assert!((&mut join).now_or_never().is_none());
        }
    }

    #[test]
    fn settle_ready_is_final() {
        let mut readiness = Readiness::default();
        assert!(readiness.settle(Ok(()), FailurePolicy::Report));
        assert!(readiness.is_ready());

        let err = PreloadError::Image(LoadError::new("x", "late"));
        assert!(!readiness.settle(Err(err), FailurePolicy::Report));
        assert!(readiness.is_ready());
    }

    #[test]
    fn report_policy_surfaces_failure_without_becoming_ready() {
        let mut readiness = Readiness::default();
        let err = PreloadError::Image(LoadError::new("b.png", "404"));
        assert!(readiness.settle(Err(err.clone()), FailurePolicy::Report));
        assert!(!readiness.is_ready());
        assert_eq!(readiness.error(), Some(&err));
        assert!(!readiness.settle(Ok(()), FailurePolicy::Report));
        assert!(!readiness.is_ready());
    }

    #[test]
    fn block_policy_stays_loading() {
        let mut readiness = Readiness::default();
        let err = PreloadError::Image(LoadError::new("b.png", "404"));
        assert!(!readiness.settle(Err(err), FailurePolicy::Block));
        assert!(readiness.is_loading());
    }

    #[test]
    fn failure_policy_parses_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            policy: FailurePolicy,
        }
        let wrap: Wrap = toml::from_str(r#"policy = "block""#).unwrap();
        assert_eq!(wrap.policy, FailurePolicy::Block);
    }
}
