//! Browser implementations of the page's host seams.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use hkupgrade_site::error::{LoadError, ScheduleError};
use hkupgrade_site::navigation::Navigator;
use hkupgrade_site::preload::ImageLoader;
use hkupgrade_site::schedule::{Scheduler, Tick, TimerHandle};
use leptos::prelude::set_interval_with_handle;
use leptos_router::NavigateOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Loads an image through a detached `<img>` element.
///
/// Resolves on the element's `load` event and fails on `error`. There is no
/// timeout: a request the browser never settles keeps the future pending.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlImageLoader;

impl ImageLoader for HtmlImageLoader {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), LoadError>> {
        let url = url.to_string();
        async move {
            let image =
                HtmlImageElement::new().map_err(|err| LoadError::new(&url, js_reason(&err)))?;

            let (tx, rx) = oneshot::channel::<Result<(), String>>();
            let tx = Rc::new(RefCell::new(Some(tx)));
            let settle = move |result: Result<(), String>| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(result);
                }
            };
            let on_load = {
                let settle = settle.clone();
                Closure::<dyn FnMut()>::new(move || settle(Ok(())))
            };
            let on_error =
                Closure::<dyn FnMut()>::new(move || settle(Err("error event".to_string())));

            image.set_onload(Some(on_load.as_ref().unchecked_ref()));
            image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            image.set_src(&url);

            let outcome = rx
                .await
                .unwrap_or_else(|_| Err("image loader dropped".to_string()));

            image.set_onload(None);
            image.set_onerror(None);
            drop((on_load, on_error));

            tracing::trace!(%url, ok = outcome.is_ok(), "image settled");
            outcome.map_err(|reason| LoadError::new(url, reason))
        }
        .boxed_local()
    }
}

/// `setInterval` on the window; the handle clears it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: Tick) -> Result<TimerHandle, ScheduleError> {
        if period.is_zero() {
            return Err(ScheduleError("period must be positive".to_string()));
        }
        let interval = set_interval_with_handle(move || tick(), period)
            .map_err(|err| ScheduleError(js_reason(&err)))?;
        Ok(TimerHandle::new(move || interval.clear()))
    }
}

/// Routes through `leptos_router`'s navigate function.
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F> {
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync,
{
    fn navigate(&self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // 1x1 transparent PNG.
    const PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn decodable_image_loads() {
        assert!(HtmlImageLoader.load(PIXEL).await.is_ok());
    }

    #[wasm_bindgen_test]
    async fn broken_image_reports_its_url() {
        let url = "data:image/png;base64,AAAA";
        let err = HtmlImageLoader.load(url).await.unwrap_err();
        assert_eq!(err.url, url);
    }

    #[wasm_bindgen_test]
    async fn cancelled_interval_stops_ticking() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let mut handle = BrowserScheduler
            .every(
                Duration::from_millis(10),
                Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        sleep(60).await;
        handle.cancel();
        let seen = ticks.load(Ordering::SeqCst);
        assert!(seen > 0);

        sleep(50).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }

    #[wasm_bindgen_test]
    fn zero_period_is_rejected() {
        assert!(BrowserScheduler.every(Duration::ZERO, Box::new(|| {})).is_err());
    }

    #[wasm_bindgen_test]
    fn navigator_forwards_route() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let navigator = RouterNavigator::new(move |route: &str, _options: NavigateOptions| {
            sink.lock().unwrap().push(route.to_string());
        });
        navigator.navigate("/nurse");
        assert_eq!(*seen.lock().unwrap(), vec!["/nurse".to_string()]);
    }
}
