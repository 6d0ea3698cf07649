//! Hero carousel component.
//!
//! Owns the two lifecycle-bound side effects of the page: the one-shot slide
//! preload and the recurring auto-advance timer. Both start after mount; the
//! timer is cancelled when the component's owner is cleaned up, and a preload
//! settling after teardown is dropped.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{debug, warn};

use super::{Icon, ICON_CARET_LEFT, ICON_CARET_RIGHT};
use crate::carousel::{slide_frames, CarouselState, Direction};
use crate::config::CarouselSettings;
use crate::error::CarouselError;
use crate::navigation::{follow_call_to_action, Navigator};
use crate::preload::{preload_all, Readiness};
use crate::schedule::{start_autoplay, TimerHandle};
use crate::types::Slide;
use crate::HostServices;

/// Reactive view state of one carousel instance.
#[derive(Clone, Copy, Debug)]
pub struct CarouselView {
    pub slide: RwSignal<CarouselState>,
    pub readiness: RwSignal<Readiness>,
}

impl CarouselView {
    /// Fresh state for `len` slides: slide 0, still loading.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        let initial = CarouselState::new(len)?;
        Ok(Self {
            slide: RwSignal::new(initial),
            readiness: RwSignal::new(Readiness::Loading),
        })
    }

    pub fn step(&self, direction: Direction) {
        self.slide.update(|state| state.step(direction));
        debug!(slide = self.slide.with_untracked(CarouselState::current), ?direction, "manual slide change");
    }
}

#[component]
pub fn HeroCarousel(
    slides: Vec<Slide>,
    settings: CarouselSettings,
    cta_label: String,
    /// Shown in place of the spinner when a slide image fails to load
    failure_notice: String,
    view_state: CarouselView,
    host: HostServices,
) -> impl IntoView {
    let CarouselView { slide, readiness } = view_state;

    // Preload once after mount.
    let loader = Arc::clone(&host.loader);
    let preload_slides = slides.clone();
    let policy = settings.failure_policy;
    Effect::new(move |_| {
        let loader = Arc::clone(&loader);
        let slides = preload_slides.clone();
        leptos::task::spawn_local(async move {
            let outcome = preload_all(loader.as_ref(), &slides).await;
            if readiness.try_update(|r| r.settle(outcome, policy)).is_none() {
                debug!("carousel torn down before preload settled");
            }
        });
    });

    // Auto-advance; the handle lives exactly as long as this component.
    let timer = StoredValue::new(None::<TimerHandle>);
    let scheduler = Arc::clone(&host.scheduler);
    let interval = settings.interval();
    Effect::new(move |_| {
        let tick = move || {
            slide.try_update(|state| state.advance());
        };
        match start_autoplay(scheduler.as_ref(), interval, tick) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => warn!(%err, "carousel autoplay unavailable"),
        }
    });
    on_cleanup(move || {
        if let Some(mut handle) = timer.try_update_value(Option::take).flatten() {
            handle.cancel();
            debug!("carousel autoplay stopped");
        }
    });

    let slide_count = slides.len();
    let navigator = Arc::clone(&host.navigator);

    view! {
        <section class="hero-carousel">
            <Show
                when=move || readiness.with(Readiness::is_ready)
                fallback=move || {
                    view! { <PreloadStatus readiness=readiness notice=failure_notice.clone() /> }
                }
            >
                <SlideDeck
                    slides=slides.clone()
                    slide=slide
                    transition_ms=settings.transition_ms
                    cta_label=cta_label.clone()
                    navigator=Arc::clone(&navigator)
                />
            </Show>

            <button
                class="carousel-control prev"
                aria-label="Previous slide"
                on:click=move |_| view_state.step(Direction::Prev)
            >
                <Icon path=ICON_CARET_LEFT />
            </button>
            <button
                class="carousel-control next"
                aria-label="Next slide"
                on:click=move |_| view_state.step(Direction::Next)
            >
                <Icon path=ICON_CARET_RIGHT />
            </button>

            <div class="carousel-dots">
                {(0..slide_count)
                    .map(|index| {
                        view! {
                            <button
                                class=move || {
                                    if slide.with(|s| s.current() == index) { "dot active" } else { "dot" }
                                }
                                aria-label=format!("Slide {}", index + 1)
                                on:click=move |_| {
                                    slide.update(|state| {
                                        if let Err(err) = state.jump_to(index) {
                                            warn!(%err, "ignored slide indicator");
                                        }
                                    })
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Stacked slide layers; only the current one is opaque.
#[component]
pub fn SlideDeck(
    slides: Vec<Slide>,
    slide: RwSignal<CarouselState>,
    transition_ms: u64,
    cta_label: String,
    navigator: Arc<dyn Navigator>,
) -> impl IntoView {
    let frame_slides = slides.clone();
    let frames = Memo::new(move |_| slide_frames(&slide.get(), &frame_slides, transition_ms));

    slides
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let cta = item.show_button.then(|| {
                view! {
                    <CallToAction
                        slide=item.clone()
                        label=cta_label.clone()
                        navigator=Arc::clone(&navigator)
                    />
                }
            });
            view! {
                <div
                    class=move || {
                        if frames.with(|f| f[index].active) { "slide-layer active" } else { "slide-layer" }
                    }
                    style=move || frames.with(|f| f[index].style())
                    aria-hidden=move || (!frames.with(|f| f[index].active)).to_string()
                >
                    <img class="slide-image" src=item.image alt="Slide image" />
                    {cta}
                </div>
            }
        })
        .collect::<Vec<_>>()
}

/// Slide button: cancels the link's default behavior and routes programmatically.
#[component]
fn CallToAction(slide: Slide, label: String, navigator: Arc<dyn Navigator>) -> impl IntoView {
    let href = slide.link.clone();
    view! {
        <div class="slide-cta">
            <a
                href=href
                class="btn btn-cta"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    follow_call_to_action(navigator.as_ref(), &slide);
                }
            >
                {label}
            </a>
        </div>
    }
}

/// Loading indicator, or the failure notice under [`crate::preload::FailurePolicy::Report`].
#[component]
pub fn PreloadStatus(
    #[prop(into)] readiness: Signal<Readiness>,
    notice: String,
) -> impl IntoView {
    move || match readiness.get() {
        Readiness::Loading => view! {
            <div class="carousel-loading">
                <div class="spinner" role="status" aria-label="Loading"></div>
            </div>
        }
        .into_any(),
        Readiness::Failed(err) => view! {
            <div class="carousel-error" role="alert">
                <p>{notice.clone()}</p>
                <p class="carousel-error-detail">{err.to_string()}</p>
            </div>
        }
        .into_any(),
        Readiness::Ready => view! { "" }.into_any(),
    }
}
