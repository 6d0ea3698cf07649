//! Programmatic client-side navigation.

use std::sync::Mutex;

use tracing::info;

use crate::types::Slide;

/// Performs a client-side route change. Implemented over the router in the
/// browser entry crate.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Follow a slide's call-to-action.
///
/// Issues exactly one navigation to the slide's route when the slide shows
/// a button and none otherwise. Returns whether a navigation was issued.
/// The DOM handler has already cancelled the default link behavior.
pub fn follow_call_to_action(navigator: &dyn Navigator, slide: &Slide) -> bool {
    if !slide.show_button {
        return false;
    }
    info!(route = %slide.link, "following slide call-to-action");
    navigator.navigate(&slide.link);
    true
}

/// Navigator that only records requested routes.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requested so far, oldest first.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}
