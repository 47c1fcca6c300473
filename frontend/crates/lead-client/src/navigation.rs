use lead_core::Route;

use std::sync::Mutex;

use log::info;

/// Side effect of leaving the current view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Keeps every navigation in order. Lets callers (and tests) inspect where
/// a flow sent the user.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigate -> {route}");
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
