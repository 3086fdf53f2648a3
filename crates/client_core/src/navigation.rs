use std::sync::Mutex;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::SignUp => "/signup",
        }
    }
}

pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
}

/// Navigator that keeps the visited routes as a history stack.
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    pub fn starting_at(route: Route) -> Self {
        Self {
            entries: Mutex::new(vec![route]),
        }
    }

    pub fn current(&self) -> Route {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .copied()
            .unwrap_or(Route::Login)
    }

    pub fn entries(&self) -> Vec<Route> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for History {
    fn push(&self, route: Route) {
        debug!(path = route.path(), "navigating");
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }
}
