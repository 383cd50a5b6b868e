use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, signin::SignInPage, signup::SignupPage,
};

pub const HOME_PATH: &str = "/";
pub const SIGNIN_PATH: &str = "/signin";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Every path the `<Routes>` table below mounts, via the same constants.
pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, SIGNIN_PATH, SIGNUP_PATH, DASHBOARD_PATH];

/// Navigation handle provided through context so tests can observe pushes
/// instead of touching `window.location`.
#[derive(Clone)]
pub struct Navigator(Rc<dyn Fn(&str)>);

impl Navigator {
    pub fn new(push: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(push))
    }

    pub fn push(&self, path: &str) {
        (self.0)(path);
    }

    /// Default navigator: full-page navigation via `window.location`.
    pub fn browser() -> Self {
        Self::new(|path| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        })
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::browser)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::AuthClient::new());
    provide_context(Navigator::browser());
    view! {
        <Router>
            <Routes>
                <Route path=HOME_PATH view=HomePage/>
                <Route path=SIGNIN_PATH view=SignInPage/>
                <Route path=SIGNUP_PATH view=SignupPage/>
                <Route path=DASHBOARD_PATH view=DashboardPage/>
            </Routes>
        </Router>
    }
}
