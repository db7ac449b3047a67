use crate::Route;

pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Services", route: Route::Services },
        NavLink { label: "Insights", route: Route::Blog },
        NavLink { label: "FAQ", route: Route::Faq },
        NavLink { label: "About", route: Route::About },
    ]
}
