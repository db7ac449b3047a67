use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <section class="page-hero">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or no longer exists."}</p>
                <Link<Route> to={Route::Home} classes="forward-link">
                    <button class="hero-cta">{"Back to home"}</button>
                </Link<Route>>
            </section>
        </div>
    }
}
