use yew::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::seo::structured_data::{BUSINESS_DESCRIPTION, SERVED_AREAS};

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About Us"}</h1>
                <p>{BUSINESS_DESCRIPTION}</p>
            </section>
            <section class="page-section">
                <h2>{"Rooted in Honolulu"}</h2>
                <p>{"We started as a two-person Medicare practice and grew into a full benefits consultancy by doing the same thing for every client: explaining the options plainly and sticking around after enrollment."}</p>
                <h2>{"Where we are licensed"}</h2>
                <ul>
                    { for SERVED_AREAS.iter().map(|area| html! { <li>{*area}</li> }) }
                </ul>
            </section>
        </div>
    }
}
