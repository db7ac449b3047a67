use yew::prelude::*;
use yew_router::components::Link;

use crate::components::consultation::CONTACT_EMAIL;
use crate::content::services::SERVICES;
use crate::seo::structured_data::{BUSINESS_NAME, BUSINESS_PHONE, SERVED_AREAS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h3>{BUSINESS_NAME}</h3>
                    <p>{"Honolulu, Hawaii"}</p>
                    <p><a href={format!("tel:{}", BUSINESS_PHONE)}>{BUSINESS_PHONE}</a></p>
                    <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                </div>
                <div class="footer-column">
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <Link<Route> to={Route::Service { slug: service.slug.to_string() }}>
                                    {service.name}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>{"Licensed In"}</h3>
                    <p>{SERVED_AREAS.join(", ")}</p>
                    <Link<Route> to={Route::Contact} classes="footer-contact-link">{"Contact us"}</Link<Route>>
                </div>
            </div>
            <p class="footer-legal">
                {"Insurance products are offered through licensed agents. Not affiliated with or endorsed by the U.S. government or the federal Medicare program."}
            </p>
            <style>
                {r#"
                .site-footer {
                    background: #0b2a3a;
                    color: #c9d8e2;
                    padding: 3rem 2rem 2rem;
                    margin-top: 4rem;
                }
                .footer-columns {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .footer-column h3 {
                    color: #ffffff;
                    font-size: 1.05rem;
                    margin-bottom: 0.8rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    line-height: 1.9;
                }
                .site-footer a {
                    color: #8fd3cf;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    text-decoration: underline;
                }
                .footer-legal {
                    max-width: 1100px;
                    margin: 2.5rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.8rem;
                    color: #8ea3b1;
                }
                "#}
            </style>
        </footer>
    }
}
