use yew::prelude::*;
use yew_router::components::Link;

use crate::components::consultation::ConsultationDialog;
use crate::components::json_ld::structured_data;
use crate::content::services::SERVICES;
use crate::hooks::{use_dialog_toggle, use_scroll_to_top};
use crate::seo::structured_data::{LOCAL_BUSINESS, ORGANIZATION};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let (dialog_open, open_dialog, close_dialog) = use_dialog_toggle();

    html! {
        <div class="home-page">
            { structured_data(&*ORGANIZATION) }
            { structured_data(&*LOCAL_BUSINESS) }
            <section class="home-hero">
                <h1>{"Benefits advice that speaks your language"}</h1>
                <p>{"Independent insurance and employee benefits guidance for families, retirees and small businesses across Hawaii and the West Coast."}</p>
                <button class="hero-cta" onclick={open_dialog.clone()}>{"Book a free consultation"}</button>
            </section>

            <section class="page-section">
                <h2>{"How we help"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.name}</h3>
                            <p>{service.summary}</p>
                            <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="card-link">
                                {"Learn more →"}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </section>

            <section class="page-section alternate">
                <h2>{"Why work with an independent advisor?"}</h2>
                <div class="reasons">
                    <div class="reason">
                        <h3>{"No cost to you"}</h3>
                        <p>{"Carriers pay our commission. Your premium is the same whether you enroll with us or on your own."}</p>
                    </div>
                    <div class="reason">
                        <h3>{"Many carriers, one conversation"}</h3>
                        <p>{"We compare plans from every major carrier we are appointed with instead of selling a single company's products."}</p>
                    </div>
                    <div class="reason">
                        <h3>{"Here after you enroll"}</h3>
                        <p>{"Claims questions, billing problems and annual reviews are part of the service."}</p>
                    </div>
                </div>
            </section>

            <section class="cta-band">
                <h2>{"Ready to review your coverage?"}</h2>
                <button class="hero-cta" onclick={open_dialog}>{"Talk to an advisor"}</button>
            </section>

            <ConsultationDialog is_open={dialog_open} on_close={close_dialog} />
            <style>
                {r#"
                .home-hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: linear-gradient(135deg, #0b4f6c 0%, #0b7a75 100%);
                    color: #ffffff;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.2rem;
                }
                .home-hero p {
                    font-size: 1.2rem;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    color: #d8ecef;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: #ffffff;
                    border: 1px solid #e3e9ee;
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: all 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 10px 24px rgba(11, 79, 108, 0.12);
                }
                .card-link {
                    color: #0b7a75;
                    font-weight: 600;
                    text-decoration: none;
                }
                .reasons {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .home-hero {
                        padding: 6rem 1rem 4rem;
                    }
                    .home-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
