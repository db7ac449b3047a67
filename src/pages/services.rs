use yew::prelude::*;
use yew_router::components::Link;

use crate::components::consultation::ConsultationDialog;
use crate::components::json_ld::structured_data;
use crate::content::services::{find_service, SERVICES};
use crate::hooks::{use_dialog_toggle, use_scroll_to_top};
use crate::pages::not_found::NotFound;
use crate::seo::structured_data::create_service_record;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Coverage guidance for every stage, from your first job to retirement."}</p>
            </section>
            <section class="page-section">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-row">
                        <div>
                            <h2>{service.name}</h2>
                            <p>{service.summary}</p>
                        </div>
                        <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="card-link">
                            {"Details →"}
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .service-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    padding: 1.5rem 0;
                    border-bottom: 1px solid #e3e9ee;
                }
                .service-row h2 {
                    font-size: 1.4rem;
                    margin: 0 0 0.4rem;
                }
                @media (max-width: 768px) {
                    .service-row {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    use_scroll_to_top();
    let (dialog_open, open_dialog, close_dialog) = use_dialog_toggle();

    let Some(service) = find_service(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="service-page">
            { structured_data(&create_service_record(service.service_type, service.description)) }
            <section class="page-hero">
                <h1>{service.name}</h1>
                <p>{service.summary}</p>
            </section>
            <section class="page-section">
                <p>{service.description}</p>
                <h2>{"What's included"}</h2>
                <ul class="highlights">
                    { for service.highlights.iter().map(|highlight| html! { <li>{*highlight}</li> }) }
                </ul>
                <button class="hero-cta" onclick={open_dialog}>{"Ask about this service"}</button>
            </section>
            <ConsultationDialog
                is_open={dialog_open}
                on_close={close_dialog}
                service={AttrValue::from(service.name)}
            />
            <style>
                {r#"
                .highlights {
                    line-height: 1.9;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
