use yew::prelude::*;

use crate::components::consultation::{ConsultationDialog, CONTACT_EMAIL};
use crate::hooks::{use_dialog_toggle, use_scroll_to_top};
use crate::seo::structured_data::BUSINESS_PHONE;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let (dialog_open, open_dialog, close_dialog) = use_dialog_toggle();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact"}</h1>
                <p>{"Consultations are free and there is no obligation to enroll."}</p>
            </section>
            <section class="page-section contact-details">
                <div>
                    <h2>{"Phone"}</h2>
                    <p><a href={format!("tel:{}", BUSINESS_PHONE)}>{BUSINESS_PHONE}</a></p>
                </div>
                <div>
                    <h2>{"Email"}</h2>
                    <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                </div>
                <div>
                    <h2>{"Office hours"}</h2>
                    <p>{"Monday to Friday, 8am to 5pm HST"}</p>
                </div>
            </section>
            <section class="cta-band">
                <button class="hero-cta" onclick={open_dialog}>{"Book a free consultation"}</button>
            </section>
            <ConsultationDialog is_open={dialog_open} on_close={close_dialog} />
            <style>
                {r#"
                .contact-details {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .contact-details a {
                    color: #0b7a75;
                }
                "#}
            </style>
        </div>
    }
}
