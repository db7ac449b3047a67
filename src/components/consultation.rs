use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::dialog::{Dialog, DialogFooter, DialogSize};
use crate::seo::structured_data::BUSINESS_PHONE;

pub const CONTACT_EMAIL: &str = "hello@makanabenefits.com";

pub fn consultation_mailto(service: Option<&str>) -> String {
    let subject = match service {
        Some(service) => format!("Consultation request: {}", service),
        None => "Consultation request".to_string(),
    };
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(&subject))
}

#[derive(Properties, PartialEq)]
pub struct ConsultationDialogProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Service the visitor was looking at, if any.
    #[prop_or_default]
    pub service: Option<AttrValue>,
}

#[function_component(ConsultationDialog)]
pub fn consultation_dialog(props: &ConsultationDialogProps) -> Html {
    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let mailto = consultation_mailto(props.service.as_deref());
    let tel = format!("tel:{}", BUSINESS_PHONE);

    html! {
        <Dialog
            is_open={props.is_open}
            on_close={props.on_close.clone()}
            title="Book a free consultation"
            description="Tell us a little about what you need and a licensed advisor will get back to you within one business day."
            size={DialogSize::Md}
        >
            <ul class="consultation-options">
                <li>{"Call us at "}<a href={tel}>{BUSINESS_PHONE}</a>{" (Mon–Fri, 8am–5pm HST)"}</li>
                <li>{"Email "}<a href={mailto.clone()}>{CONTACT_EMAIL}</a></li>
                <li>{"Visit our Honolulu office by appointment"}</li>
            </ul>
            <DialogFooter>
                <button class="dialog-button secondary" onclick={cancel}>{"Cancel"}</button>
                <a class="dialog-button primary" href={mailto}>{"Email us"}</a>
            </DialogFooter>
            <style>
                {r#"
                .consultation-options {
                    margin: 0;
                    padding-left: 1.2rem;
                    line-height: 1.8;
                }
                .consultation-options a {
                    color: #0b7a75;
                }
                .dialog-button {
                    padding: 0.6rem 1.2rem;
                    border-radius: 6px;
                    font-size: 0.95rem;
                    cursor: pointer;
                    text-decoration: none;
                    border: 1px solid transparent;
                }
                .dialog-button.primary {
                    background: #0b7a75;
                    color: #ffffff;
                }
                .dialog-button.secondary {
                    background: transparent;
                    color: #1d2b36;
                    border-color: #c9d4dc;
                }
                "#}
            </style>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            consultation_mailto(Some("Medicare Planning")),
            "mailto:hello@makanabenefits.com?subject=Consultation%20request%3A%20Medicare%20Planning"
        );
        assert_eq!(
            consultation_mailto(None),
            "mailto:hello@makanabenefits.com?subject=Consultation%20request"
        );
    }
}
