use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::json_ld::structured_data;
use crate::content::faqs::{all_faqs, FAQ_SECTIONS};
use crate::hooks::use_scroll_to_top;
use crate::seo::structured_data::create_faq_record;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_scroll_to_top();
    let record = create_faq_record(&all_faqs());

    html! {
        <div class="faq-page">
            { structured_data(&record) }
            <section class="page-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Straight answers about coverage, enrollment and how we work"}</p>
            </section>

            <section class="faq-section">
                { for FAQ_SECTIONS.iter().map(|section| html! {
                    <>
                        <h2>{section.heading}</h2>
                        { for section.entries.iter().map(|entry| html! {
                            <FaqItem question={entry.question} answer={entry.answer} />
                        }) }
                    </>
                }) }
            </section>
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .faq-section h2 {
                    font-size: 1.8rem;
                    margin: 3rem 0 1.5rem;
                    color: #0b4f6c;
                }
                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e3e9ee;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .faq-item:hover {
                    border-color: #0b7a75;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #1d2b36;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #0b7a75;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #5b6b78;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
