use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::keyboard::{is_escape, KeySource, WindowKeys};
use crate::components::scroll_lock::{body_scroll_lock, ScrollLock, ScrollLockGuard, ScrollTarget};

// Every size is part of the component API even where the site only uses one.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl DialogSize {
    pub fn class(self) -> &'static str {
        match self {
            DialogSize::Sm => "dialog-sm",
            DialogSize::Md => "dialog-md",
            DialogSize::Lg => "dialog-lg",
            DialogSize::Xl => "dialog-xl",
            DialogSize::Full => "dialog-full",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub size: DialogSize,
    #[prop_or(true)]
    pub show_close_button: bool,
}

/// The most recent `on_close` a dialog was rendered with. Refreshed on every
/// render so the Escape listener never calls a stale callback.
pub type CloseHandle = Rc<RefCell<Callback<()>>>;

/// Side effects held for as long as a dialog stays open. Dropping it removes
/// the key listener and gives back the scroll lock.
pub struct OpenDialog<T: ScrollTarget, R> {
    _keys: R,
    _scroll: ScrollLockGuard<T>,
}

pub fn open_dialog<T, K>(
    scroll: &Rc<ScrollLock<T>>,
    keys: &K,
    on_close: CloseHandle,
) -> OpenDialog<T, K::Registration>
where
    T: ScrollTarget,
    K: KeySource,
{
    let registration = keys.on_keydown(Rc::new(move |key: &str| {
        if is_escape(key) {
            // Clone out first: the emit may re-render the dialog, which
            // replaces the callback behind this handle.
            let current = on_close.borrow().clone();
            current.emit(());
        }
    }));
    OpenDialog {
        _keys: registration,
        _scroll: scroll.acquire(),
    }
}

/// `None` while closed, so a closed dialog holds nothing.
pub fn dialog_effects<T, K>(
    is_open: bool,
    scroll: &Rc<ScrollLock<T>>,
    keys: &K,
    on_close: CloseHandle,
) -> Option<OpenDialog<T, K::Registration>>
where
    T: ScrollTarget,
    K: KeySource,
{
    is_open.then(|| open_dialog(scroll, keys, on_close))
}

pub fn shows_header(has_title: bool, show_close_button: bool) -> bool {
    has_title || show_close_button
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogAria {
    pub labelled_by: Option<String>,
    pub described_by: Option<String>,
}

impl DialogAria {
    pub fn new(instance: usize, has_title: bool, has_description: bool) -> Self {
        Self {
            labelled_by: has_title.then(|| format!("dialog-{}-title", instance)),
            described_by: has_description.then(|| format!("dialog-{}-description", instance)),
        }
    }
}

static NEXT_DIALOG_ID: AtomicUsize = AtomicUsize::new(0);

fn next_dialog_id() -> usize {
    NEXT_DIALOG_ID.fetch_add(1, Ordering::Relaxed)
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let instance = use_state(next_dialog_id);
    let latest_on_close = use_mut_ref(|| props.on_close.clone());
    *latest_on_close.borrow_mut() = props.on_close.clone();

    {
        let on_close = latest_on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let effects = dialog_effects(*is_open, &body_scroll_lock(), &WindowKeys, on_close);
                move || drop(effects)
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the panel must not reach the backdrop handler.
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let aria = DialogAria::new(*instance, props.title.is_some(), props.description.is_some());

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div
                class={classes!("dialog-panel", props.size.class())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={aria.labelled_by.clone()}
                aria-describedby={aria.described_by.clone()}
                onclick={on_panel_click}
            >
                {
                    if shows_header(props.title.is_some(), props.show_close_button) {
                        html! {
                            <div class="dialog-header">
                                <div class="dialog-heading">
                                    {
                                        if let Some(title) = &props.title {
                                            html! { <h2 id={aria.labelled_by.clone()} class="dialog-title">{title.clone()}</h2> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if let Some(description) = &props.description {
                                            html! { <p id={aria.described_by.clone()} class="dialog-description">{description.clone()}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                {
                                    if props.show_close_button {
                                        html! {
                                            <button class="dialog-close" aria-label="Close dialog" onclick={on_close_click}>
                                                {"×"}
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else if let Some(description) = &props.description {
                        html! { <p id={aria.described_by.clone()} class="dialog-description">{description.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="dialog-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(10, 20, 30, 0.6);
                    backdrop-filter: blur(3px);
                }
                .dialog-panel {
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #ffffff;
                    color: #1d2b36;
                    border-radius: 12px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                    display: flex;
                    flex-direction: column;
                }
                .dialog-sm { max-width: 24rem; }
                .dialog-md { max-width: 32rem; }
                .dialog-lg { max-width: 48rem; }
                .dialog-xl { max-width: 64rem; }
                .dialog-full { max-width: calc(100vw - 2rem); }
                .dialog-header {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem 0;
                }
                .dialog-title {
                    margin: 0;
                    font-size: 1.3rem;
                    color: #0b4f6c;
                }
                .dialog-description {
                    margin: 0.4rem 0 0;
                    color: #5b6b78;
                    font-size: 0.95rem;
                }
                .dialog-close {
                    margin-left: auto;
                    background: none;
                    border: none;
                    font-size: 1.6rem;
                    line-height: 1;
                    cursor: pointer;
                    color: #5b6b78;
                }
                .dialog-close:hover {
                    color: #0b4f6c;
                }
                .dialog-body {
                    padding: 1.25rem 1.5rem 1.5rem;
                }
                .dialog-footer {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid #e3e9ee;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogFooterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Right-aligned action row for the bottom of a dialog.
#[function_component(DialogFooter)]
pub fn dialog_footer(props: &DialogFooterProps) -> Html {
    html! {
        <div class="dialog-footer">
            { for props.children.iter() }
        </div>
    }
}
