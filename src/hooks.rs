use yew::prelude::*;

/// Scroll to the top of the page on first mount only.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Open/closed state for a dialog plus the callbacks to drive it.
#[hook]
pub fn use_dialog_toggle() -> (bool, Callback<MouseEvent>, Callback<()>) {
    let is_open = use_state(|| false);
    let open = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(true);
        })
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };
    (*is_open, open, close)
}
