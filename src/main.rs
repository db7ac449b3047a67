use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod hooks;
mod seo {
    pub mod structured_data;
}
mod components {
    pub mod consultation;
    pub mod dialog;
    pub mod footer;
    pub mod json_ld;
    pub mod keyboard;
    pub mod scroll_lock;
}
mod content {
    pub mod faqs;
    pub mod navigation;
    pub mod services;
}
mod blog {
    pub mod posts;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use components::footer::Footer;
use content::navigation::nav_links;
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPostPage,
    contact::Contact,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    services::{ServiceDetail, Services},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/faq")]
    Faq,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail {slug} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            if let Ok(scroll_y) = window.scroll_y() {
                                is_scrolled.set(scroll_y > 80.0);
                            }
                        }
                    });

                    let added = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    match added {
                        Ok(()) => Box::new(move || {
                            if let Err(e) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                                warn!("Failed to remove scroll listener: {:?}", e);
                            }
                        }),
                        Err(e) => {
                            warn!("Failed to add scroll listener: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Makana Benefits"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links().into_iter().map(|link| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={link.route} classes="nav-link">
                                {link.label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Get a Quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1d2b36;
                    background: #f6f9fb;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #ffffff;
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #0b4f6c;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #1d2b36;
                    text-decoration: none;
                }
                .nav-contact-button, .hero-cta {
                    background: #0b7a75;
                    color: #ffffff;
                    border: none;
                    padding: 0.7rem 1.4rem;
                    border-radius: 6px;
                    font-size: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #0b4f6c;
                }
                .page-hero {
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    background: #e8f2f5;
                }
                .page-hero h1 {
                    font-size: 2.8rem;
                    color: #0b4f6c;
                    margin-bottom: 1rem;
                }
                .page-hero p {
                    font-size: 1.15rem;
                    color: #5b6b78;
                    max-width: 640px;
                    margin: 0 auto 1.5rem;
                }
                .page-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .page-section.alternate {
                    background: #ffffff;
                    max-width: none;
                }
                .cta-band {
                    text-align: center;
                    padding: 4rem 2rem;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #ffffff;
                    }
                    .page-hero h1 {
                        font-size: 2.1rem;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_build_slug_paths() {
        assert_eq!(
            Route::Service { slug: "medicare".to_string() }.to_path(),
            "/services/medicare"
        );
        assert_eq!(
            Route::BlogPost { slug: "open-enrollment-2026".to_string() }.to_path(),
            "/blog/open-enrollment-2026"
        );
    }

    #[test]
    fn every_service_and_post_has_a_route() {
        for service in content::services::SERVICES {
            let path = Route::Service { slug: service.slug.to_string() }.to_path();
            assert!(path.ends_with(service.slug));
        }
        for post in blog::posts::POSTS {
            let path = Route::BlogPost { slug: post.slug.to_string() }.to_path();
            assert!(path.starts_with("/blog/"));
        }
    }
}
