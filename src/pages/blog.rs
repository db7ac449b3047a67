use yew::prelude::*;
use yew_router::components::Link;

use crate::blog::posts::{display_date, posts_by_date};
use crate::hooks::use_scroll_to_top;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();

    html! {
        <div class="blog-list-page">
            <section class="page-hero">
                <h1>{"Insights"}</h1>
                <p>{"Plain-language guides on Medicare, health plans and employee benefits"}</p>
            </section>
            <section class="blog-list-section">
                { for posts_by_date().into_iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <h2>{post.title}</h2>
                            <p>{post.summary}</p>
                            <span class="blog-date">{display_date(post.published)}</span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .blog-list-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-post-preview {
                    background: #ffffff;
                    border: 1px solid #e3e9ee;
                    border-radius: 12px;
                    margin-bottom: 2rem;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: #0b7a75;
                    transform: translateY(-5px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }
                .blog-post-preview h2 {
                    font-size: 1.6rem;
                    padding: 1.5rem 1.5rem 0;
                    color: #0b4f6c;
                }
                .blog-post-preview p {
                    color: #5b6b78;
                    padding: 0 1.5rem;
                    margin: 1rem 0;
                }
                .blog-date {
                    display: block;
                    padding: 0 1.5rem 1.5rem;
                    color: #8ea3b1;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .blog-list-section {
                        padding: 1rem;
                    }
                    .blog-post-preview h2 {
                        font-size: 1.35rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
