use yew::prelude::*;
use yew_router::components::Link;
use yew_router::Routable;

use crate::blog::posts::{display_date, find_post};
use crate::components::json_ld::structured_data;
use crate::config::page_url;
use crate::hooks::use_scroll_to_top;
use crate::pages::not_found::NotFound;
use crate::seo::structured_data::create_article_record;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    use_scroll_to_top();

    let Some(post) = find_post(&props.slug) else {
        return html! { <NotFound /> };
    };

    let path = Route::BlogPost { slug: post.slug.to_string() }.to_path();
    let article = create_article_record(
        post.title,
        post.summary,
        post.published,
        post.modified,
        &page_url(&path),
    );

    html! {
        <div class="blog-page">
            { structured_data(&article) }
            <section class="page-hero">
                <h1>{post.title}</h1>
                <p>{post.summary}</p>
                <span class="blog-date">{display_date(post.published)}</span>
            </section>
            <section class="blog-content">
                { for post.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                <div class="blog-cta">
                    <h3>{"Have a question about your own situation?"}</h3>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Contact an advisor"}</button>
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                .blog-content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2rem;
                    line-height: 1.8;
                }
                .blog-cta {
                    text-align: center;
                    margin-top: 3rem;
                    padding: 2rem;
                    border-top: 1px solid #e3e9ee;
                }
                "#}
            </style>
        </div>
    }
}
