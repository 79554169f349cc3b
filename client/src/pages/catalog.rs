//! Catalog landing page listing purchasable courses.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cart_badge::CartBadge;
use crate::components::course_card::CourseCard;
use crate::state::catalog::featured_courses;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let courses = featured_courses();

    view! {
        <Title text="Courses & Camps"/>
        <header class="page-header">
            <h1 class="page-header__title">"Courses & Camps"</h1>
            <CartBadge/>
        </header>
        <main class="catalog-grid">
            {courses.into_iter().map(|course| view! { <CourseCard course/> }).collect_view()}
        </main>
    }
}
