//! Catalog card with option picker and add-to-cart action.

use leptos::prelude::*;

use crate::state::cart::{add_to_cart, use_cart};
use crate::state::catalog::CourseOffering;
use crate::util::money::format_price;

/// One course in the catalog grid.
#[component]
pub fn CourseCard(course: CourseOffering) -> impl IntoView {
    let cart = use_cart();
    let selected = RwSignal::new(0_usize);
    let error = RwSignal::new(None::<String>);
    let just_added = RwSignal::new(false);

    let category = course.category.clone();
    let name = course.name.clone();
    let summary = course.summary.clone();
    let instructor = course.instructor.clone();
    let from_label = course.starting_price().map(|price| format!("from {}", format_price(price)));

    let option_views = course
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            view! {
                <option value=index.to_string()>
                    {format!("{} · {}", option.label(), format_price(option.price))}
                </option>
            }
        })
        .collect_view();

    let selected_price = {
        let options = course.options.clone();
        move || options.get(selected.get()).map(|option| format_price(option.price)).unwrap_or_default()
    };

    let on_select = move |ev: leptos::ev::Event| {
        selected.set(event_target_value(&ev).parse::<usize>().unwrap_or(0));
        just_added.set(false);
    };

    let on_add = move |_| {
        let Some(option) = course.options.get(selected.get_untracked()) else {
            return;
        };
        match add_to_cart(cart, course.to_cart_item(option)) {
            Ok(()) => {
                error.set(None);
                just_added.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <article class="course-card">
            <span class="course-card__category">{category}</span>
            <h3 class="course-card__name">{name}</h3>
            <p class="course-card__summary">{summary}</p>
            {instructor.map(|who| view! { <p class="course-card__instructor">{format!("with {who}")}</p> })}
            {from_label.map(|label| view! { <span class="course-card__from">{label}</span> })}
            <select class="course-card__options" on:change=on_select>
                {option_views}
            </select>
            <div class="course-card__footer">
                <span class="course-card__price">{selected_price}</span>
                <button class="course-card__add" on:click=on_add>
                    {move || if just_added.get() { "Added ✓" } else { "Add to cart" }}
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="course-card__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
