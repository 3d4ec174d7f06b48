use leptos::prelude::*;

/// Shown instead of the list while the initial load is in flight
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner"></div>
        <h3>"Loading tasks..."</h3>
    }
}
