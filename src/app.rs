//! Task List Frontend App
//!
//! Root component; reads loader settings from the host page.

use leptos::prelude::*;

use crate::components::TaskListView;
use crate::config::LoaderConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = LoaderConfig::from_document();

    view! {
        <main class="app-layout">
            <TaskListView config=config />
        </main>
    }
}
