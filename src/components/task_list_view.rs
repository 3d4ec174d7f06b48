//! Task List View Component
//!
//! Owns the list state, runs the initial load and switches from the
//! spinner to the list once it settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpTaskSource;
use crate::components::{LoadingSpinner, NewTaskForm, TaskRow};
use crate::config::LoaderConfig;
use crate::loader;
use crate::store::{TaskListState, TaskListStateStoreFields};

#[component]
pub fn TaskListView(#[prop(optional)] config: Option<LoaderConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = Store::new(TaskListState::default());
    provide_context(store);

    let source = HttpTaskSource::new(config.endpoint);
    let limit = config.initial_limit;

    // Load once on mount. The load is dropped if the view goes away first.
    Effect::new(move |_| {
        let source = source.clone();
        tracing::info!(endpoint = source.endpoint(), limit, "loading tasks");
        let (load, abort_handle) = loader::start_initial_load(store, source, limit);
        on_cleanup(move || abort_handle.abort());
        spawn_local(load);
    });

    view! {
        <div class="todo">
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <h2>"Todo List"</h2>

                <NewTaskForm />

                <ul>
                    <For
                        each=move || store.tasks().get()
                        // completed is part of the key so toggled rows re-render
                        key=|task| (task.id.clone(), task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </div>
    }
}
