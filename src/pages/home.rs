use leptos::prelude::*;

use crate::components::relation_graph::{GraphDocument, RelationGraph};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = GraphDocument::embedded().map(|document| view! { <RelationGraph document=document /> });

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<h1>"Philosophers"</h1>
				<p class="subtitle">"Who learned from whom. Click a portrait to read more."</p>
				{graph}
			</div>
		</ErrorBoundary>
	}
}
