//! パスポート検索パネル

use leptos::prelude::*;
use web_sys::KeyboardEvent;

#[component]
pub fn SearchPanel<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (query, set_query) = signal(String::new());

    let submit = {
        let on_search = on_search.clone();
        move || {
            let q = query.get_untracked().trim().to_string();
            if !q.is_empty() {
                on_search(q);
            }
        }
    };

    let on_click = {
        let submit = submit.clone();
        move |_| submit()
    };

    let on_keydown = {
        let submit = submit.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                submit();
            }
        }
    };

    view! {
        <div class="search-panel">
            <input
                type="text"
                placeholder="鼻紋IDを入力（例: MUZ-ABC123XYZ）"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
                on:keydown=on_keydown
            />
            <button class="btn btn-primary" on:click=on_click>
                "検索"
            </button>
        </div>
    }
}
