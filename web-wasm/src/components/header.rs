//! ヘッダーコンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[component]
pub fn Header() -> impl IntoView {
    let on_connect_wallet = move |_| {
        // ウォレット連携は対象外。デモではログのみ
        web_sys::console::log_1(&JsValue::from_str("Connect wallet"));
    };

    view! {
        <header class="header">
            <div class="brand">
                <span class="brand-icon">"🐄"</span>
                <div>
                    <h1>"LivestockID"</h1>
                    <p class="text-muted">"ブロックチェーン家畜パスポート"</p>
                </div>
            </div>
            <button class="btn btn-primary" on:click=on_connect_wallet>
                "ウォレット接続"
            </button>
        </header>
    }
}
