//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use web_sys::{File, Url};

use crate::components::{
    header::Header, passport_card::PassportCard, search_panel::SearchPanel,
    upload_zone::UploadZone,
};
use livestock_passport_common::{AnimalType, Passport, Vaccination};

/// 表示タブ
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Create,
    Search,
}

/// 検索タブで使うサンプル写真URL
const DEMO_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1516467508483-a7212febe31a?w=800&q=80";

/// デモ用のパスポート台帳データ
///
/// 永続化層は未実装のため、認識IDと写真以外は固定のサンプル
fn sample_passport(muzzle_id: String, photo_url: String) -> Passport {
    Passport {
        muzzle_id,
        animal_type: AnimalType::Cow,
        photo_url,
        owner: "山田牧場".to_string(),
        location: "北海道 十勝".to_string(),
        birth_date: "2022年3月15日".to_string(),
        vaccinations: vec![
            Vaccination {
                name: "口蹄疫ワクチン".to_string(),
                date: "2024年1月10日".to_string(),
                next_due: Some("2024年7月10日".to_string()),
            },
            Vaccination {
                name: "ブルセラ症ワクチン".to_string(),
                date: "2023年12月5日".to_string(),
                next_due: Some("2024年12月5日".to_string()),
            },
            Vaccination {
                name: "炭疽ワクチン".to_string(),
                date: "2023年11月20日".to_string(),
                next_due: None,
            },
        ],
        health_records: vec![
            "定期健診 2024年2月: 状態良好".to_string(),
            "軽度の感染症を治療 2024年1月: 完治".to_string(),
            "出生記録 2022年3月: 健康な子牛 35kg".to_string(),
        ],
        transaction_hash: Some("5KJp4w8XvPz...9mNqR2sT".to_string()),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::Create);
    let (passport, set_passport) = signal(None::<Passport>);

    // 認識完了ハンドラ: アップロード画像と認識IDからパスポートを組み立てる
    let on_upload_complete = move |file: File, muzzle_id: String| {
        let photo_url = Url::create_object_url_with_blob(&file).unwrap_or_default();
        set_passport.set(Some(sample_passport(muzzle_id, photo_url)));
    };

    // 検索ハンドラ: 永続化層が無いのでIDを差し込んだサンプルを返す
    let on_search = move |muzzle_id: String| {
        set_passport.set(Some(sample_passport(muzzle_id, DEMO_PHOTO_URL.to_string())));
    };

    view! {
        <div class="container">
            <Header />

            <section class="hero">
                <h1>"家畜デジタルパスポート"</h1>
                <p>"鼻紋認識による、ブロックチェーン検証付きの個体識別システム"</p>
                <div class="hero-badges">
                    <span class="hero-badge">"🛡 ブロックチェーン検証"</span>
                    <span class="hero-badge">"🗄 Solanaネットワーク"</span>
                </div>
            </section>

            <div class="tabs">
                <button
                    class=move || if active_tab.get() == Tab::Create { "tab active" } else { "tab" }
                    on:click=move |_| set_active_tab.set(Tab::Create)
                >
                    "パスポート作成"
                </button>
                <button
                    class=move || if active_tab.get() == Tab::Search { "tab active" } else { "tab" }
                    on:click=move |_| set_active_tab.set(Tab::Search)
                >
                    "パスポート検索"
                </button>
            </div>

            <Show when=move || active_tab.get() == Tab::Create>
                <div class="tab-panel">
                    <div class="card">
                        <h2>"新規パスポート作成"</h2>
                        <p class="text-muted">
                            "個体識別のため、鼻先がはっきり写った写真をアップロードしてください"
                        </p>
                        <UploadZone on_upload_complete=on_upload_complete />
                    </div>
                    {move || passport.get().map(|p| view! { <PassportCard passport=p /> })}
                </div>
            </Show>

            <Show when=move || active_tab.get() == Tab::Search>
                <div class="tab-panel">
                    <div class="card">
                        <h2>"既存パスポートの検索"</h2>
                        <p class="text-muted">"鼻紋IDを入力してパスポートを照会します"</p>
                        <SearchPanel on_search=on_search />
                    </div>
                    {move || passport.get().map(|p| view! { <PassportCard passport=p /> })}
                </div>
            </Show>

            <footer class="footer">
                <p>"Powered by Solana Blockchain ・ 鼻紋認識AI"</p>
                <p class="text-muted">"© 2024 LivestockID"</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passport_carries_recognized_id() {
        let passport = sample_passport("MUZ-AB12CD".to_string(), "blob:x".to_string());
        assert_eq!(passport.muzzle_id, "MUZ-AB12CD");
        assert_eq!(passport.photo_url, "blob:x");
        assert_eq!(passport.animal_type, AnimalType::Cow);
        assert_eq!(passport.vaccinations.len(), 3);
        assert!(!passport.health_records.is_empty());
    }
}
