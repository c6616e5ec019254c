//! パスポートカードコンポーネント
//!
//! ワークフローまたは検索が生成したPassportをそのまま描画する

use leptos::prelude::*;
use livestock_passport_common::Passport;

#[component]
pub fn PassportCard(passport: Passport) -> impl IntoView {
    let vaccinations = passport
        .vaccinations
        .iter()
        .map(|vac| {
            view! {
                <div class="vaccination-row">
                    <div>
                        <p class="vaccination-name">{vac.name.clone()}</p>
                        <p class="text-muted">{format!("接種日: {}", vac.date)}</p>
                    </div>
                    {vac.next_due.clone().map(|due| view! {
                        <span class="badge">{format!("次回: {}", due)}</span>
                    })}
                </div>
            }
        })
        .collect_view();

    let health_records = passport
        .health_records
        .iter()
        .map(|record| {
            view! { <div class="health-record">{record.clone()}</div> }
        })
        .collect_view();

    view! {
        <div class="passport-card">
            <div class="passport-header">
                <div>
                    <h2>"デジタルパスポート"</h2>
                    <p class="text-muted">"Solanaブロックチェーンで検証済み"</p>
                </div>
                <span class="badge badge-verified">"✓ 検証済み"</span>
            </div>

            <div class="passport-body">
                <div class="passport-photo">
                    <img src=passport.photo_url.clone() alt="家畜の写真" />
                    <div class="muzzle-id-box">
                        <p class="text-muted">"鼻紋ID"</p>
                        <p class="muzzle-id">{passport.muzzle_id.clone()}</p>
                    </div>
                </div>

                <div class="passport-info">
                    <h3>"個体情報"</h3>
                    <p class="animal-type">
                        {passport.animal_type.emoji()}" "{passport.animal_type.label()}
                    </p>
                    <p>{format!("生年月日: {}", passport.birth_date)}</p>
                    <p>{format!("所在地: {}", passport.location)}</p>
                    <p>{format!("所有者: {}", passport.owner)}</p>

                    {passport.transaction_hash.clone().map(|hash| view! {
                        <div class="tx-box">
                            <p class="text-muted">"トランザクション"</p>
                            <p class="tx-hash">{hash}</p>
                        </div>
                    })}
                </div>
            </div>

            <div class="passport-section">
                <h3>"ワクチン接種記録"</h3>
                {vaccinations}
            </div>

            <div class="passport-section">
                <h3>"健康履歴"</h3>
                {health_records}
            </div>

            <div class="passport-actions">
                <button class="btn btn-secondary">"記録を更新"</button>
                <button class="btn btn-secondary">"所有権を移転"</button>
            </div>
        </div>
    }
}
