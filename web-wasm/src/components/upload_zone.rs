//! 鼻紋アップロードゾーンコンポーネント
//!
//! ファイルの受付から認識結果のハンドオフまでを
//! UploadWorkflow状態機械に従って進める。ブラウザ層が持つのは
//! 生のFileハンドル・FileReader・進捗タイマーだけで、
//! 表示の判断はすべて状態機械から導出する。

use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use livestock_passport_common::{FileMeta, UploadEvent, UploadWorkflow};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

use crate::api::muzzle;
use crate::components::progress_bar::ProgressBar;

/// 進捗タイマーの周期（ミリ秒）
const PROGRESS_TICK_MS: u32 = 300;

/// 100%を見せてから終端遷移するまでの待機（ミリ秒）
const HANDOFF_DELAY_MS: u32 = 500;

/// イベントを状態機械へ送る。状態が遷移した場合のみtrue
fn dispatch(workflow: RwSignal<UploadWorkflow>, event: UploadEvent) -> bool {
    workflow.try_update(|wf| wf.apply(event)).unwrap_or(false)
}

#[component]
pub fn UploadZone<F>(on_upload_complete: F) -> impl IntoView
where
    F: Fn(File, String) + 'static + Send + Sync,
{
    let workflow = RwSignal::new(UploadWorkflow::new());
    let on_complete = StoredValue::new(on_upload_complete);
    let raw_file = StoredValue::new_local(None::<File>);
    let progress_timer = StoredValue::new_local(None::<Interval>);
    let (is_dragover, set_is_dragover) = signal(false);

    // アンマウント時に進捗タイマーを確実に止める
    on_cleanup(move || {
        progress_timer.try_update_value(|timer| {
            timer.take();
        });
    });

    // ドロップとファイル選択ダイアログの共通入口
    let accept_file = move |file: File| {
        let meta = FileMeta {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        };
        if !dispatch(workflow, UploadEvent::FileSelected { file: meta }) {
            // 検証で却下された候補はここで捨てられる
            return;
        }
        raw_file.set_value(Some(file.clone()));
        let generation = workflow.with_untracked(|wf| wf.generation());
        read_preview(&file, generation, workflow);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(dt) = ev.data_transfer() {
            if let Some(file) = dt.files().and_then(|files| files.get(0)) {
                accept_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_pick = move |_| {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept("image/*");

        let input_clone = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(file) = input_clone.files().and_then(|files| files.get(0)) {
                accept_file(file);
            }
        }) as Box<dyn FnMut(_)>);
        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    // 解析開始（Failedからの再試行も同じ経路）
    let on_analyze = move |_| {
        if !dispatch(workflow, UploadEvent::SubmitPressed) {
            // 送信中の二重開始はここで無効化される
            return;
        }
        let Some(file) = raw_file.get_value() else {
            return;
        };
        let generation = workflow.with_untracked(|wf| wf.generation());

        // 結果確定までは90%で頭打ちの進捗演出
        progress_timer.set_value(Some(Interval::new(PROGRESS_TICK_MS, move || {
            dispatch(workflow, UploadEvent::ProgressTicked);
        })));

        spawn_local(async move {
            let outcome = muzzle::detect_muzzle(&file).await;

            // 成否にかかわらずタイマーはここで必ず止める
            progress_timer.try_update_value(|timer| {
                timer.take();
            });

            match outcome {
                Ok(recognition) => {
                    if !dispatch(workflow, UploadEvent::AnalysisSucceeded { generation }) {
                        return;
                    }
                    // 100%を見せてから終端遷移する
                    TimeoutFuture::new(HANDOFF_DELAY_MS).await;
                    let muzzle_id = recognition.muzzle_id;
                    if dispatch(
                        workflow,
                        UploadEvent::HandoffReached {
                            generation,
                            muzzle_id: muzzle_id.clone(),
                        },
                    ) {
                        on_complete.with_value(|callback| callback(file, muzzle_id));
                    }
                }
                Err(error) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "解析エラー: {}",
                        error
                    )));
                    dispatch(workflow, UploadEvent::AnalysisFailed { generation, error });
                }
            }
        });
    };

    let on_clear = move |_| {
        if dispatch(workflow, UploadEvent::Cleared) {
            raw_file.set_value(None);
        }
    };

    let progress = Signal::derive(move || workflow.with(|wf| wf.progress().unwrap_or(0)));
    let has_preview = move || workflow.with(|wf| wf.preview().is_some());
    let has_error = move || workflow.with(|wf| wf.error().is_some());
    let is_submitting = move || workflow.with(|wf| wf.is_submitting());
    let is_succeeded = move || workflow.with(|wf| wf.is_succeeded());
    let can_submit = move || workflow.with(|wf| wf.can_submit());

    view! {
        <div class="upload-zone">
            <Show when=has_error>
                <div class="alert alert-error">
                    {move || workflow.with(|wf| {
                        wf.error().map(|e| e.to_string()).unwrap_or_default()
                    })}
                </div>
            </Show>

            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <Show
                    when=has_preview
                    fallback=move || view! {
                        <div class="upload-placeholder" on:click=on_pick>
                            <div class="upload-icon">"📷"</div>
                            <p>"鼻紋写真をドラッグ&ドロップ または クリックして選択"</p>
                            <p class="text-muted">"対応形式: JPG・PNG・WEBP（最大10MB）"</p>
                        </div>
                    }
                >
                    <div class="upload-preview">
                        <img
                            src=move || workflow.with(|wf| {
                                wf.preview().map(str::to_string).unwrap_or_default()
                            })
                            alt="アップロード画像のプレビュー"
                        />

                        <Show when=is_submitting>
                            <ProgressBar progress=progress />
                        </Show>

                        <Show when=is_succeeded>
                            <p class="analyze-done">
                                {move || workflow.with(|wf| {
                                    wf.muzzle_id()
                                        .map(|id| format!("認識完了: {}", id))
                                        .unwrap_or_default()
                                })}
                            </p>
                        </Show>

                        <Show when=move || !is_submitting()>
                            <div class="upload-actions">
                                <Show when=can_submit>
                                    <button class="btn btn-primary" on:click=on_analyze>
                                        "鼻紋を解析"
                                    </button>
                                </Show>
                                <button class="btn btn-secondary" on:click=on_clear>
                                    "クリア"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// FileReaderでData URLプレビューを生成する
///
/// 完了・失敗とも世代付きイベントで状態機械へ届けるため、
/// ファイルが差し替え・クリア済みなら結果は自然に破棄される
fn read_preview(file: &File, generation: u64, workflow: RwSignal<UploadWorkflow>) {
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|v| v.as_string()) {
            Some(data_url) => {
                dispatch(workflow, UploadEvent::PreviewLoaded { generation, data_url });
            }
            None => {
                dispatch(workflow, UploadEvent::PreviewFailed { generation });
            }
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        dispatch(workflow, UploadEvent::PreviewFailed { generation });
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let _ = reader.read_as_data_url(file);
}
