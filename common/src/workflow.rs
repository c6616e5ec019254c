//! 鼻紋アップロードワークフローの状態機械
//!
//! UI操作と非同期完了をUploadEventとして受け取り、apply()一箇所で
//! 状態遷移を行う。レンダリング層なしでテスト可能。
//!
//! 遅延コールバック対策として世代カウンタを持つ: 対象ファイルが
//! 差し替わるたびに世代が進み、古い世代を持つ完了イベントは無視される。

use crate::error::UploadError;
use crate::validate::validate;

/// 選択中ファイルのメタ情報
///
/// 生のFileハンドルはブラウザ層が保持し、状態機械はメタ情報のみ扱う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// ワークフローの状態
///
/// ファイルとプレビューを状態自身が保持するため、
/// 「ファイルを持つのはEmpty以外」という不変条件が型で保証される
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    /// ファイル未選択
    Empty,
    /// 検証済み、プレビュー生成待ち
    Previewing { file: FileMeta },
    /// 送信可能
    Ready { file: FileMeta, preview: String },
    /// 送信中
    Submitting {
        file: FileMeta,
        preview: String,
        progress: u8,
    },
    /// 送信失敗（ファイルは保持され再試行可能）
    Failed {
        file: FileMeta,
        preview: String,
        error: UploadError,
    },
    /// 認識完了
    Succeeded {
        file: FileMeta,
        preview: String,
        muzzle_id: String,
    },
}

/// ワークフローイベント
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// ファイルが選択された（ドロップ/ピッカー共通の入口）
    FileSelected { file: FileMeta },
    /// プレビューのデコード完了
    PreviewLoaded { generation: u64, data_url: String },
    /// プレビューのデコード失敗
    PreviewFailed { generation: u64 },
    /// 解析開始の操作
    SubmitPressed,
    /// 進捗タイマーのティック
    ProgressTicked,
    /// 認識サービスから成功応答
    AnalysisSucceeded { generation: u64 },
    /// 認識サービスから失敗応答（ネットワーク障害含む）
    AnalysisFailed { generation: u64, error: UploadError },
    /// 完了表示の待機が明けた（終端遷移）
    HandoffReached { generation: u64, muzzle_id: String },
    /// クリア操作
    Cleared,
}

/// 結果確定までの進捗上限
const PROGRESS_CEILING: u8 = 90;
/// 1ティックあたりの進捗増分
const PROGRESS_STEP: u8 = 10;

/// アップロードワークフロー本体
///
/// rejectionはファイルが確保されないエラー（検証却下・デコード失敗）の
/// 表示用通知で、保持中の状態とは独立に出し入れされる
#[derive(Debug, Clone)]
pub struct UploadWorkflow {
    state: UploadState,
    rejection: Option<UploadError>,
    generation: u64,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self {
            state: UploadState::Empty,
            rejection: None,
            generation: 0,
        }
    }
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の状態
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// 現在の世代
    ///
    /// 非同期処理の開始時に取得して完了イベントに添える
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 選択中ファイルのメタ情報
    pub fn file(&self) -> Option<&FileMeta> {
        match &self.state {
            UploadState::Empty => None,
            UploadState::Previewing { file }
            | UploadState::Ready { file, .. }
            | UploadState::Submitting { file, .. }
            | UploadState::Failed { file, .. }
            | UploadState::Succeeded { file, .. } => Some(file),
        }
    }

    /// プレビュー（Data URL）
    pub fn preview(&self) -> Option<&str> {
        match &self.state {
            UploadState::Ready { preview, .. }
            | UploadState::Submitting { preview, .. }
            | UploadState::Failed { preview, .. }
            | UploadState::Succeeded { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// 送信中の進捗（Submitting時のみSome）
    pub fn progress(&self) -> Option<u8> {
        match &self.state {
            UploadState::Submitting { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    /// 認識されたID（Succeeded時のみSome）
    pub fn muzzle_id(&self) -> Option<&str> {
        match &self.state {
            UploadState::Succeeded { muzzle_id, .. } => Some(muzzle_id),
            _ => None,
        }
    }

    /// ユーザーに表示するエラー
    ///
    /// 直近の候補却下通知を優先し、次に送信失敗エラーを返す
    pub fn error(&self) -> Option<&UploadError> {
        if let Some(rejection) = &self.rejection {
            return Some(rejection);
        }
        match &self.state {
            UploadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, UploadState::Submitting { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.state, UploadState::Succeeded { .. })
    }

    /// 解析を開始できるか（送信可能、または失敗からの再試行）
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            UploadState::Ready { .. } | UploadState::Failed { .. }
        )
    }

    /// イベントを適用する。状態が遷移した場合のみtrueを返す
    ///
    /// 却下通知の更新のみ（遷移なし）はfalse。呼び出し側は戻り値で
    /// 後続処理（デコード開始・送信開始・ハンドオフ）を判断する
    pub fn apply(&mut self, event: UploadEvent) -> bool {
        match event {
            UploadEvent::FileSelected { file } => self.on_file_selected(file),
            UploadEvent::PreviewLoaded {
                generation,
                data_url,
            } => self.on_preview_loaded(generation, data_url),
            UploadEvent::PreviewFailed { generation } => self.on_preview_failed(generation),
            UploadEvent::SubmitPressed => self.on_submit_pressed(),
            UploadEvent::ProgressTicked => self.on_progress_ticked(),
            UploadEvent::AnalysisSucceeded { generation } => self.on_analysis_succeeded(generation),
            UploadEvent::AnalysisFailed { generation, error } => {
                self.on_analysis_failed(generation, error)
            }
            UploadEvent::HandoffReached {
                generation,
                muzzle_id,
            } => self.on_handoff_reached(generation, muzzle_id),
            UploadEvent::Cleared => self.on_cleared(),
        }
    }

    fn on_file_selected(&mut self, file: FileMeta) -> bool {
        if self.is_submitting() {
            return false;
        }
        if let Err(error) = validate(&file.mime_type, file.size) {
            // 候補のみ破棄し、保持中のファイルには触れない
            self.rejection = Some(error);
            return false;
        }
        self.generation += 1;
        self.rejection = None;
        self.state = UploadState::Previewing { file };
        true
    }

    fn on_preview_loaded(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.generation {
            // 差し替え・クリア済みファイルの遅延デコード結果は捨てる
            return false;
        }
        match &self.state {
            UploadState::Previewing { file } => {
                self.state = UploadState::Ready {
                    file: file.clone(),
                    preview: data_url,
                };
                true
            }
            _ => false,
        }
    }

    fn on_preview_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        if !matches!(self.state, UploadState::Previewing { .. }) {
            return false;
        }
        // 検証は通ったがデコード不能。ファイルを破棄して選び直してもらう
        self.generation += 1;
        self.rejection = Some(UploadError::PreviewDecode);
        self.state = UploadState::Empty;
        true
    }

    fn on_submit_pressed(&mut self) -> bool {
        match &self.state {
            UploadState::Ready { file, preview }
            | UploadState::Failed { file, preview, .. } => {
                self.rejection = None;
                self.state = UploadState::Submitting {
                    file: file.clone(),
                    preview: preview.clone(),
                    progress: 0,
                };
                true
            }
            // Submitting中の二重送信もここで無効化される
            _ => false,
        }
    }

    fn on_progress_ticked(&mut self) -> bool {
        match &mut self.state {
            UploadState::Submitting { progress, .. } if *progress < PROGRESS_CEILING => {
                *progress = (*progress + PROGRESS_STEP).min(PROGRESS_CEILING);
                true
            }
            _ => false,
        }
    }

    fn on_analysis_succeeded(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match &mut self.state {
            UploadState::Submitting { progress, .. } => {
                // 終端遷移の直前に100%を表示する
                *progress = 100;
                true
            }
            _ => false,
        }
    }

    fn on_analysis_failed(&mut self, generation: u64, error: UploadError) -> bool {
        if generation != self.generation {
            return false;
        }
        match &self.state {
            UploadState::Submitting { file, preview, .. } => {
                self.state = UploadState::Failed {
                    file: file.clone(),
                    preview: preview.clone(),
                    error,
                };
                true
            }
            _ => false,
        }
    }

    fn on_handoff_reached(&mut self, generation: u64, muzzle_id: String) -> bool {
        if generation != self.generation {
            return false;
        }
        match &self.state {
            UploadState::Submitting { file, preview, .. } => {
                self.state = UploadState::Succeeded {
                    file: file.clone(),
                    preview: preview.clone(),
                    muzzle_id,
                };
                true
            }
            _ => false,
        }
    }

    fn on_cleared(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.generation += 1;
        self.rejection = None;
        self.state = UploadState::Empty;
        true
    }
}
