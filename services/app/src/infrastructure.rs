// インフラストラクチャ層モジュール
pub mod activity_recorder;
pub mod app_config;
pub mod logging;

// 再エクスポート
pub use activity_recorder::{ActivityRecorder, RecordError, TracingActivityRecorder};
pub use app_config::AppConfig;
pub use logging::init_logging;
