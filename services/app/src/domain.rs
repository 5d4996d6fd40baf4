// ドメイン層モジュール
pub mod app_event;
pub mod data_payload;
pub mod event_name;
pub mod route;
pub mod todo;

// 再エクスポート
pub use app_event::AppEvent;
pub use data_payload::{DataPayload, DataPayloadError};
pub use event_name::{EventName, EventNameError, TODO_CREATED};
pub use route::{normalize_path, resolve_route, Route, RouteKind, ROUTES};
pub use todo::Todo;
