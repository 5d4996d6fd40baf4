// アプリケーション層モジュール
pub mod api_error;
pub mod event_dispatcher;
pub mod event_parser;
pub mod request_handler;
pub mod todo_created_listener;

// 再エクスポート
pub use api_error::{ApiError, ApiErrorBody};
pub use event_dispatcher::{DispatchReport, EventDispatcher, EventListener, ListenerError};
pub use event_parser::{EventParser, ParseError};
pub use request_handler::RequestHandler;
pub use todo_created_listener::TodoCreatedListener;
