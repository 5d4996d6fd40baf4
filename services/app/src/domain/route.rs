/// HTTPルート定義
///
/// (メソッド, パス) の組をハンドラー種別に対応づける静的テーブル。
/// ルーティングは完全一致のみで、実行時のリフレクションは行わない。
use lambda_http::http::Method;

/// ルートに対応するハンドラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// GET /
    Root,
    /// GET /hello
    Hello,
    /// POST /data
    Data,
}

/// (メソッド, パス) → ハンドラー種別 の1エントリ
#[derive(Debug)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub kind: RouteKind,
}

/// 宣言済みルートの一覧
pub static ROUTES: [Route; 3] = [
    Route {
        method: Method::GET,
        path: "/",
        kind: RouteKind::Root,
    },
    Route {
        method: Method::GET,
        path: "/hello",
        kind: RouteKind::Hello,
    },
    Route {
        method: Method::POST,
        path: "/data",
        kind: RouteKind::Data,
    },
];

/// メソッドとパスからルートを解決する
///
/// パスは`normalize_path`で正規化してから比較する。
/// パスが存在してもメソッドが異なる場合は`None`を返す。
pub fn resolve_route(method: &Method, path: &str) -> Option<RouteKind> {
    let path = normalize_path(path);

    ROUTES
        .iter()
        .find(|route| route.method == *method && route.path == path)
        .map(|route| route.kind)
}

/// パスを正規化する
///
/// - 空文字は "/" として扱う
/// - ルート以外の末尾スラッシュを1つだけ取り除く
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() {
        return "/";
    }

    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_declared_routes() {
        assert_eq!(resolve_route(&Method::GET, "/"), Some(RouteKind::Root));
        assert_eq!(resolve_route(&Method::GET, "/hello"), Some(RouteKind::Hello));
        assert_eq!(resolve_route(&Method::POST, "/data"), Some(RouteKind::Data));
    }

    #[test]
    fn test_resolve_unknown_path_returns_none() {
        assert_eq!(resolve_route(&Method::GET, "/missing"), None);
        assert_eq!(resolve_route(&Method::GET, "/hello/world"), None);
    }

    /// パスが一致してもメソッドが異なればマッチしない
    #[test]
    fn test_resolve_method_mismatch_returns_none() {
        assert_eq!(resolve_route(&Method::GET, "/data"), None);
        assert_eq!(resolve_route(&Method::POST, "/"), None);
        assert_eq!(resolve_route(&Method::DELETE, "/hello"), None);
    }

    #[test]
    fn test_resolve_ignores_single_trailing_slash() {
        assert_eq!(resolve_route(&Method::GET, "/hello/"), Some(RouteKind::Hello));
        assert_eq!(resolve_route(&Method::POST, "/data/"), Some(RouteKind::Data));
        assert_eq!(resolve_route(&Method::GET, "/hello//"), None);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve_route(&Method::GET, "/Hello"), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/hello"), "/hello");
        assert_eq!(normalize_path("/hello/"), "/hello");
    }

    /// テーブル内に同じ(メソッド, パス)の重複がない
    #[test]
    fn test_routes_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in ROUTES.iter().skip(i + 1) {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate route: {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }
}
