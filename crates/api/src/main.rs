#[tokio::main]
async fn main() {
    innkeep_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let app = innkeep_api::app::build_app(jwt_secret);

    let addr = bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Bind address from `BIND_ADDR`, falling back to the dev default.
fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_honors_the_environment() {
        // Single test in this binary, so the env mutation cannot race.
        unsafe { std::env::set_var("BIND_ADDR", "127.0.0.1:9100") };
        assert_eq!(bind_addr(), "127.0.0.1:9100");

        unsafe { std::env::remove_var("BIND_ADDR") };
        assert_eq!(bind_addr(), "0.0.0.0:8080");
    }
}
