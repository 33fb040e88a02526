use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
mod format;
mod i18n;
mod paging;
mod routes;

use auth::AuthState;
use i18n::LangState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let pool = server::db::create_pool();
        if let Err(e) = server::db::run_migrations(&pool).await {
            tracing::error!(error = %e, "database migrations failed");
        }

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(pool.clone()));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                pool,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    let preferred = use_server_future(move || async move { server::api::get_preferred_lang().await })?;
    let initial_lang = preferred
        .read()
        .as_ref()
        .and_then(|res| res.as_ref().ok().copied())
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    let lang_state = use_context_provider(|| LangState::with_lang(initial_lang));
    let lang = (lang_state.lang)();
    use_effect(move || i18n::sync_document((lang_state.lang)()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        document::Title { {shared_types::t(lang, shared_types::Msg::AppName)} }
        shared_ui::ToastProvider {
            div {
                class: "app-root",
                lang: lang.code(),
                dir: lang.dir(),
                SuspenseBoundary {
                    fallback: move |_| rsx! {
                        div { class: "page-loading",
                            p { {shared_types::t(lang, shared_types::Msg::Loading)} }
                        }
                    },
                    Router::<Route> {}
                }
            }
        }
    }
}
