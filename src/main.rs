//src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gastrometrics::{config::AppState, docs::ApiDoc, handlers};

#[tokio::main]
async fn main() {
    // Inicializa el logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() está bien aquí: si la configuración falla, la aplicación no
    // debe arrancar.
    let app_state = AppState::new()
        .await
        .expect("Fallo al inicializar el estado de la aplicación.");

    // Corre las migraciones de SQLx al arrancar
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Fallo al correr las migraciones de la base de datos.");

    tracing::info!("✅ Migraciones de la base de datos ejecutadas");

    // Una instalación vacía arranca con el catálogo de demostración
    if app_state
        .seed_service
        .seed_if_empty()
        .await
        .expect("Fallo al sembrar los datos de demostración.")
    {
        tracing::info!("✅ Base vacía: datos de demostración cargados");
    }

    let ingredientes_routes = Router::new()
        .route(
            "/",
            post(handlers::ingredientes::create_ingrediente)
                .get(handlers::ingredientes::get_all_ingredientes),
        )
        .route(
            "/{id}",
            get(handlers::ingredientes::get_ingrediente)
                .put(handlers::ingredientes::update_ingrediente)
                .delete(handlers::ingredientes::delete_ingrediente),
        );

    let platos_routes = Router::new()
        .route(
            "/",
            post(handlers::platos::create_plato).get(handlers::platos::get_all_platos),
        )
        .route(
            "/{id}",
            get(handlers::platos::get_plato)
                .put(handlers::platos::update_plato)
                .delete(handlers::platos::delete_plato),
        )
        .route("/{id}/costo", get(handlers::platos::get_costo_plato));

    let ventas_routes = Router::new().route(
        "/",
        post(handlers::ventas::create_venta).get(handlers::ventas::get_all_ventas),
    );

    let dashboard_routes =
        Router::new().route("/kpis", get(handlers::dashboard::get_kpis));

    let configuracion_routes =
        Router::new().route("/reset", post(handlers::configuracion::reset_datos));

    // Combina todo en el router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/ingredientes", ingredientes_routes)
        .nest("/api/platos", platos_routes)
        .nest("/api/ventas", ventas_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/configuracion", configuracion_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Arranca el servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Fallo al iniciar el listener TCP");
    tracing::info!("🚀 Servidor escuchando en {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Error en el servidor Axum");
}
