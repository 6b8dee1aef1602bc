use astra::{Request, Server};
use showroom::content::FileContentSource;
use showroom::logging;
use showroom::responses::error_to_response;
use showroom::router::handle;
use showroom::{AppConfig, AppState};
use std::time::Instant;
use tracing::{error, info};

fn main() {
    // 1️⃣ Environment (.env is optional)
    dotenvy::dotenv().ok();
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };
    logging::init_logging(config.log_format);

    // 2️⃣ Load the inventory from the content directory
    let content = FileContentSource::new(&config.content_dir);
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = match AppState::load(config, Box::new(content)) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to load content");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!(%addr, workers, "starting server");
    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
