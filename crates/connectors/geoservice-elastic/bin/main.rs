use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use geoservice_elastic::connector::GeoserviceSetup;
use geoservice_elastic::routes::create_router;
use geoservice_elastic_configuration::environment::ProcessEnvironment;

#[derive(Parser)]
#[command(version, about = "Serve geoservice queries from an Elasticsearch cluster")]
struct ServerOptions {
    /// Directory holding configuration.json.
    #[arg(long, env = "GEOSERVICE_CONFIGURATION", value_name = "DIRECTORY")]
    configuration: PathBuf,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();
    let options = ServerOptions::parse();

    match serve(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(options: ServerOptions) -> anyhow::Result<()> {
    let setup = GeoserviceSetup::new(ProcessEnvironment);
    let configuration = setup.parse_configuration(&options.configuration).await?;

    let mut metrics = prometheus::Registry::new();
    let provider = setup.try_init_state(configuration, &mut metrics).await?;
    let router = create_router(provider, metrics);

    let address = SocketAddr::from(([0, 0, 0, 0], options.port));
    tracing::info!("Starting server on {address}");

    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
