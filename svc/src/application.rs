use actix_web::{dev::Server, http::header, App, HttpServer};
use actix_cors::Cors;
use futures::future;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::rest::{debug_handlers, user_handlers};

pub struct Application {
    application_port: u16,
    debug_port: u16,
    application_server: Server,
    debug_server: Server,
}

#[derive(Debug)]
pub enum ApplicationError {
    IoError(std::io::Error),
    ConfigurationError(config::ConfigError),
}

impl From<std::io::Error> for ApplicationError {
    fn from(value: std::io::Error) -> Self {
        ApplicationError::IoError(value)
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(value: config::ConfigError) -> Self {
        ApplicationError::ConfigurationError(value)
    }
}

impl Application {
    pub async fn build(
        configuration: crate::configuration::Configuration,
    ) -> Result<Self, ApplicationError> {
        let application_address =
            format_address(&configuration.server.host, configuration.server.api_port);
        let application_listener = TcpListener::bind(application_address)?;
        let application_port = application_listener.local_addr()?.port();
        let application_server = run_application_server(application_listener).await?;

        let debug_address =
            format_address(&configuration.server.host, configuration.server.debug_port);
        let debug_listener = TcpListener::bind(debug_address)?;
        let debug_port = debug_listener.local_addr()?.port();
        let debug_server = run_debug_server(debug_listener).await?;

        let application = Self {
            application_port,
            debug_port,
            application_server,
            debug_server,
        };

        Ok(application)
    }

    pub fn application_port(&self) -> u16 {
        self.application_port
    }

    pub fn debug_port(&self) -> u16 {
        self.debug_port
    }

    pub async fn serve(self) -> Result<(), ApplicationError> {
        future::try_join(self.application_server, self.debug_server).await?;
        Ok(())
    }
}

fn format_address(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

async fn run_application_server(listener: TcpListener) -> Result<Server, ApplicationError> {
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .send_wildcard()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(user_handlers::post_register)
    })
    .listen(listener)?
    .run();
    Ok(server)
}

async fn run_debug_server(listener: TcpListener) -> Result<Server, ApplicationError> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(debug_handlers::api())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
