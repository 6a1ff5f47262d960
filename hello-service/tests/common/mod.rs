use hello_service::startup::Application;
use service_core::config::Config;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub fn test_config(port: u16) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port,
        ..Config::default()
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    stop: oneshot::Sender<()>,
    server: JoinHandle<std::io::Result<()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Random port for testing
        let app = Application::build(test_config(0))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_until(async move {
            stopped.await.ok();
        }));

        TestApp {
            address,
            port,
            stop,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    pub async fn stop(self) -> std::io::Result<()> {
        let TestApp { stop, server, .. } = self;
        stop.send(()).ok();
        server.await.expect("Server task panicked")
    }
}
