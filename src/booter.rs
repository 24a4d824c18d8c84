use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct Booter {
    pub port: u16,
    tcp_listener: TcpListener,
}

impl Booter {
    /// Binds 0.0.0.0 on the given port. Port 0 binds an ephemeral port; the
    /// resolved port is reported back through `self.port`.
    pub async fn new(port: u16) -> Result<Self, anyhow::Error> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let tcp_listener = TcpListener::bind(addr).await?;
        let port = tcp_listener.local_addr()?.port();

        Ok(Self { port, tcp_listener })
    }

    pub async fn start(self, router: Router) -> Result<(), anyhow::Error> {
        axum::serve(self.tcp_listener, router).await?;
        Ok(())
    }
}
