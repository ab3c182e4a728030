//! Surface web : formulaire HTML servi par axum.
//!
//! ```text
//! GET  /      formulaire pré-rempli depuis la query, résultats inline
//! POST /calc  validation puis 302 vers / avec seulement les champs non défaut
//! ```
//!
//! Chaque requête appelle le calcul pur ; aucun état mutable partagé.

pub mod form;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use anyhow::Context;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use tracing::info;

/// Sert le formulaire sur toutes les interfaces jusqu'à l'arrêt du process.
pub async fn serve(port: u16, state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    println!("Listening on:");
    for url in listen_urls(port) {
        println!("  {url}");
    }
    println!();
    info!(%addr, "web form ready");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// URLs à afficher au démarrage : loopback, puis l'IPv4 sortante si connue.
pub fn listen_urls(port: u16) -> Vec<String> {
    let mut urls = vec![format!("http://127.0.0.1:{port}/")];
    if let Some(ip) = primary_ipv4() {
        urls.push(format!("http://{ip}:{port}/"));
    }
    urls
}

// connect() sur UDP n'envoie rien, il fixe seulement l'adresse locale
fn primary_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect((Ipv4Addr::new(192, 0, 2, 1), 9)).ok()?;
    match socket.local_addr().ok()?.ip() {
        std::net::IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}
