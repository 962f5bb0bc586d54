//! Server resolution and call routing

mod dispatcher;
mod servers;


pub use dispatcher::Dispatcher;
pub use servers::ServerRegistry;
