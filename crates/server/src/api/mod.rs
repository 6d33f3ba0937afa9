mod discover;
mod events;
mod handlers;
mod movies;
mod routes;
mod settings;

pub use routes::create_router;
