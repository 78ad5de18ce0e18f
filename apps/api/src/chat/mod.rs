// Career assistant chat. Stateless: the client re-sends prior turns on every request.

pub mod handlers;
pub mod models;
