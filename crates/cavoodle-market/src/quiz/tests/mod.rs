mod common;
mod engine;
mod routing;
mod service;
