#![doc = "The `taskmanager` library crate."]
#![doc = ""]
#![doc = "Domain models, authentication, routing and error handling for the Task"]
#![doc = "Manager API. The binary (`main.rs`) wires these modules into a running"]
#![doc = "actix-web server; the integration tests build the same app in-process."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
