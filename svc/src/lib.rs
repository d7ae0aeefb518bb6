pub mod application;
pub mod configuration;
pub mod rest;
