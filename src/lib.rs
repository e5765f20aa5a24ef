pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod pages;
pub mod repository;
pub mod service;
