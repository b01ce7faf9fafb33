// src/handlers.rs

pub mod auth;
pub mod celulares;
pub mod consultores;
pub mod equipes;
pub mod whatsapp;
