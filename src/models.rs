pub mod auth;
pub mod celular;
pub mod equipe;
pub mod user;
pub mod whatsapp;
