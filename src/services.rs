pub mod auth;
pub use auth::AuthService;
pub mod celular;
pub use celular::CelularService;
pub mod consultor;
pub use consultor::ConsultorService;
pub mod equipe;
pub use equipe::EquipeService;
pub mod whatsapp;
pub use whatsapp::WhatsappService;
