pub mod celular_repo;
pub use celular_repo::CelularRepository;
pub mod equipe_repo;
pub use equipe_repo::EquipeRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod whatsapp_repo;
pub use whatsapp_repo::WhatsappRepository;
