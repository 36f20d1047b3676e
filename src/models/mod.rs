pub mod cpf;
pub mod error;

pub use cpf::*;
pub use error::ApiError;
