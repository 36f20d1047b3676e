pub mod cpf_handlers;
