pub mod gen_client;
pub mod gen_client_error;
