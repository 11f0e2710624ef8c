pub mod contact;
pub mod cpf;
pub mod unit_code;

pub use contact::{is_valid_email, is_valid_phone};
pub use cpf::is_valid_cpf;
pub use unit_code::{is_valid_unit_code, normalize_unit_code};
