//! Checksum validators for Brazilian taxpayer ids.

pub mod tax_id;

pub use tax_id::{digits_only, validate_cnpj, validate_cpf};
