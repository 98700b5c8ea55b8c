pub mod codegen;
pub mod url_check;
