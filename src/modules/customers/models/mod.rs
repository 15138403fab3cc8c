mod customer;
mod customer_dto;

pub use customer::{Address, Customer};
pub use customer_dto::{is_valid_cpf, is_valid_email, CustomerDto, CustomerUpdateDto, CustomerView};
