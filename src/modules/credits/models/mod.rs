mod credit;
mod credit_dto;

pub use credit::{Credit, CreditStatus};
pub use credit_dto::{
    CreditDto, CreditView, CreditViewList, MAX_FIRST_INSTALLMENT_MONTHS, MAX_INSTALLMENTS,
};
