pub mod checkout;
pub mod compare;
pub mod demo;
pub mod sort;
