pub mod a001_brand;
pub mod a002_category;
pub mod a003_concept;
pub mod a004_country;
pub mod a005_payment_term;
pub mod a006_unit;
pub mod a007_product;
pub mod common;
