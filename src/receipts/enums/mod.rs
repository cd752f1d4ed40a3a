pub mod receipt_field;
