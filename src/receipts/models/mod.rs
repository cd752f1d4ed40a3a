pub mod receipt_record;
