pub mod form_template;
