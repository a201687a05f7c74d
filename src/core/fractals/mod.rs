pub mod fractal_field;
pub mod update_rule;
