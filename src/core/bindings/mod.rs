pub mod binding_set;
pub mod dimension_binding;
