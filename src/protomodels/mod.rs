// @generated

pub mod tensor_bundle;
