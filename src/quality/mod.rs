pub(crate) mod policy;
pub(crate) mod validator;
