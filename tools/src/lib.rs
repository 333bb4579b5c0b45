pub mod activation;

pub use activation::{activation_assistant, ActivationNotifier, ActivationRequest, Customer};
