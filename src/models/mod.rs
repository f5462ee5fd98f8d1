pub mod response;
pub mod template;
pub mod validation;
pub mod whatsapp;
