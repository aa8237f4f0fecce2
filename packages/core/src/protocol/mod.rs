// Протокол HTTP API: сообщения и валидация

pub mod messages;
pub mod validation;
