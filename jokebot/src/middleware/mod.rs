mod typing;

pub use typing::TypingMiddleware;
