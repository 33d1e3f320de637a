//! SealToken: password-based AES-256-GCM encryption of files and text
//! into a single portable token.
//!
//! The library entry points live in [`pipeline`]; [`cli`] is the terminal
//! front-end built on top of them.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod password;
pub mod pipeline;
pub mod token;

pub use errors::{Result, SealTokenError};
pub use pipeline::{
    decrypt, decrypt_file, decrypt_text, encrypt_file, encrypt_text, Decrypted, DecryptedFile,
    FileEncryption, PlainFile, TextEncryption,
};
pub use token::{classify, Token, TokenKind};
