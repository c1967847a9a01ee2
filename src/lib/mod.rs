pub mod config;
pub mod errors;
pub mod repository;
pub mod supabase;
pub mod words;
